use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::use_cases::delete_profile::DeleteProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/profile")]
pub async fn delete_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.delete_profile_use_case.execute(&user.user_id).await {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteProfileError::RepositoryError(e)) => {
            error!(error = %e, "profile deletion failed");
            ApiResponse::internal_error()
        }
    }
}
