use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::delete_account::DeleteAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/auth/account")]
pub async fn delete_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.delete_account_use_case.execute(&user.user_id).await {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteAccountError::RepositoryError(e)) => {
            error!(error = %e, "account deletion failed");
            ApiResponse::internal_error()
        }
    }
}
