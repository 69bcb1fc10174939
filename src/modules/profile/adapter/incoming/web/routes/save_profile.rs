use actix_web::{post, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::ports::outgoing::ProfileDraft;
use crate::profile::application::use_cases::save_profile::SaveProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/profile")]
pub async fn save_profile_handler(
    user: AuthenticatedUser,
    body: web::Json<ProfileDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .save_profile_use_case
        .execute(&user.user_id, body.into_inner())
        .await
    {
        Ok(profile) => ApiResponse::success(profile),

        Err(SaveProfileError::RepositoryError(e)) => {
            error!(error = %e, "profile save failed");
            ApiResponse::internal_error()
        }
    }
}
