use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile_use_case.execute(&user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(FetchProfileError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(FetchProfileError::RepositoryError(e)) => {
            error!(error = %e, "profile fetch failed");
            ApiResponse::internal_error()
        }
    }
}
