use actix_web::{post, web, Responder};
use tracing::error;

use crate::profile::application::use_cases::search_profiles::ProfileSearchError;
use crate::shared::api::ApiResponse;
use crate::shared::search::ProfileSearchRequest;
use crate::AppState;

// Public endpoint: browsing profiles needs no account.
#[post("/api/profile/search")]
pub async fn search_profiles_handler(
    body: web::Json<ProfileSearchRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .search_profiles_use_case
        .execute(body.into_inner())
        .await
    {
        Ok(profiles) => ApiResponse::success(profiles),

        Err(ProfileSearchError::Validation(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(ProfileSearchError::QueryError(e)) => {
            error!(error = %e, "profile search failed");
            ApiResponse::internal_error()
        }
    }
}
