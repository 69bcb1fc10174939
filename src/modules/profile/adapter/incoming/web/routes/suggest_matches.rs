use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::use_cases::suggest_matches::SuggestMatchesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/profile/matches")]
pub async fn suggest_matches_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.suggest_matches_use_case.execute(&user.user_id).await {
        Ok(matches) => ApiResponse::success(matches),

        Err(SuggestMatchesError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Complete your profile first")
        }

        Err(SuggestMatchesError::RepositoryError(e)) => {
            error!(error = %e, "match suggestion failed");
            ApiResponse::internal_error()
        }
    }
}
