use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_current_user::FetchCurrentUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/auth/me")]
pub async fn current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_current_user_use_case.execute(&user.user_id).await {
        Ok(info) => ApiResponse::success(info),

        Err(FetchCurrentUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchCurrentUserError::QueryError(e)) => {
            error!(error = %e, "current-user lookup failed");
            ApiResponse::internal_error()
        }
    }
}
