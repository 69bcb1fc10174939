use actix_web::{post, web, Responder};
use tracing::error;

use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/login")]
pub async fn login_user_handler(
    body: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.login_user_use_case.execute(body.into_inner()).await {
        Ok(session) => ApiResponse::success(session),

        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(e) => {
            error!(error = %e, "login failed");
            ApiResponse::internal_error()
        }
    }
}
