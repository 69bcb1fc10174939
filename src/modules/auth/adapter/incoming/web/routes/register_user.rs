use actix_web::{post, web, Responder};
use tracing::error;

use crate::auth::application::use_cases::register_user::{RegisterError, RegisterRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/auth/register")]
pub async fn register_user_handler(
    body: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.register_user_use_case.execute(body.into_inner()).await {
        Ok(session) => ApiResponse::created(session),

        Err(RegisterError::EmailTaken) => {
            ApiResponse::conflict("EMAIL_TAKEN", "Email already registered")
        }

        Err(e) => {
            error!(error = %e, "user registration failed");
            ApiResponse::internal_error()
        }
    }
}
