use actix_web::{post, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::messaging::application::use_cases::send_message::{
    SendMessageError, SendMessageRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/messages/send")]
pub async fn send_message_handler(
    user: AuthenticatedUser,
    body: web::Json<SendMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .send_message_use_case
        .execute(&user.user_id, body.into_inner())
        .await
    {
        Ok(message) => ApiResponse::created(message),

        Err(SendMessageError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(SendMessageError::SelfMessage) => {
            ApiResponse::bad_request("SELF_MESSAGE", "You cannot message yourself")
        }

        Err(SendMessageError::AdNotFound) => {
            ApiResponse::not_found("AD_NOT_FOUND", "Ad not found or inactive")
        }

        Err(SendMessageError::RepositoryError(e)) => {
            error!(error = %e, "message send failed");
            ApiResponse::internal_error()
        }
    }
}
