use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::messaging::application::use_cases::unread_count::UnreadCountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct UnreadCountResponse {
    unread_count: u64,
}

#[get("/api/messages/unread-count")]
pub async fn unread_count_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.unread_count_use_case.execute(&user.user_id).await {
        Ok(unread_count) => ApiResponse::success(UnreadCountResponse { unread_count }),

        Err(UnreadCountError::QueryError(e)) => {
            error!(error = %e, "unread count failed");
            ApiResponse::internal_error()
        }
    }
}
