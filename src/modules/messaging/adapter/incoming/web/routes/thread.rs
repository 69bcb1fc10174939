use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::messaging::application::use_cases::fetch_thread::FetchThreadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Chronological chat history with one user about one listing. Fetching
/// it marks the unread messages received in this thread as read.
#[get("/api/messages/chat/{counterpart_id}/{ad_id}")]
pub async fn thread_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (counterpart_id, ad_id) = path.into_inner();

    match data
        .fetch_thread_use_case
        .execute(&user.user_id, &counterpart_id, &ad_id)
        .await
    {
        Ok(messages) => ApiResponse::success(messages),

        Err(FetchThreadError::QueryError(e)) => {
            error!(error = %e, "thread fetch failed");
            ApiResponse::internal_error()
        }
    }
}
