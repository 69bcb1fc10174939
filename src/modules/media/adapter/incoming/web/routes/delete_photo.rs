use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::media::application::use_cases::delete_photo::DeletePhotoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/photos/{storage_id}")]
pub async fn delete_photo_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let storage_id = path.into_inner();

    match data
        .delete_photo_use_case
        .execute(&user.user_id, &storage_id)
        .await
    {
        Ok(()) => ApiResponse::ok(),

        Err(DeletePhotoError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(DeletePhotoError::PhotoNotFound) => {
            ApiResponse::not_found("PHOTO_NOT_FOUND", "Photo not found")
        }

        Err(DeletePhotoError::StoreError(e)) => {
            error!(error = %e, "photo deletion failed");
            ApiResponse::internal_error()
        }
    }
}
