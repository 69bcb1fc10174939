use actix_web::http::header::CONTENT_TYPE;
use actix_web::{post, web, HttpRequest, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::media::application::use_cases::upload_photo::UploadPhotoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Raw image upload; the payload size cap comes from the server's
/// `PayloadConfig`.
#[post("/api/photos")]
pub async fn upload_photo_handler(
    user: AuthenticatedUser,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let is_image = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("image/"))
        .unwrap_or(false);
    if !is_image {
        return ApiResponse::bad_request("UNSUPPORTED_MEDIA", "Only image uploads are accepted");
    }
    if body.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "No image provided");
    }

    match data
        .upload_photo_use_case
        .execute(&user.user_id, body.to_vec())
        .await
    {
        Ok(photo) => ApiResponse::created(photo),

        Err(UploadPhotoError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Create your profile first")
        }

        Err(UploadPhotoError::PhotoLimitReached) => {
            ApiResponse::bad_request("PHOTO_LIMIT", "You can have at most 6 photos")
        }

        Err(UploadPhotoError::StoreError(e)) => {
            error!(error = %e, "photo upload failed");
            ApiResponse::internal_error()
        }
    }
}
