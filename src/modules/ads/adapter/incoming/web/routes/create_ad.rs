use actix_web::{post, web, Responder};
use tracing::error;

use crate::ads::application::ports::outgoing::CreateAdData;
use crate::ads::application::use_cases::create_ad::CreateAdError;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/ads")]
pub async fn create_ad_handler(
    user: AuthenticatedUser,
    body: web::Json<CreateAdData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .create_ad_use_case
        .execute(&user.user_id, body.into_inner())
        .await
    {
        Ok(ad) => ApiResponse::created(ad),

        Err(CreateAdError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(CreateAdError::RepositoryError(e)) => {
            error!(error = %e, "ad creation failed");
            ApiResponse::internal_error()
        }
    }
}
