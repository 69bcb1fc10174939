use actix_web::{put, web, Responder};
use tracing::error;

use crate::ads::application::ports::outgoing::UpdateAdData;
use crate::ads::application::use_cases::update_ad::UpdateAdError;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/ads/{ad_id}")]
pub async fn update_ad_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    body: web::Json<UpdateAdData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ad_id = path.into_inner();

    match data
        .update_ad_use_case
        .execute(&ad_id, &user.user_id, body.into_inner())
        .await
    {
        Ok(ad) => ApiResponse::success(ad),

        Err(UpdateAdError::AdNotFound) => {
            ApiResponse::not_found("AD_NOT_FOUND", "Ad not found or not yours")
        }

        Err(UpdateAdError::RepositoryError(e)) => {
            error!(error = %e, "ad update failed");
            ApiResponse::internal_error()
        }
    }
}
