use actix_web::{get, web, Responder};
use tracing::error;

use crate::ads::application::use_cases::fetch_ad::FetchAdError;
use crate::shared::api::ApiResponse;
use crate::AppState;

// Public: listing details need no account.
#[get("/api/ads/{ad_id}")]
pub async fn get_ad_handler(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let ad_id = path.into_inner();

    match data.fetch_ad_use_case.execute(&ad_id).await {
        Ok(ad) => ApiResponse::success(ad),

        Err(FetchAdError::AdNotFound) => ApiResponse::not_found("AD_NOT_FOUND", "Ad not found"),

        Err(FetchAdError::RepositoryError(e)) => {
            error!(error = %e, "ad fetch failed");
            ApiResponse::internal_error()
        }
    }
}
