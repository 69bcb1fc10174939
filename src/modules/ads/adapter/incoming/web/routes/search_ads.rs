use actix_web::{post, web, Responder};
use tracing::error;

use crate::ads::application::use_cases::search_ads::AdSearchError;
use crate::shared::api::ApiResponse;
use crate::shared::search::AdSearchRequest;
use crate::AppState;

// Public endpoint: browsing listings needs no account.
#[post("/api/ads/search")]
pub async fn search_ads_handler(
    body: web::Json<AdSearchRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.search_ads_use_case.execute(body.into_inner()).await {
        Ok(ads) => ApiResponse::success(ads),

        Err(AdSearchError::Validation(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(AdSearchError::QueryError(e)) => {
            error!(error = %e, "ad search failed");
            ApiResponse::internal_error()
        }
    }
}
