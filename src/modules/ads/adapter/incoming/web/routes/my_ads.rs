use actix_web::{get, web, Responder};
use tracing::error;

use crate::ads::application::use_cases::list_my_ads::ListMyAdsError;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/ads/my-ads")]
pub async fn my_ads_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.list_my_ads_use_case.execute(&user.user_id).await {
        Ok(ads) => ApiResponse::success(ads),

        Err(ListMyAdsError::QueryError(e)) => {
            error!(error = %e, "my-ads listing failed");
            ApiResponse::internal_error()
        }
    }
}
