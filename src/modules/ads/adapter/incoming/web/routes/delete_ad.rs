use actix_web::{delete, web, Responder};
use tracing::error;

use crate::ads::application::use_cases::delete_ad::DeleteAdError;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/ads/{ad_id}")]
pub async fn delete_ad_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ad_id = path.into_inner();

    match data
        .delete_ad_use_case
        .execute(&ad_id, &user.user_id)
        .await
    {
        Ok(()) => ApiResponse::ok(),

        Err(DeleteAdError::AdNotFound) => {
            ApiResponse::not_found("AD_NOT_FOUND", "Ad not found or not yours")
        }

        Err(DeleteAdError::RepositoryError(e)) => {
            error!(error = %e, "ad deletion failed");
            ApiResponse::internal_error()
        }
    }
}
