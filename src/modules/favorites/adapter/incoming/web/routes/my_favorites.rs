use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::favorites::application::use_cases::list_favorites::ListFavoritesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/favorites/my-favorites")]
pub async fn my_favorites_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_favorites_use_case.execute(&user.user_id).await {
        Ok(ads) => ApiResponse::success(ads),

        Err(ListFavoritesError::RepositoryError(e)) => {
            error!(error = %e, "favorites listing failed");
            ApiResponse::internal_error()
        }
    }
}
