use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::favorites::application::use_cases::remove_favorite::RemoveFavoriteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/favorites/remove/{ad_id}")]
pub async fn remove_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ad_id = path.into_inner();

    match data
        .remove_favorite_use_case
        .execute(&user.user_id, &ad_id)
        .await
    {
        Ok(()) => ApiResponse::ok(),

        Err(RemoveFavoriteError::NotFavorited) => {
            ApiResponse::not_found("NOT_FAVORITED", "Ad is not in your favorites")
        }

        Err(RemoveFavoriteError::RepositoryError(e)) => {
            error!(error = %e, "favorite removal failed");
            ApiResponse::internal_error()
        }
    }
}
