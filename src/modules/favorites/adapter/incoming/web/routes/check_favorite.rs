use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::favorites::application::use_cases::check_favorite::CheckFavoriteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct CheckFavoriteResponse {
    is_favorite: bool,
}

#[get("/api/favorites/check/{ad_id}")]
pub async fn check_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ad_id = path.into_inner();

    match data
        .check_favorite_use_case
        .execute(&user.user_id, &ad_id)
        .await
    {
        Ok(is_favorite) => ApiResponse::success(CheckFavoriteResponse { is_favorite }),

        Err(CheckFavoriteError::RepositoryError(e)) => {
            error!(error = %e, "favorite check failed");
            ApiResponse::internal_error()
        }
    }
}
