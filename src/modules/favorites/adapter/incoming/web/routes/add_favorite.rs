use actix_web::{post, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::favorites::application::use_cases::add_favorite::AddFavoriteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/favorites/add/{ad_id}")]
pub async fn add_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ad_id = path.into_inner();

    match data
        .add_favorite_use_case
        .execute(&user.user_id, &ad_id)
        .await
    {
        Ok(()) => ApiResponse::created(serde_json::json!({ "ad_id": ad_id })),

        Err(AddFavoriteError::AdNotFound) => {
            ApiResponse::not_found("AD_NOT_FOUND", "Ad not found or inactive")
        }

        Err(AddFavoriteError::OwnAd) => {
            ApiResponse::bad_request("OWN_AD", "You cannot favorite your own ad")
        }

        Err(AddFavoriteError::AlreadyFavorited) => {
            ApiResponse::conflict("ALREADY_FAVORITED", "Ad is already in your favorites")
        }

        Err(AddFavoriteError::RepositoryError(e)) => {
            error!(error = %e, "favorite add failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::TokenProvider;
    use crate::favorites::application::use_cases::add_favorite::IAddFavoriteUseCase;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{create_test_jwt_service, TEST_USER_ID},
    };
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    const AD_ID: &str = "64b0c0c0c0c0c0c0c0c0c0a1";

    struct MockAddFavoriteUseCase {
        pub outcome: Result<(), AddFavoriteError>,
    }

    #[async_trait]
    impl IAddFavoriteUseCase for MockAddFavoriteUseCase {
        async fn execute(&self, _user_id: &str, _ad_id: &str) -> Result<(), AddFavoriteError> {
            self.outcome.clone()
        }
    }

    async fn call_with(outcome: Result<(), AddFavoriteError>) -> actix_web::http::StatusCode {
        let app_state = TestAppStateBuilder::default()
            .with_add_favorite(MockAddFavoriteUseCase { outcome })
            .build();

        let jwt_service = create_test_jwt_service();
        let token = jwt_service
            .issue_token(TEST_USER_ID)
            .expect("Failed to generate token");
        let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service);

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(token_provider))
                .service(add_favorite_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/favorites/add/{}", AD_ID))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_add_favorite_created() {
        assert_eq!(call_with(Ok(())).await, 201);
    }

    #[actix_web::test]
    async fn test_add_favorite_conflict() {
        assert_eq!(call_with(Err(AddFavoriteError::AlreadyFavorited)).await, 409);
    }

    #[actix_web::test]
    async fn test_add_favorite_own_ad() {
        assert_eq!(call_with(Err(AddFavoriteError::OwnAd)).await, 400);
    }

    #[actix_web::test]
    async fn test_add_favorite_missing_ad() {
        assert_eq!(call_with(Err(AddFavoriteError::AdNotFound)).await, 404);
    }

    #[actix_web::test]
    async fn test_add_favorite_requires_auth() {
        let app_state = TestAppStateBuilder::default().build();
        let token_provider: Arc<dyn TokenProvider> = Arc::new(create_test_jwt_service());

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(token_provider))
                .service(add_favorite_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/favorites/add/{}", AD_ID))
            // No Authorization header
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
