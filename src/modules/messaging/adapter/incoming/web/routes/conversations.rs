use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::messaging::application::use_cases::list_conversations::ListConversationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/messages/conversations")]
pub async fn conversations_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_conversations_use_case
        .execute(&user.user_id)
        .await
    {
        Ok(conversations) => ApiResponse::success(conversations),

        Err(ListConversationsError::QueryError(e)) => {
            error!(error = %e, "conversation listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::TokenProvider;
    use crate::messaging::application::use_cases::list_conversations::IListConversationsUseCase;
    use crate::messaging::domain::ConversationSummary;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{create_test_jwt_service, TEST_USER_ID},
    };
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    struct MockListConversationsUseCase {
        pub summaries: Vec<ConversationSummary>,
    }

    #[async_trait]
    impl IListConversationsUseCase for MockListConversationsUseCase {
        async fn execute(
            &self,
            _user_id: &str,
        ) -> Result<Vec<ConversationSummary>, ListConversationsError> {
            Ok(self.summaries.clone())
        }
    }

    #[actix_web::test]
    async fn test_conversations_round_trip_as_json() {
        let summary = ConversationSummary {
            counterpart_id: "64b0c0c0c0c0c0c0c0c0c002".to_string(),
            counterpart_email: Some("u2@example.com".to_string()),
            ad_id: "64b0c0c0c0c0c0c0c0c0c0a1".to_string(),
            ad_title: Some("Hiking partner".to_string()),
            ad_name: Some("Jane".to_string()),
            ad_photo: None,
            last_message: "hey".to_string(),
            last_message_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 5, 0).unwrap(),
            last_message_from_me: false,
            unread_count: 1,
        };

        let app_state = TestAppStateBuilder::default()
            .with_list_conversations(MockListConversationsUseCase {
                summaries: vec![summary.clone()],
            })
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
                .service(conversations_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/messages/conversations")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["last_message"], "hey");
        assert_eq!(body["data"][0]["unread_count"], 1);
    }
}
