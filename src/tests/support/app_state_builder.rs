use actix_web::web;
use std::sync::Arc;

use crate::ads::application::use_cases::search_ads::ISearchAdsUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::favorites::application::use_cases::add_favorite::IAddFavoriteUseCase;
use crate::messaging::application::use_cases::list_conversations::IListConversationsUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` backed entirely by stubs; tests swap in a mock
/// for the single use case they exercise.
pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            state: AppState {
                register_user_use_case: Arc::new(StubRegisterUserUseCase),
                login_user_use_case: Arc::new(StubLoginUserUseCase),
                fetch_current_user_use_case: Arc::new(StubFetchCurrentUserUseCase),
                delete_account_use_case: Arc::new(StubDeleteAccountUseCase),
                fetch_profile_use_case: Arc::new(StubFetchProfileUseCase),
                save_profile_use_case: Arc::new(StubSaveProfileUseCase),
                delete_profile_use_case: Arc::new(StubDeleteProfileUseCase),
                search_profiles_use_case: Arc::new(StubSearchProfilesUseCase),
                suggest_matches_use_case: Arc::new(StubSuggestMatchesUseCase),
                create_ad_use_case: Arc::new(StubCreateAdUseCase),
                update_ad_use_case: Arc::new(StubUpdateAdUseCase),
                delete_ad_use_case: Arc::new(StubDeleteAdUseCase),
                fetch_ad_use_case: Arc::new(StubFetchAdUseCase),
                list_my_ads_use_case: Arc::new(StubListMyAdsUseCase),
                search_ads_use_case: Arc::new(StubSearchAdsUseCase),
                list_conversations_use_case: Arc::new(StubListConversationsUseCase),
                fetch_thread_use_case: Arc::new(StubFetchThreadUseCase),
                send_message_use_case: Arc::new(StubSendMessageUseCase),
                unread_count_use_case: Arc::new(StubUnreadCountUseCase),
                add_favorite_use_case: Arc::new(StubAddFavoriteUseCase),
                remove_favorite_use_case: Arc::new(StubRemoveFavoriteUseCase),
                list_favorites_use_case: Arc::new(StubListFavoritesUseCase),
                check_favorite_use_case: Arc::new(StubCheckFavoriteUseCase),
                upload_photo_use_case: Arc::new(StubUploadPhotoUseCase),
                delete_photo_use_case: Arc::new(StubDeletePhotoUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_user(mut self, use_case: impl ILoginUserUseCase + 'static) -> Self {
        self.state.login_user_use_case = Arc::new(use_case);
        self
    }

    pub fn with_search_ads(mut self, use_case: impl ISearchAdsUseCase + 'static) -> Self {
        self.state.search_ads_use_case = Arc::new(use_case);
        self
    }

    pub fn with_add_favorite(mut self, use_case: impl IAddFavoriteUseCase + 'static) -> Self {
        self.state.add_favorite_use_case = Arc::new(use_case);
        self
    }

    pub fn with_list_conversations(
        mut self,
        use_case: impl IListConversationsUseCase + 'static,
    ) -> Self {
        self.state.list_conversations_use_case = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
