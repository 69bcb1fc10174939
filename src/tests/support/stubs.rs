//! Default stand-ins for every use case, so handler tests only need to
//! mock the one they exercise.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::ads::application::ports::outgoing::{CreateAdData, UpdateAdData};
use crate::ads::application::use_cases::create_ad::{CreateAdError, ICreateAdUseCase};
use crate::ads::application::use_cases::delete_ad::{DeleteAdError, IDeleteAdUseCase};
use crate::ads::application::use_cases::fetch_ad::{FetchAdError, IFetchAdUseCase};
use crate::ads::application::use_cases::list_my_ads::{IListMyAdsUseCase, ListMyAdsError};
use crate::ads::application::use_cases::search_ads::{AdSearchError, ISearchAdsUseCase};
use crate::ads::application::use_cases::update_ad::{IUpdateAdUseCase, UpdateAdError};
use crate::ads::domain::Ad;
use crate::auth::application::use_cases::delete_account::{
    DeleteAccountError, IDeleteAccountUseCase,
};
use crate::auth::application::use_cases::fetch_current_user::{
    FetchCurrentUserError, IFetchCurrentUserUseCase,
};
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginError, LoginRequest};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterError, RegisterRequest,
};
use crate::auth::domain::{AuthSession, AuthUserInfo};
use crate::favorites::application::use_cases::add_favorite::{AddFavoriteError, IAddFavoriteUseCase};
use crate::favorites::application::use_cases::check_favorite::{
    CheckFavoriteError, ICheckFavoriteUseCase,
};
use crate::favorites::application::use_cases::list_favorites::{
    IListFavoritesUseCase, ListFavoritesError,
};
use crate::favorites::application::use_cases::remove_favorite::{
    IRemoveFavoriteUseCase, RemoveFavoriteError,
};
use crate::media::application::use_cases::delete_photo::{DeletePhotoError, IDeletePhotoUseCase};
use crate::media::application::use_cases::upload_photo::{IUploadPhotoUseCase, UploadPhotoError};
use crate::messaging::application::use_cases::fetch_thread::{FetchThreadError, IFetchThreadUseCase};
use crate::messaging::application::use_cases::list_conversations::{
    IListConversationsUseCase, ListConversationsError,
};
use crate::messaging::application::use_cases::send_message::{
    ISendMessageUseCase, SendMessageError, SendMessageRequest,
};
use crate::messaging::application::use_cases::unread_count::{IUnreadCountUseCase, UnreadCountError};
use crate::messaging::domain::{ConversationSummary, Message};
use crate::profile::application::ports::outgoing::ProfileDraft;
use crate::profile::application::use_cases::delete_profile::{
    DeleteProfileError, IDeleteProfileUseCase,
};
use crate::profile::application::use_cases::fetch_profile::{FetchProfileError, IFetchProfileUseCase};
use crate::profile::application::use_cases::save_profile::{ISaveProfileUseCase, SaveProfileError};
use crate::profile::application::use_cases::search_profiles::{
    ISearchProfilesUseCase, ProfileSearchError,
};
use crate::profile::application::use_cases::suggest_matches::{
    ISuggestMatchesUseCase, SuggestMatchesError,
};
use crate::profile::domain::{Photo, Profile};
use crate::shared::search::{AdSearchRequest, ProfileSearchRequest};

pub fn stub_session() -> AuthSession {
    AuthSession {
        token: "stub-token".to_string(),
        user: AuthUserInfo {
            id: "64b0c0c0c0c0c0c0c0c0c0c0".to_string(),
            email: "stub@example.com".to_string(),
        },
    }
}

pub fn stub_profile() -> Profile {
    Profile {
        id: "64b0c0c0c0c0c0c0c0c0c0d0".to_string(),
        user_id: "64b0c0c0c0c0c0c0c0c0c0c0".to_string(),
        name: Some("Jane".to_string()),
        age: Some(29),
        gender: Some("Female".to_string()),
        country: Some("Romania".to_string()),
        city: None,
        occupation: None,
        phone_number: None,
        height: None,
        education: None,
        smoking_habit: None,
        drinking_habit: None,
        fitness_level: None,
        diet: None,
        pet_preference: None,
        introvert_extrovert: None,
        spontaneous_planned: None,
        creative_analytical: None,
        relationship_type: None,
        wants_children: None,
        religion_importance: None,
        political_alignment: None,
        interests: vec![],
        photos: vec![],
        partner_age_min: None,
        partner_age_max: None,
        partner_gender: None,
        deal_breakers: vec![],
        bio: None,
        profile_complete: true,
        last_updated: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

pub fn stub_ad() -> Ad {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    Ad {
        id: "64b0c0c0c0c0c0c0c0c0c0a1".to_string(),
        user_id: "64b0c0c0c0c0c0c0c0c0c0c0".to_string(),
        title: "Hiking partner".to_string(),
        bio: "I spend most weekends in the mountains.".to_string(),
        name: "Jane".to_string(),
        age: 29,
        gender: "Female".to_string(),
        country: "Romania".to_string(),
        city: None,
        phone_number: "+40712345678".to_string(),
        relationship_type: "Casual".to_string(),
        interests: vec![],
        has_children: None,
        wants_children: None,
        education: None,
        height: None,
        smoking: None,
        drinking: None,
        religion: None,
        languages: vec![],
        body_type: None,
        relationship_status: None,
        photos: vec![],
        active: true,
        views: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn stub_message() -> Message {
    Message {
        id: "64b0c0c0c0c0c0c0c0c0c0e1".to_string(),
        sender_id: "64b0c0c0c0c0c0c0c0c0c0c0".to_string(),
        receiver_id: "64b0c0c0c0c0c0c0c0c0c0c1".to_string(),
        ad_id: "64b0c0c0c0c0c0c0c0c0c0a1".to_string(),
        text: "hello".to_string(),
        read: false,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

pub fn stub_photo() -> Photo {
    Photo {
        url: "https://img.example.com/1.jpg".to_string(),
        storage_id: "img-1".to_string(),
        uploaded_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _request: RegisterRequest) -> Result<AuthSession, RegisterError> {
        Ok(stub_session())
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<AuthSession, LoginError> {
        Ok(stub_session())
    }
}

pub struct StubFetchCurrentUserUseCase;

#[async_trait]
impl IFetchCurrentUserUseCase for StubFetchCurrentUserUseCase {
    async fn execute(&self, _user_id: &str) -> Result<AuthUserInfo, FetchCurrentUserError> {
        Ok(stub_session().user)
    }
}

pub struct StubDeleteAccountUseCase;

#[async_trait]
impl IDeleteAccountUseCase for StubDeleteAccountUseCase {
    async fn execute(&self, _user_id: &str) -> Result<(), DeleteAccountError> {
        Ok(())
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: &str) -> Result<Profile, FetchProfileError> {
        Ok(stub_profile())
    }
}

pub struct StubSaveProfileUseCase;

#[async_trait]
impl ISaveProfileUseCase for StubSaveProfileUseCase {
    async fn execute(
        &self,
        _user_id: &str,
        _draft: ProfileDraft,
    ) -> Result<Profile, SaveProfileError> {
        Ok(stub_profile())
    }
}

pub struct StubDeleteProfileUseCase;

#[async_trait]
impl IDeleteProfileUseCase for StubDeleteProfileUseCase {
    async fn execute(&self, _user_id: &str) -> Result<(), DeleteProfileError> {
        Ok(())
    }
}

pub struct StubSearchProfilesUseCase;

#[async_trait]
impl ISearchProfilesUseCase for StubSearchProfilesUseCase {
    async fn execute(
        &self,
        _request: ProfileSearchRequest,
    ) -> Result<Vec<Profile>, ProfileSearchError> {
        Ok(vec![])
    }
}

pub struct StubSuggestMatchesUseCase;

#[async_trait]
impl ISuggestMatchesUseCase for StubSuggestMatchesUseCase {
    async fn execute(&self, _user_id: &str) -> Result<Vec<Profile>, SuggestMatchesError> {
        Ok(vec![])
    }
}

pub struct StubCreateAdUseCase;

#[async_trait]
impl ICreateAdUseCase for StubCreateAdUseCase {
    async fn execute(&self, _user_id: &str, _data: CreateAdData) -> Result<Ad, CreateAdError> {
        Ok(stub_ad())
    }
}

pub struct StubUpdateAdUseCase;

#[async_trait]
impl IUpdateAdUseCase for StubUpdateAdUseCase {
    async fn execute(
        &self,
        _ad_id: &str,
        _owner_id: &str,
        _data: UpdateAdData,
    ) -> Result<Ad, UpdateAdError> {
        Ok(stub_ad())
    }
}

pub struct StubDeleteAdUseCase;

#[async_trait]
impl IDeleteAdUseCase for StubDeleteAdUseCase {
    async fn execute(&self, _ad_id: &str, _owner_id: &str) -> Result<(), DeleteAdError> {
        Ok(())
    }
}

pub struct StubFetchAdUseCase;

#[async_trait]
impl IFetchAdUseCase for StubFetchAdUseCase {
    async fn execute(&self, _ad_id: &str) -> Result<Ad, FetchAdError> {
        Ok(stub_ad())
    }
}

pub struct StubListMyAdsUseCase;

#[async_trait]
impl IListMyAdsUseCase for StubListMyAdsUseCase {
    async fn execute(&self, _owner_id: &str) -> Result<Vec<Ad>, ListMyAdsError> {
        Ok(vec![])
    }
}

pub struct StubSearchAdsUseCase;

#[async_trait]
impl ISearchAdsUseCase for StubSearchAdsUseCase {
    async fn execute(&self, _request: AdSearchRequest) -> Result<Vec<Ad>, AdSearchError> {
        Ok(vec![])
    }
}

pub struct StubListConversationsUseCase;

#[async_trait]
impl IListConversationsUseCase for StubListConversationsUseCase {
    async fn execute(
        &self,
        _user_id: &str,
    ) -> Result<Vec<ConversationSummary>, ListConversationsError> {
        Ok(vec![])
    }
}

pub struct StubFetchThreadUseCase;

#[async_trait]
impl IFetchThreadUseCase for StubFetchThreadUseCase {
    async fn execute(
        &self,
        _user_id: &str,
        _counterpart_id: &str,
        _ad_id: &str,
    ) -> Result<Vec<Message>, FetchThreadError> {
        Ok(vec![])
    }
}

pub struct StubSendMessageUseCase;

#[async_trait]
impl ISendMessageUseCase for StubSendMessageUseCase {
    async fn execute(
        &self,
        _sender_id: &str,
        _request: SendMessageRequest,
    ) -> Result<Message, SendMessageError> {
        Ok(stub_message())
    }
}

pub struct StubUnreadCountUseCase;

#[async_trait]
impl IUnreadCountUseCase for StubUnreadCountUseCase {
    async fn execute(&self, _user_id: &str) -> Result<u64, UnreadCountError> {
        Ok(0)
    }
}

pub struct StubAddFavoriteUseCase;

#[async_trait]
impl IAddFavoriteUseCase for StubAddFavoriteUseCase {
    async fn execute(&self, _user_id: &str, _ad_id: &str) -> Result<(), AddFavoriteError> {
        Ok(())
    }
}

pub struct StubRemoveFavoriteUseCase;

#[async_trait]
impl IRemoveFavoriteUseCase for StubRemoveFavoriteUseCase {
    async fn execute(&self, _user_id: &str, _ad_id: &str) -> Result<(), RemoveFavoriteError> {
        Ok(())
    }
}

pub struct StubListFavoritesUseCase;

#[async_trait]
impl IListFavoritesUseCase for StubListFavoritesUseCase {
    async fn execute(&self, _user_id: &str) -> Result<Vec<Ad>, ListFavoritesError> {
        Ok(vec![])
    }
}

pub struct StubCheckFavoriteUseCase;

#[async_trait]
impl ICheckFavoriteUseCase for StubCheckFavoriteUseCase {
    async fn execute(&self, _user_id: &str, _ad_id: &str) -> Result<bool, CheckFavoriteError> {
        Ok(false)
    }
}

pub struct StubUploadPhotoUseCase;

#[async_trait]
impl IUploadPhotoUseCase for StubUploadPhotoUseCase {
    async fn execute(&self, _user_id: &str, _bytes: Vec<u8>) -> Result<Photo, UploadPhotoError> {
        Ok(stub_photo())
    }
}

pub struct StubDeletePhotoUseCase;

#[async_trait]
impl IDeletePhotoUseCase for StubDeletePhotoUseCase {
    async fn execute(&self, _user_id: &str, _storage_id: &str) -> Result<(), DeletePhotoError> {
        Ok(())
    }
}
