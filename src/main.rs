pub mod modules;
pub use modules::ads;
pub use modules::auth;
pub use modules::favorites;
pub use modules::media;
pub use modules::messaging;
pub use modules::profile;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::bcrypt_hasher::BcryptHasher;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::user_query_mongo::UserQueryMongo;
use crate::auth::adapter::outgoing::user_repository_mongo::UserRepositoryMongo;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    delete_account::{DeleteAccountUseCase, IDeleteAccountUseCase},
    fetch_current_user::{FetchCurrentUserUseCase, IFetchCurrentUserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};

use crate::profile::adapter::outgoing::profile_query_mongo::ProfileQueryMongo;
use crate::profile::adapter::outgoing::profile_repository_mongo::ProfileRepositoryMongo;
use crate::profile::application::use_cases::{
    delete_profile::{DeleteProfileUseCase, IDeleteProfileUseCase},
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    save_profile::{ISaveProfileUseCase, SaveProfileUseCase},
    search_profiles::{ISearchProfilesUseCase, SearchProfilesUseCase},
    suggest_matches::{ISuggestMatchesUseCase, SuggestMatchesUseCase},
};

use crate::ads::adapter::outgoing::ad_query_mongo::AdQueryMongo;
use crate::ads::adapter::outgoing::ad_repository_mongo::AdRepositoryMongo;
use crate::ads::application::use_cases::{
    create_ad::{CreateAdUseCase, ICreateAdUseCase},
    delete_ad::{DeleteAdUseCase, IDeleteAdUseCase},
    fetch_ad::{FetchAdUseCase, IFetchAdUseCase},
    list_my_ads::{IListMyAdsUseCase, ListMyAdsUseCase},
    search_ads::{ISearchAdsUseCase, SearchAdsUseCase},
    update_ad::{IUpdateAdUseCase, UpdateAdUseCase},
};

use crate::messaging::adapter::outgoing::message_query_mongo::MessageQueryMongo;
use crate::messaging::adapter::outgoing::message_repository_mongo::MessageRepositoryMongo;
use crate::messaging::application::use_cases::{
    fetch_thread::{FetchThreadUseCase, IFetchThreadUseCase},
    list_conversations::{IListConversationsUseCase, ListConversationsUseCase},
    send_message::{ISendMessageUseCase, SendMessageUseCase},
    unread_count::{IUnreadCountUseCase, UnreadCountUseCase},
};

use crate::favorites::adapter::outgoing::favorite_repository_mongo::FavoriteRepositoryMongo;
use crate::favorites::application::use_cases::{
    add_favorite::{AddFavoriteUseCase, IAddFavoriteUseCase},
    check_favorite::{CheckFavoriteUseCase, ICheckFavoriteUseCase},
    list_favorites::{IListFavoritesUseCase, ListFavoritesUseCase},
    remove_favorite::{IRemoveFavoriteUseCase, RemoveFavoriteUseCase},
};

use crate::media::adapter::outgoing::{ImageHostClient, ImageHostConfig};
use crate::media::application::use_cases::{
    delete_photo::{DeletePhotoUseCase, IDeletePhotoUseCase},
    upload_photo::{IUploadPhotoUseCase, UploadPhotoUseCase},
};

use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    // auth
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase>,
    pub fetch_current_user_use_case: Arc<dyn IFetchCurrentUserUseCase>,
    pub delete_account_use_case: Arc<dyn IDeleteAccountUseCase>,
    // profile
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase>,
    pub save_profile_use_case: Arc<dyn ISaveProfileUseCase>,
    pub delete_profile_use_case: Arc<dyn IDeleteProfileUseCase>,
    pub search_profiles_use_case: Arc<dyn ISearchProfilesUseCase>,
    pub suggest_matches_use_case: Arc<dyn ISuggestMatchesUseCase>,
    // ads
    pub create_ad_use_case: Arc<dyn ICreateAdUseCase>,
    pub update_ad_use_case: Arc<dyn IUpdateAdUseCase>,
    pub delete_ad_use_case: Arc<dyn IDeleteAdUseCase>,
    pub fetch_ad_use_case: Arc<dyn IFetchAdUseCase>,
    pub list_my_ads_use_case: Arc<dyn IListMyAdsUseCase>,
    pub search_ads_use_case: Arc<dyn ISearchAdsUseCase>,
    // messaging
    pub list_conversations_use_case: Arc<dyn IListConversationsUseCase>,
    pub fetch_thread_use_case: Arc<dyn IFetchThreadUseCase>,
    pub send_message_use_case: Arc<dyn ISendMessageUseCase>,
    pub unread_count_use_case: Arc<dyn IUnreadCountUseCase>,
    // favorites
    pub add_favorite_use_case: Arc<dyn IAddFavoriteUseCase>,
    pub remove_favorite_use_case: Arc<dyn IRemoveFavoriteUseCase>,
    pub list_favorites_use_case: Arc<dyn IListFavoritesUseCase>,
    pub check_favorite_use_case: Arc<dyn ICheckFavoriteUseCase>,
    // media
    pub upload_photo_use_case: Arc<dyn IUploadPhotoUseCase>,
    pub delete_photo_use_case: Arc<dyn IDeletePhotoUseCase>,
}

/// Indexes the application relies on; uniqueness on users.email,
/// profiles.user_id and favorite_ads.(user_id, ad_id) is load-bearing
/// (the application-level pre-checks are advisory only).
async fn ensure_indexes(db: &Database) -> mongodb::error::Result<()> {
    let unique = IndexOptions::builder().unique(true).build();

    db.collection::<Document>("users")
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique.clone())
                .build(),
        )
        .await?;

    db.collection::<Document>("profiles")
        .create_index(
            IndexModel::builder()
                .keys(doc! { "user_id": 1 })
                .options(unique.clone())
                .build(),
        )
        .await?;

    db.collection::<Document>("favorite_ads")
        .create_index(
            IndexModel::builder()
                .keys(doc! { "user_id": 1, "ad_id": 1 })
                .options(unique)
                .build(),
        )
        .await?;

    db.collection::<Document>("messages")
        .create_index(
            IndexModel::builder()
                .keys(doc! { "sender_id": 1, "receiver_id": 1, "created_at": -1 })
                .build(),
        )
        .await?;
    db.collection::<Document>("messages")
        .create_index(
            IndexModel::builder()
                .keys(doc! { "receiver_id": 1, "read": 1 })
                .build(),
        )
        .await?;

    db.collection::<Document>("ads")
        .create_index(
            IndexModel::builder()
                .keys(doc! { "user_id": 1, "active": 1 })
                .build(),
        )
        .await?;
    db.collection::<Document>("ads")
        .create_index(
            IndexModel::builder()
                .keys(doc! { "gender": 1, "age": 1, "relationship_type": 1, "active": 1 })
                .build(),
        )
        .await?;
    db.collection::<Document>("ads")
        .create_index(IndexModel::builder().keys(doc! { "created_at": -1 }).build())
        .await?;

    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    dotenvy::dotenv().ok();

    let mongo_url = env::var("MONGODB_URL").expect("MONGODB_URL is not set in .env file");
    let db_name = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "amora".to_string());
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let client = Client::with_uri_str(&mongo_url)
        .await
        .expect("Failed to connect to database");
    let db = client.database(&db_name);

    ensure_indexes(&db).await.expect("Failed to create indexes");

    // Outgoing adapters
    let user_query = UserQueryMongo::new(&db);
    let user_repo = UserRepositoryMongo::new(&db);
    let profile_repo = ProfileRepositoryMongo::new(&db);
    let profile_query = ProfileQueryMongo::new(&db);
    let ad_repo = AdRepositoryMongo::new(&db);
    let ad_query = AdQueryMongo::new(&db);
    let message_query = MessageQueryMongo::new(&db);
    let message_repo = MessageRepositoryMongo::new(&db);
    let favorite_repo = FavoriteRepositoryMongo::new(&db);
    let image_store = ImageHostClient::new(ImageHostConfig::from_env());

    let token_provider: Arc<dyn TokenProvider> =
        Arc::new(JwtTokenService::new(JwtConfig::from_env()));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher);

    let state = AppState {
        register_user_use_case: Arc::new(RegisterUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            password_hasher.clone(),
            token_provider.clone(),
        )),
        login_user_use_case: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            password_hasher,
            token_provider.clone(),
        )),
        fetch_current_user_use_case: Arc::new(FetchCurrentUserUseCase::new(user_query.clone())),
        delete_account_use_case: Arc::new(DeleteAccountUseCase::new(user_repo)),

        fetch_profile_use_case: Arc::new(FetchProfileUseCase::new(profile_repo.clone())),
        save_profile_use_case: Arc::new(SaveProfileUseCase::new(profile_repo.clone())),
        delete_profile_use_case: Arc::new(DeleteProfileUseCase::new(profile_repo.clone())),
        search_profiles_use_case: Arc::new(SearchProfilesUseCase::new(profile_query.clone())),
        suggest_matches_use_case: Arc::new(SuggestMatchesUseCase::new(
            profile_repo.clone(),
            profile_query,
        )),

        create_ad_use_case: Arc::new(CreateAdUseCase::new(ad_repo.clone())),
        update_ad_use_case: Arc::new(UpdateAdUseCase::new(ad_repo.clone())),
        delete_ad_use_case: Arc::new(DeleteAdUseCase::new(ad_repo.clone())),
        fetch_ad_use_case: Arc::new(FetchAdUseCase::new(ad_repo)),
        list_my_ads_use_case: Arc::new(ListMyAdsUseCase::new(ad_query.clone())),
        search_ads_use_case: Arc::new(SearchAdsUseCase::new(ad_query.clone())),

        list_conversations_use_case: Arc::new(ListConversationsUseCase::new(
            message_query.clone(),
            ad_query.clone(),
            user_query,
        )),
        fetch_thread_use_case: Arc::new(FetchThreadUseCase::new(
            message_query.clone(),
            message_repo.clone(),
        )),
        send_message_use_case: Arc::new(SendMessageUseCase::new(message_repo, ad_query.clone())),
        unread_count_use_case: Arc::new(UnreadCountUseCase::new(message_query)),

        add_favorite_use_case: Arc::new(AddFavoriteUseCase::new(
            favorite_repo.clone(),
            ad_query.clone(),
        )),
        remove_favorite_use_case: Arc::new(RemoveFavoriteUseCase::new(favorite_repo.clone())),
        list_favorites_use_case: Arc::new(ListFavoritesUseCase::new(
            favorite_repo.clone(),
            ad_query,
        )),
        check_favorite_use_case: Arc::new(CheckFavoriteUseCase::new(favorite_repo)),

        upload_photo_use_case: Arc::new(UploadPhotoUseCase::new(
            image_store.clone(),
            profile_repo.clone(),
        )),
        delete_photo_use_case: Arc::new(DeletePhotoUseCase::new(image_store, profile_repo)),
    };

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    let db_for_server = db.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_provider.clone()))
            .app_data(web::Data::new(db_for_server.clone()))
            .app_data(custom_json_config())
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_account_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::save_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::delete_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::search_profiles_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::suggest_matches_handler);
    // Ads; the fixed paths must register before the `{ad_id}` catch-all
    cfg.service(crate::ads::adapter::incoming::web::routes::my_ads_handler);
    cfg.service(crate::ads::adapter::incoming::web::routes::search_ads_handler);
    cfg.service(crate::ads::adapter::incoming::web::routes::create_ad_handler);
    cfg.service(crate::ads::adapter::incoming::web::routes::get_ad_handler);
    cfg.service(crate::ads::adapter::incoming::web::routes::update_ad_handler);
    cfg.service(crate::ads::adapter::incoming::web::routes::delete_ad_handler);
    // Messaging
    cfg.service(crate::messaging::adapter::incoming::web::routes::conversations_handler);
    cfg.service(crate::messaging::adapter::incoming::web::routes::thread_handler);
    cfg.service(crate::messaging::adapter::incoming::web::routes::send_message_handler);
    cfg.service(crate::messaging::adapter::incoming::web::routes::unread_count_handler);
    // Favorites
    cfg.service(crate::favorites::adapter::incoming::web::routes::my_favorites_handler);
    cfg.service(crate::favorites::adapter::incoming::web::routes::check_favorite_handler);
    cfg.service(crate::favorites::adapter::incoming::web::routes::add_favorite_handler);
    cfg.service(crate::favorites::adapter::incoming::web::routes::remove_favorite_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_photo_handler);
    cfg.service(crate::media::adapter::incoming::web::routes::delete_photo_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
