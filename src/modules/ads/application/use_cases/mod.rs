pub mod create_ad;
pub mod delete_ad;
pub mod fetch_ad;
pub mod list_my_ads;
pub mod search_ads;
pub mod update_ad;
