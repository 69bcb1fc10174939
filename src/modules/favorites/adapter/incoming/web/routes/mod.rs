mod add_favorite;
mod check_favorite;
mod my_favorites;
mod remove_favorite;

pub use add_favorite::add_favorite_handler;
pub use check_favorite::check_favorite_handler;
pub use my_favorites::my_favorites_handler;
pub use remove_favorite::remove_favorite_handler;
