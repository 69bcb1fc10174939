mod current_user;
mod delete_account;
mod login_user;
mod register_user;

pub use current_user::current_user_handler;
pub use delete_account::delete_account_handler;
pub use login_user::login_user_handler;
pub use register_user::register_user_handler;
