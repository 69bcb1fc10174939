pub mod entities;

pub use entities::{AuthSession, AuthUserInfo, User};
