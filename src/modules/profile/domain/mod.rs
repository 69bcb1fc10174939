pub mod entities;

pub use entities::{Photo, Profile};
