pub mod ad_query;
pub mod ad_repository;

pub use ad_query::{AdQuery, AdQueryError};
pub use ad_repository::{AdRepository, AdRepositoryError, CreateAdData, UpdateAdData};
