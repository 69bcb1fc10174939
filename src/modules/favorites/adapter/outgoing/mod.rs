pub mod documents;
pub mod favorite_repository_mongo;
