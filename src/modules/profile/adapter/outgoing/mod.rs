pub mod documents;
pub mod profile_query_mongo;
pub mod profile_repository_mongo;
