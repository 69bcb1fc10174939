pub mod bcrypt_hasher;
pub mod documents;
pub mod jwt;
pub mod user_query_mongo;
pub mod user_repository_mongo;
