pub mod documents;
pub mod message_query_mongo;
pub mod message_repository_mongo;
