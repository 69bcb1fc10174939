pub mod ad_query_mongo;
pub mod ad_repository_mongo;
pub mod documents;
