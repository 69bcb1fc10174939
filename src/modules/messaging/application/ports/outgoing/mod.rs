pub mod message_query;
pub mod message_repository;

pub use message_query::MessageQuery;
pub use message_repository::{MessageRepository, MessageRepositoryError, NewMessage};
