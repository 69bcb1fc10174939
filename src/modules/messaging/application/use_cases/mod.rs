pub mod fetch_thread;
pub mod list_conversations;
pub mod send_message;
pub mod unread_count;
