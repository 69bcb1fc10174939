mod conversations;
mod send_message;
mod thread;
mod unread_count;

pub use conversations::conversations_handler;
pub use send_message::send_message_handler;
pub use thread::thread_handler;
pub use unread_count::unread_count_handler;
