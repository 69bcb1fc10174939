pub mod conversations;

pub use conversations::{derive_conversations, AdContext};
