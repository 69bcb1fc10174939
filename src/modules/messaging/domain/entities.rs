use chrono::{DateTime, Utc};
use serde::Serialize;

/// One entry in the append-only message log. A message always references
/// exactly one listing and is immutable once created, except for the
/// `read` flag flipped by a thread fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub ad_id: String,
    pub text: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// The other participant, seen from `user_id`'s side.
    pub fn counterpart_of(&self, user_id: &str) -> &str {
        if self.sender_id == user_id {
            &self.receiver_id
        } else {
            &self.sender_id
        }
    }
}

/// List-view summary of everything exchanged with one counterpart,
/// regardless of how many listings the two discussed. The listing context
/// is denormalized from whichever ad the most recent message references;
/// dangling references degrade to nulls instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSummary {
    pub counterpart_id: String,
    pub counterpart_email: Option<String>,
    pub ad_id: String,
    pub ad_title: Option<String>,
    pub ad_name: Option<String>,
    pub ad_photo: Option<String>,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
    pub last_message_from_me: bool,
    pub unread_count: u64,
}
