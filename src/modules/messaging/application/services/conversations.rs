//! Reduction of a flat, bidirectional message log into per-counterpart
//! conversation summaries.

use std::collections::{HashMap, HashSet};

use crate::ads::domain::Ad;
use crate::messaging::domain::{ConversationSummary, Message};

/// The slice of a listing a conversation summary needs.
#[derive(Debug, Clone, PartialEq)]
pub struct AdContext {
    pub title: String,
    pub name: String,
    pub first_photo_url: Option<String>,
}

impl From<&Ad> for AdContext {
    fn from(ad: &Ad) -> Self {
        Self {
            title: ad.title.clone(),
            name: ad.name.clone(),
            first_photo_url: ad.photos.first().map(|photo| photo.url.clone()),
        }
    }
}

/// Groups `user_id`'s messages by counterpart and summarizes each group.
///
/// The grouping is first-match-wins over a newest-first ordering, so the
/// first message seen per counterpart is that conversation's most recent
/// one and supplies the last-message fields plus the denormalized listing
/// context. The input does not need to be pre-sorted: the function orders
/// it internally, descending by `created_at`.
///
/// `unread_count` is computed over the entire message set for each
/// counterpart (messages they sent to `user_id` that are still unread),
/// not just the summary message. Pure function; no store access.
pub fn derive_conversations(
    user_id: &str,
    messages: &[Message],
    ads: &HashMap<String, AdContext>,
    emails: &HashMap<String, String>,
) -> Vec<ConversationSummary> {
    let mut ordered: Vec<&Message> = messages.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut unread_by_counterpart: HashMap<&str, u64> = HashMap::new();
    for message in messages {
        if message.receiver_id == user_id && !message.read {
            *unread_by_counterpart
                .entry(message.sender_id.as_str())
                .or_default() += 1;
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut summaries = Vec::new();

    for message in ordered {
        let counterpart = message.counterpart_of(user_id);
        if !seen.insert(counterpart) {
            continue;
        }

        let ad = ads.get(&message.ad_id);
        summaries.push(ConversationSummary {
            counterpart_id: counterpart.to_string(),
            counterpart_email: emails.get(counterpart).cloned(),
            ad_id: message.ad_id.clone(),
            ad_title: ad.map(|context| context.title.clone()),
            ad_name: ad.map(|context| context.name.clone()),
            ad_photo: ad.and_then(|context| context.first_photo_url.clone()),
            last_message: message.text.clone(),
            last_message_at: message.created_at,
            last_message_from_me: message.sender_id == user_id,
            unread_count: unread_by_counterpart
                .get(counterpart)
                .copied()
                .unwrap_or(0),
        });
    }

    summaries
}
