//! Message record model.
//!
//! One entry in a group's append-only message sequence.

use chat_core::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Separator of the legacy `name:text` encoding.
pub const LEGACY_SEPARATOR: char = ':';

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: String,
    pub sender: User,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl MessageRecord {
    /// Creates a new record with a generated UUID and current timestamp.
    pub fn new(sender: User, text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            text,
            sent_at: Utc::now(),
        }
    }

    /// The record as the legacy single string: sender name, separator, text.
    pub fn legacy_line(&self) -> String {
        format!(
            "{}{}{}",
            self.sender.user_name(),
            LEGACY_SEPARATOR,
            self.text
        )
    }

    /// The sender field as read back from the legacy line: everything before the first
    /// separator. Differs from the sender name when the name itself contains the separator.
    pub fn legacy_sender_field(&self) -> &str {
        let name = self.sender.user_name();
        name.split_once(LEGACY_SEPARATOR)
            .map(|(head, _)| head)
            .unwrap_or(name)
    }

    /// Whether this record was sent by `user`, compared by `user_id`.
    pub fn is_from(&self, user: &User) -> bool {
        self.sender == *user
    }
}
