//! Derived statistics for a group.
//!
//! Returned by MessagingStore::most_frequent_message, message_counts and group_stats.

use std::fmt;

use chat_core::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message_record::LEGACY_SEPARATOR;

/// The winning message of a frequency ranking and how often it occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentMessage {
    pub sender: User,
    pub text: String,
    pub occurrences: usize,
}

impl fmt::Display for FrequentMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.sender.user_name(),
            LEGACY_SEPARATOR,
            self.text
        )
    }
}

/// Message count of one sender in a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMessageCount {
    pub user: User,
    pub count: usize,
}

/// Summary of one group, computed on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupStats {
    pub group: String,
    pub total_messages: usize,
    pub unique_senders: usize,
    pub average_messages_per_user: f64,
    pub most_active_user: User,
    pub most_frequent_message: FrequentMessage,
    pub per_user: Vec<UserMessageCount>,
    pub first_message: Option<DateTime<Utc>>,
    pub last_message: Option<DateTime<Utc>>,
}
