//! Messaging store: records group messages and answers statistics queries.
//!
//! Groups are created lazily by [`MessagingStore::send_message`] and never removed. Every query
//! is computed from the recorded messages on each call; nothing is cached.

use std::collections::HashMap;

use chat_core::User;
use tracing::{debug, info};

use crate::config::StatsConfig;
use crate::error::{Result, StoreError};
use crate::models::{FrequentMessage, GroupState, GroupStats, MessageRecord, UserMessageCount};
use crate::ranking;

/// Per-user message counting, usable independently of a call site.
pub trait UserStatistics {
    /// Messages `user` has in `group_name`; 0 for an unknown group.
    fn user_message_count(&self, user: &User, group_name: &str) -> usize;
}

/// In-memory store of group messages.
#[derive(Debug, Clone, Default)]
pub struct MessagingStore {
    groups: HashMap<String, GroupState>,
    config: StatsConfig,
}

impl MessagingStore {
    /// Creates an empty store with the default policy (identity matching, frequency-first).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StatsConfig) -> Self {
        Self {
            groups: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> StatsConfig {
        self.config
    }

    /// Records `text` from `sender` in `group_name`, creating the group on first use.
    ///
    /// Fails with [`StoreError::InvalidArgument`] for a blank group name or a sender with an
    /// empty id; nothing is recorded then.
    pub fn send_message(&mut self, group_name: &str, text: &str, sender: &User) -> Result<()> {
        if group_name.trim().is_empty() {
            return Err(StoreError::InvalidArgument(
                "group name must not be empty".to_string(),
            ));
        }
        if sender.user_id().trim().is_empty() {
            return Err(StoreError::InvalidArgument(format!(
                "sender '{}' has an empty user_id",
                sender.user_name()
            )));
        }

        let state = self.groups.entry(group_name.to_string()).or_insert_with(|| {
            info!(group = %group_name, "Creating group");
            GroupState::new()
        });
        state.push(MessageRecord::new(sender.clone(), text.to_string()));

        debug!(
            group = %group_name,
            user_id = %sender.user_id(),
            message_count = state.message_count(),
            sender_count = state.sender_count(),
            "Recorded message"
        );
        Ok(())
    }

    /// The sender with the most messages in the group; ties go to the earliest sender.
    pub fn find_most_active_user(&self, group_name: &str) -> Result<User> {
        let state = self.group_or_not_found(group_name)?;
        let user = ranking::most_active(state, self.config.match_mode)
            .ok_or_else(|| StoreError::GroupNotFound(group_name.to_string()))?;
        info!(
            group = %group_name,
            user_id = %user.user_id(),
            match_mode = %self.config.match_mode,
            "Most active user"
        );
        Ok(user)
    }

    /// A query handle for per-user counts.
    pub fn user_statistics(&self) -> StoreStatistics<'_> {
        StoreStatistics { store: self }
    }

    pub fn user_message_count(&self, user: &User, group_name: &str) -> usize {
        self.user_statistics().user_message_count(user, group_name)
    }

    /// Total messages divided by distinct senders; 0.0 for an unknown group.
    pub fn average_messages_per_user(&self, group_name: &str) -> f64 {
        let Some(state) = self.groups.get(group_name) else {
            debug!(group = %group_name, "Average requested for unknown group");
            return 0.0;
        };
        state.message_count() as f64 / state.sender_count() as f64
    }

    /// The most frequent message of the group under the configured ordering.
    pub fn most_frequent_message(&self, group_name: &str) -> Result<FrequentMessage> {
        let state = self.group_or_not_found(group_name)?;
        let message = ranking::most_frequent(state, self.config.frequency_order)
            .ok_or_else(|| StoreError::GroupNotFound(group_name.to_string()))?;
        info!(
            group = %group_name,
            occurrences = message.occurrences,
            frequency_order = %self.config.frequency_order,
            "Most frequent message"
        );
        Ok(message)
    }

    /// Known group names, sorted.
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains_group(&self, group_name: &str) -> bool {
        self.groups.contains_key(group_name)
    }

    pub fn group(&self, group_name: &str) -> Option<&GroupState> {
        self.groups.get(group_name)
    }

    /// Count for every sender of the group, in first-appearance order. Empty for an unknown group.
    pub fn message_counts(&self, group_name: &str) -> Vec<UserMessageCount> {
        let Some(state) = self.groups.get(group_name) else {
            return Vec::new();
        };
        state
            .senders()
            .iter()
            .map(|user| UserMessageCount {
                user: user.clone(),
                count: ranking::user_count(state, user, self.config.match_mode),
            })
            .collect()
    }

    /// Up to `limit` messages of the group, newest first.
    pub fn recent_messages(&self, group_name: &str, limit: usize) -> Vec<MessageRecord> {
        let messages: Vec<MessageRecord> = self
            .groups
            .get(group_name)
            .map(|state| state.messages().iter().rev().take(limit).cloned().collect())
            .unwrap_or_default();
        debug!(group = %group_name, count = messages.len(), "Retrieved recent messages");
        messages
    }

    /// Full summary of one group.
    pub fn group_stats(&self, group_name: &str) -> Result<GroupStats> {
        let state = self.group_or_not_found(group_name)?;
        let messages = state.messages();

        Ok(GroupStats {
            group: group_name.to_string(),
            total_messages: state.message_count(),
            unique_senders: state.sender_count(),
            average_messages_per_user: self.average_messages_per_user(group_name),
            most_active_user: self.find_most_active_user(group_name)?,
            most_frequent_message: self.most_frequent_message(group_name)?,
            per_user: self.message_counts(group_name),
            first_message: messages.first().map(|r| r.sent_at),
            last_message: messages.last().map(|r| r.sent_at),
        })
    }

    fn group_or_not_found(&self, group_name: &str) -> Result<&GroupState> {
        self.groups
            .get(group_name)
            .ok_or_else(|| StoreError::GroupNotFound(group_name.to_string()))
    }
}

/// Borrowed [`UserStatistics`] view over a [`MessagingStore`].
#[derive(Debug, Clone, Copy)]
pub struct StoreStatistics<'a> {
    store: &'a MessagingStore,
}

impl UserStatistics for StoreStatistics<'_> {
    fn user_message_count(&self, user: &User, group_name: &str) -> usize {
        self.store
            .groups
            .get(group_name)
            .map(|state| ranking::user_count(state, user, self.store.config.match_mode))
            .unwrap_or(0)
    }
}
