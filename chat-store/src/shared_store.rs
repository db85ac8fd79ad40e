//! Shared messaging store for multiple callers.
//!
//! Wraps the whole [`MessagingStore`] in one `Arc<Mutex<>>`; each operation holds the lock
//! until it completes.

use std::sync::Arc;

use chat_core::User;
use tokio::sync::Mutex;

use crate::config::StatsConfig;
use crate::error::Result;
use crate::messaging_store::{MessagingStore, UserStatistics};
use crate::models::{FrequentMessage, GroupStats};

#[derive(Debug, Clone, Default)]
pub struct SharedMessagingStore {
    inner: Arc<Mutex<MessagingStore>>,
}

impl SharedMessagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StatsConfig) -> Self {
        Self::from_store(MessagingStore::with_config(config))
    }

    pub fn from_store(store: MessagingStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn send_message(&self, group_name: &str, text: &str, sender: &User) -> Result<()> {
        let mut store = self.inner.lock().await;
        store.send_message(group_name, text, sender)
    }

    pub async fn find_most_active_user(&self, group_name: &str) -> Result<User> {
        let store = self.inner.lock().await;
        store.find_most_active_user(group_name)
    }

    pub async fn user_message_count(&self, user: &User, group_name: &str) -> usize {
        let store = self.inner.lock().await;
        store.user_statistics().user_message_count(user, group_name)
    }

    pub async fn average_messages_per_user(&self, group_name: &str) -> f64 {
        let store = self.inner.lock().await;
        store.average_messages_per_user(group_name)
    }

    pub async fn most_frequent_message(&self, group_name: &str) -> Result<FrequentMessage> {
        let store = self.inner.lock().await;
        store.most_frequent_message(group_name)
    }

    pub async fn group_stats(&self, group_name: &str) -> Result<GroupStats> {
        let store = self.inner.lock().await;
        store.group_stats(group_name)
    }

    /// Clones the current state out of the lock.
    pub async fn snapshot(&self) -> MessagingStore {
        self.inner.lock().await.clone()
    }
}
