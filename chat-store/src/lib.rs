//! Chat store crate: in-memory group messages and the statistics derived from them.
//!
//! ## Modules
//!
//! - [`error`] – Store error types
//! - [`config`] – StatsConfig, MatchMode, FrequencyOrder
//! - [`models`] – MessageRecord, GroupState, GroupStats, FrequentMessage
//! - [`messaging_store`] – MessagingStore and the UserStatistics query trait
//! - [`shared_store`] – SharedMessagingStore for multiple callers

mod config;
mod error;
mod messaging_store;
mod models;
mod ranking;
mod shared_store;


pub use config::{FrequencyOrder, MatchMode, StatsConfig};
pub use error::{Result, StoreError};
pub use messaging_store::{MessagingStore, StoreStatistics, UserStatistics};
pub use models::{
    FrequentMessage, GroupState, GroupStats, MessageRecord, SenderSet, UserMessageCount,
};
pub use shared_store::SharedMessagingStore;
