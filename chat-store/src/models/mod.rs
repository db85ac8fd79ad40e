//! Data models: message records, per-group state, and derived statistics.

mod group_state;
mod group_stats;
mod message_record;

pub use group_state::{GroupState, SenderSet};
pub use group_stats::{FrequentMessage, GroupStats, UserMessageCount};
pub use message_record::MessageRecord;
