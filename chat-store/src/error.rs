//! Store error types.
//!
//! Returned by [`crate::MessagingStore`] operations and [`crate::StatsConfig::load`].

use thiserror::Error;

/// Errors that can occur when recording or querying group messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Group not found: {0}")]
    GroupNotFound(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
