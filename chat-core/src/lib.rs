//! # chat-core
//!
//! Shared types for group chat statistics: the [`User`] identity, core errors,
//! and tracing initialization. Used by chat-store and chat-cli.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{CoreError, Result};
pub use logger::init_tracing;
pub use types::User;
