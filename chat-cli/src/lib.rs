//! # chat-cli
//!
//! CLI foundation for `chatstats`: argument parsing, config loading, the sample demo, and
//! replaying message files into a store.

pub mod cli;
pub mod demo;
pub mod input;

pub use cli::{load_config, Cli, Commands};
