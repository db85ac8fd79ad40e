//! Matching and ordering policy for the statistics queries, loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// How a message is attributed to a user when counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Compare the recorded sender's `user_id`.
    #[default]
    Identity,
    /// Compare by display name: the active-user ranking matches the sender field of the
    /// `name:text` line (up to the first `:`) and per-user counts match the name anywhere in
    /// the line.
    Legacy,
}

/// How `most_frequent_message` orders its candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyOrder {
    /// Most occurrences, then shortest text, then earliest first occurrence.
    #[default]
    FrequencyFirst,
    /// Shortest `name:text` line regardless of occurrences, then earliest first occurrence.
    /// Length is counted in UTF-16 code units, so a character outside the Basic Multilingual
    /// Plane counts as two.
    LegacyShortest,
}

impl FromStr for MatchMode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" => Ok(Self::Identity),
            "legacy" => Ok(Self::Legacy),
            other => Err(StoreError::Config(format!(
                "unknown match mode '{}', expected 'identity' or 'legacy'",
                other
            ))),
        }
    }
}

impl FromStr for FrequencyOrder {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frequency" => Ok(Self::FrequencyFirst),
            "shortest" => Ok(Self::LegacyShortest),
            other => Err(StoreError::Config(format!(
                "unknown frequency order '{}', expected 'frequency' or 'shortest'",
                other
            ))),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("identity"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

impl fmt::Display for FrequencyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrequencyFirst => f.write_str("frequency"),
            Self::LegacyShortest => f.write_str("shortest"),
        }
    }
}

/// Statistics policy used by [`crate::MessagingStore`]. Defaults to identity matching with
/// frequency-first ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsConfig {
    pub match_mode: MatchMode,
    pub frequency_order: FrequencyOrder,
}

impl StatsConfig {
    /// Both legacy behaviors, reproducing the original output.
    pub fn legacy() -> Self {
        Self {
            match_mode: MatchMode::Legacy,
            frequency_order: FrequencyOrder::LegacyShortest,
        }
    }

    /// Loads the policy from `CHAT_STATS_MATCH_MODE` and `CHAT_STATS_FREQUENCY_ORDER`.
    /// Unset variables fall back to the defaults; unknown values are an error.
    pub fn load() -> Result<Self> {
        let match_mode = match env::var("CHAT_STATS_MATCH_MODE") {
            Ok(value) => value.parse()?,
            Err(_) => MatchMode::default(),
        };
        let frequency_order = match env::var("CHAT_STATS_FREQUENCY_ORDER") {
            Ok(value) => value.parse()?,
            Err(_) => FrequencyOrder::default(),
        };

        Ok(Self {
            match_mode,
            frequency_order,
        })
    }
}
