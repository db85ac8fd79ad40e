//! Core types: the user identity shared by the store and the CLI.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// User identity. `user_id` is the stable key; `user_name` is a display label and may repeat.
///
/// Equality and hashing use `user_id` only, so two values with the same id and different
/// names are the same user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    user_id: String,
    user_name: String,
}

impl User {
    /// Creates a user without validation.
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
        }
    }

    /// Creates a user, rejecting an empty or whitespace-only id.
    pub fn try_new(user_id: impl Into<String>, user_name: impl Into<String>) -> Result<Self> {
        let user = Self::new(user_id, user_name);
        if user.user_id.trim().is_empty() {
            return Err(CoreError::InvalidUser(format!(
                "empty user_id for user_name '{}'",
                user.user_name
            )));
        }
        Ok(user)
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_id.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.user_name, self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_uses_id_only() {
        let a = User::new("U001", "Alpha");
        let renamed = User::new("U001", "Alpha Prime");
        let other = User::new("U002", "Alpha");

        assert_eq!(a, renamed);
        assert_ne!(a, other);
    }

    #[test]
    fn test_hash_set_dedupes_by_id() {
        let mut set = HashSet::new();
        set.insert(User::new("U001", "Alpha"));
        set.insert(User::new("U001", "Renamed"));
        set.insert(User::new("U002", "Bravo"));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_try_new_rejects_empty_id() {
        assert!(User::try_new("", "Alpha").is_err());
        assert!(User::try_new("   ", "Alpha").is_err());
        assert_eq!(User::try_new("U001", "").unwrap().user_id(), "U001");
    }

    #[test]
    fn test_display() {
        assert_eq!(User::new("U003", "Charlie").to_string(), "Charlie (U003)");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(User::new("U001", "Alpha")).unwrap();
        assert_eq!(json["user_id"], "U001");
        assert_eq!(json["user_name"], "Alpha");

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back.user_name(), "Alpha");
    }
}
