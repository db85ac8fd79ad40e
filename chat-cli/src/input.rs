//! Message files for the `report` command: a JSON array of
//! `{ "group", "user_id", "user_name", "text" }` objects replayed into a store.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chat_core::User;
use chat_store::{GroupStats, MessagingStore};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMessage {
    pub group: String,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
}

/// Reads and parses a message file.
pub fn load_messages(path: &Path) -> Result<Vec<InputMessage>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read message file {}", path.display()))?;
    let messages: Vec<InputMessage> = serde_json::from_str(&raw)
        .with_context(|| format!("Parse message file {}", path.display()))?;
    info!(path = %path.display(), count = messages.len(), "Loaded message file");
    Ok(messages)
}

/// Sends every message into `store` in file order. Stops at the first invalid entry.
pub fn replay(store: &mut MessagingStore, messages: &[InputMessage]) -> Result<usize> {
    for (index, message) in messages.iter().enumerate() {
        let user = User::try_new(message.user_id.as_str(), message.user_name.as_str())
            .with_context(|| format!("Message #{} has an invalid sender", index))?;
        store
            .send_message(&message.group, &message.text, &user)
            .with_context(|| format!("Record message #{}", index))?;
    }
    Ok(messages.len())
}

/// Statistics for `group`, or for every known group when `group` is `None`.
pub fn collect_stats(store: &MessagingStore, group: Option<&str>) -> Result<Vec<GroupStats>> {
    let groups = match group {
        Some(name) => vec![name.to_string()],
        None => store.group_names(),
    };
    groups
        .iter()
        .map(|name| {
            store
                .group_stats(name)
                .with_context(|| format!("Compute statistics for {}", name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const MESSAGES: &str = r#"[
        {"group": "GroupA", "user_id": "U001", "user_name": "Alpha", "text": "Hello"},
        {"group": "GroupA", "user_id": "U002", "user_name": "Bravo", "text": "Hi"},
        {"group": "GroupB", "user_id": "U002", "user_name": "Bravo", "text": "Hey"}
    ]"#;

    #[test]
    fn test_load_and_replay() {
        let file = write_file(MESSAGES);
        let messages = load_messages(file.path()).unwrap();
        let mut store = MessagingStore::new();

        let sent = replay(&mut store, &messages).unwrap();

        assert_eq!(sent, 3);
        assert_eq!(store.group_names(), vec!["GroupA", "GroupB"]);
        assert_eq!(collect_stats(&store, None).unwrap().len(), 2);
        let only_a = collect_stats(&store, Some("GroupA")).unwrap();
        assert_eq!(only_a[0].total_messages, 2);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let file = write_file("{ not json");

        let err = load_messages(file.path()).unwrap_err();

        assert!(err.to_string().contains("Parse message file"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_messages(Path::new("/nonexistent/messages.json")).is_err());
    }

    #[test]
    fn test_replay_stops_at_invalid_sender() {
        let messages = vec![
            InputMessage {
                group: "GroupA".to_string(),
                user_id: "U001".to_string(),
                user_name: "Alpha".to_string(),
                text: "ok".to_string(),
            },
            InputMessage {
                group: "GroupA".to_string(),
                user_id: "".to_string(),
                user_name: "Ghost".to_string(),
                text: "boo".to_string(),
            },
        ];
        let mut store = MessagingStore::new();

        let err = replay(&mut store, &messages).unwrap_err();

        assert!(err.to_string().contains("#1"));
        assert_eq!(store.group("GroupA").unwrap().message_count(), 1);
    }

    #[test]
    fn test_collect_stats_unknown_group() {
        let store = MessagingStore::new();

        assert!(collect_stats(&store, Some("Missing")).is_err());
    }
}
