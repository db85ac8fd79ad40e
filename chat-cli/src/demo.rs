//! Sample data for the `demo` command and the report printed from it.

use anyhow::Result;
use chat_core::User;
use chat_store::MessagingStore;
use tracing::info;

/// Sample conversation: (group, text, user_id, user_name).
const SAMPLE_MESSAGES: &[(&str, &str, &str, &str)] = &[
    ("GroupA", "Hello from Alpha", "U001", "Alpha"),
    ("GroupA", "Hi from Bravo", "U002", "Bravo"),
    ("GroupA", "How's it going?", "U002", "Bravo"),
    ("GroupA", "Another message from Alpha", "U001", "Alpha"),
    ("GroupA", "How are you, Bravo?", "U002", "Bravo"),
    ("GroupB", "Greetings from Charlie", "U003", "Charlie"),
    ("GroupB", "Good morning from Alpha", "U001", "Alpha"),
];

/// Records the sample conversation into `store`.
pub fn seed_sample(store: &mut MessagingStore) -> Result<()> {
    for (group, text, user_id, user_name) in SAMPLE_MESSAGES {
        store.send_message(group, text, &User::new(*user_id, *user_name))?;
    }
    info!(count = SAMPLE_MESSAGES.len(), "Seeded sample messages");
    Ok(())
}

/// Report lines for the seeded sample groups.
pub fn demo_report(store: &MessagingStore) -> Vec<String> {
    let most_active = store
        .find_most_active_user("GroupA")
        .map(|user| user.user_name().to_string())
        .unwrap_or_else(|_| "None".to_string());
    let alpha_count = store.user_message_count(&User::new("U001", "Alpha"), "GroupA");
    let frequent = store
        .most_frequent_message("GroupB")
        .map(|message| message.to_string())
        .unwrap_or_else(|_| "None".to_string());
    let average = store.average_messages_per_user("GroupA");

    vec![
        format!("Most active user in GroupA: {}", most_active),
        format!("Messages sent by Alpha in GroupA: {}", alpha_count),
        format!("Most frequent message in GroupB: {}", frequent),
        format!("Average messages per user in GroupA: {:?}", average),
    ]
}
