//! Per-group state: the append-only message sequence and the ordered sender set.

use std::collections::HashSet;

use chat_core::User;

use super::MessageRecord;

/// Distinct senders of a group in order of first appearance. Uniqueness is by `user_id`.
#[derive(Debug, Clone, Default)]
pub struct SenderSet {
    order: Vec<User>,
    ids: HashSet<String>,
}

impl SenderSet {
    /// Adds `user` if its id is new. Returns true when the user was added.
    pub fn insert(&mut self, user: &User) -> bool {
        if !self.ids.insert(user.user_id().to_string()) {
            return false;
        }
        self.order.push(user.clone());
        true
    }

    pub fn contains(&self, user: &User) -> bool {
        self.ids.contains(user.user_id())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Senders, earliest first.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.order.iter()
    }
}

/// Messages and senders of one group. Both are only ever extended together through
/// [`GroupState::push`], so every recorded sender has at least one message.
#[derive(Debug, Clone, Default)]
pub struct GroupState {
    messages: Vec<MessageRecord>,
    senders: SenderSet,
}

impl GroupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` and registers its sender.
    pub fn push(&mut self, record: MessageRecord) {
        self.senders.insert(&record.sender);
        self.messages.push(record);
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> &[MessageRecord] {
        &self.messages
    }

    pub fn senders(&self) -> &SenderSet {
        &self.senders
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn sender_count(&self) -> usize {
        self.senders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_set_keeps_first_appearance_order() {
        let mut set = SenderSet::default();

        assert!(set.insert(&User::new("U002", "Bravo")));
        assert!(set.insert(&User::new("U001", "Alpha")));
        assert!(!set.insert(&User::new("U002", "Bravo renamed")));

        let names: Vec<&str> = set.iter().map(|u| u.user_name()).collect();
        assert_eq!(names, vec!["Bravo", "Alpha"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&User::new("U001", "")));
    }

    #[test]
    fn test_push_grows_messages_and_senders_together() {
        let alpha = User::new("U001", "Alpha");
        let bravo = User::new("U002", "Bravo");
        let mut state = GroupState::new();

        state.push(MessageRecord::new(alpha.clone(), "Hello".to_string()));
        state.push(MessageRecord::new(bravo, "Hi".to_string()));
        state.push(MessageRecord::new(alpha, "Hello".to_string()));

        assert_eq!(state.message_count(), 3);
        assert_eq!(state.sender_count(), 2);
        assert_eq!(state.messages()[2].text, "Hello");
    }
}
