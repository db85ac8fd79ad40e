//! Ranking helpers behind the "most active" and "most frequent" queries.
//!
//! Both take a group's state and the active policy and return the winner, or `None` when the
//! group holds nothing to rank.

use std::collections::HashMap;

use chat_core::User;

use crate::config::{FrequencyOrder, MatchMode};
use crate::models::{FrequentMessage, GroupState, MessageRecord};

/// Messages attributed to `user` under `mode` for the active-user ranking.
///
/// Legacy mode compares the sender field of the `name:text` line (up to the first separator)
/// with the user's name, so a user whose name contains the separator never matches.
pub(crate) fn sender_count(state: &GroupState, user: &User, mode: MatchMode) -> usize {
    state
        .messages()
        .iter()
        .filter(|record| match mode {
            MatchMode::Identity => record.is_from(user),
            MatchMode::Legacy => record.legacy_sender_field() == user.user_name(),
        })
        .count()
}

/// Messages attributed to `user` under `mode` for per-user counts.
///
/// Legacy mode counts every record whose `name:text` line contains the user's name, so a
/// message mentioning another user's name is counted for that user too.
pub(crate) fn user_count(state: &GroupState, user: &User, mode: MatchMode) -> usize {
    match mode {
        MatchMode::Identity => state.messages().iter().filter(|r| r.is_from(user)).count(),
        MatchMode::Legacy => state
            .messages()
            .iter()
            .filter(|r| r.legacy_line().contains(user.user_name()))
            .count(),
    }
}

/// Senders with their counts, sorted by descending count. The sort is stable over the
/// first-appearance order of the sender set, so ties go to the earliest sender.
pub(crate) fn rank_senders(state: &GroupState, mode: MatchMode) -> Vec<(User, usize)> {
    let mut ranked: Vec<(User, usize)> = state
        .senders()
        .iter()
        .map(|user| (user.clone(), sender_count(state, user, mode)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

pub(crate) fn most_active(state: &GroupState, mode: MatchMode) -> Option<User> {
    rank_senders(state, mode)
        .into_iter()
        .next()
        .map(|(user, _)| user)
}

/// A distinct message, where it first appeared, and its ordering length.
struct Candidate<'a> {
    first: &'a MessageRecord,
    first_index: usize,
    length: usize,
    occurrences: usize,
}

#[derive(PartialEq, Eq, Hash)]
enum CandidateKey<'a> {
    Sent { user_id: &'a str, text: &'a str },
    Line(String),
}

/// Groups identical messages. Frequency-first keys on (sender id, text) and measures the text in
/// chars; legacy ordering keys on the `name:text` line and measures it in UTF-16 code units.
/// Candidates come out in first-occurrence order.
fn candidates(state: &GroupState, order: FrequencyOrder) -> Vec<Candidate<'_>> {
    let mut out: Vec<Candidate<'_>> = Vec::new();
    let mut index_by_key: HashMap<CandidateKey<'_>, usize> = HashMap::new();

    for (index, record) in state.messages().iter().enumerate() {
        let (key, length) = match order {
            FrequencyOrder::FrequencyFirst => (
                CandidateKey::Sent {
                    user_id: record.sender.user_id(),
                    text: &record.text,
                },
                record.text.chars().count(),
            ),
            FrequencyOrder::LegacyShortest => {
                let line = record.legacy_line();
                let length = line.encode_utf16().count();
                (CandidateKey::Line(line), length)
            }
        };

        match index_by_key.get(&key).copied() {
            Some(pos) => out[pos].occurrences += 1,
            None => {
                index_by_key.insert(key, out.len());
                out.push(Candidate {
                    first: record,
                    first_index: index,
                    length,
                    occurrences: 1,
                });
            }
        }
    }
    out
}

pub(crate) fn most_frequent(state: &GroupState, order: FrequencyOrder) -> Option<FrequentMessage> {
    let mut ranked = candidates(state, order);
    match order {
        FrequencyOrder::FrequencyFirst => ranked.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then_with(|| a.length.cmp(&b.length))
                .then_with(|| a.first_index.cmp(&b.first_index))
        }),
        FrequencyOrder::LegacyShortest => ranked.sort_by(|a, b| {
            a.length
                .cmp(&b.length)
                .then_with(|| a.first_index.cmp(&b.first_index))
        }),
    }

    ranked.into_iter().next().map(|c| FrequentMessage {
        sender: c.first.sender.clone(),
        text: c.first.text.clone(),
        occurrences: c.occurrences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_of(messages: &[(&User, &str)]) -> GroupState {
        let mut state = GroupState::new();
        for (user, text) in messages {
            state.push(MessageRecord::new((*user).clone(), text.to_string()));
        }
        state
    }

    #[test]
    fn test_rank_senders_ties_go_to_earliest_sender() {
        let alpha = User::new("U001", "Alpha");
        let bravo = User::new("U002", "Bravo");
        let state = state_of(&[(&bravo, "a"), (&alpha, "b"), (&alpha, "c"), (&bravo, "d")]);

        let ranked = rank_senders(&state, MatchMode::Identity);

        assert_eq!(ranked[0], (bravo, 2));
        assert_eq!(ranked[1], (alpha, 2));
    }

    #[test]
    fn test_legacy_sender_count_merges_same_name() {
        let alpha = User::new("U001", "Alpha");
        let impostor = User::new("U009", "Alpha");
        let state = state_of(&[(&alpha, "one"), (&impostor, "two")]);

        assert_eq!(sender_count(&state, &alpha, MatchMode::Identity), 1);
        assert_eq!(sender_count(&state, &alpha, MatchMode::Legacy), 2);
    }

    #[test]
    fn test_most_frequent_prefers_occurrences_over_length() {
        let alpha = User::new("U001", "Alpha");
        let state = state_of(&[
            (&alpha, "ok"),
            (&alpha, "a longer line"),
            (&alpha, "a longer line"),
        ]);

        let frequency = most_frequent(&state, FrequencyOrder::FrequencyFirst).unwrap();
        assert_eq!(frequency.text, "a longer line");
        assert_eq!(frequency.occurrences, 2);

        let shortest = most_frequent(&state, FrequencyOrder::LegacyShortest).unwrap();
        assert_eq!(shortest.text, "ok");
        assert_eq!(shortest.occurrences, 1);
    }

    #[test]
    fn test_legacy_shortest_measures_utf16_units() {
        let alpha = User::new("U001", "A");
        // 5 chars but 8 UTF-16 units, against 7 of each.
        let state = state_of(&[(&alpha, "\u{1F600}\u{1F600}\u{1F600}"), (&alpha, "abcde")]);

        let shortest = most_frequent(&state, FrequencyOrder::LegacyShortest).unwrap();

        assert_eq!(shortest.text, "abcde");
    }

    #[test]
    fn test_legacy_sender_count_splits_at_first_separator() {
        let a = User::new("U001", "a");
        let a_b = User::new("U002", "a:b");
        let state = state_of(&[(&a_b, "x"), (&a_b, "y"), (&a, "z")]);

        assert_eq!(sender_count(&state, &a, MatchMode::Legacy), 3);
        assert_eq!(sender_count(&state, &a_b, MatchMode::Legacy), 0);
        assert_eq!(sender_count(&state, &a_b, MatchMode::Identity), 2);
        assert_eq!(most_active(&state, MatchMode::Legacy), Some(a));
    }

    #[test]
    fn test_most_frequent_same_text_from_different_senders_is_distinct() {
        let alpha = User::new("U001", "Alpha");
        let bravo = User::new("U002", "Bravo");
        let state = state_of(&[(&alpha, "hi"), (&bravo, "hi"), (&bravo, "hey")]);

        let top = most_frequent(&state, FrequencyOrder::FrequencyFirst).unwrap();

        assert_eq!(top.occurrences, 1);
        assert_eq!(top.sender, alpha);
        assert_eq!(top.text, "hi");
    }

    #[test]
    fn test_empty_state_ranks_nothing() {
        let state = GroupState::new();

        assert!(most_active(&state, MatchMode::Identity).is_none());
        assert!(most_frequent(&state, FrequencyOrder::FrequencyFirst).is_none());
    }
}
