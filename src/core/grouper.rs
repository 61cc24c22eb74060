//! Anagram grouping.
//!
//! Two strings land in the same group iff they have the same multiset of
//! characters (case-sensitive, compared per Unicode scalar value). Every input
//! string ends up in exactly one group, and members keep their input order.

use crate::domain::model::{AnagramGroup, CanonicalKey, GroupOrder};
use std::collections::HashMap;

/// Returns the canonical key of `word`: its characters sorted and rejoined.
pub fn canonical_key(word: &str) -> CanonicalKey {
    CanonicalKey::of(word)
}

/// True when `a` and `b` contain the same characters with the same counts.
pub fn are_anagrams(a: &str, b: &str) -> bool {
    canonical_key(a) == canonical_key(b)
}

/// Groups `words` into anagram sets.
///
/// Groups are returned in first-seen order. Callers must not rely on that
/// across other implementations; use [`AnagramGrouper::with_order`] when a
/// specific order matters.
///
/// ```
/// use anagram_grouper::group_anagrams;
///
/// let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
/// assert_eq!(groups[0], vec!["eat", "tea", "ate"]);
/// assert_eq!(groups.len(), 3);
/// ```
pub fn group_anagrams<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    AnagramGrouper::new()
        .group_keyed(words)
        .into_iter()
        .map(|group| group.members)
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnagramGrouper {
    order: GroupOrder,
}

impl AnagramGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: GroupOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> GroupOrder {
        self.order
    }

    pub fn group<S: AsRef<str>>(&self, words: &[S]) -> Vec<Vec<String>> {
        self.group_keyed(words)
            .into_iter()
            .map(|group| group.members)
            .collect()
    }

    pub fn group_keyed<S: AsRef<str>>(&self, words: &[S]) -> Vec<AnagramGroup> {
        // key -> index into `groups`, so groups stay in first-seen order
        let mut index: HashMap<CanonicalKey, usize> = HashMap::new();
        let mut groups: Vec<AnagramGroup> = Vec::new();

        for word in words {
            let word = word.as_ref();
            let key = canonical_key(word);

            match index.get(&key) {
                Some(&slot) => groups[slot].members.push(word.to_string()),
                None => {
                    tracing::trace!("New anagram group '{}' for '{}'", key, word);
                    index.insert(key.clone(), groups.len());
                    groups.push(AnagramGroup {
                        key,
                        members: vec![word.to_string()],
                    });
                }
            }
        }

        match self.order {
            GroupOrder::FirstSeen => {}
            GroupOrder::Key => groups.sort_by(|a, b| a.key.cmp(&b.key)),
            // stable sort keeps first-seen order for ties
            GroupOrder::Size => groups.sort_by(|a, b| b.len().cmp(&a.len())),
        }

        groups
    }
}
