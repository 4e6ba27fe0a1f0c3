//! Per-component analysis notes

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Human-readable notes keyed by component id
///
/// Ids keep first-seen order and each id's messages keep append order.
/// Repeating an identical message for the same id is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notes {
    entries: IndexMap<String, Vec<String>>,
}

impl Notes {
    /// Create empty notes
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note for `id`
    pub fn push(&mut self, id: impl Into<String>, note: impl Into<String>) {
        let note = note.into();
        let entry = self.entries.entry(id.into()).or_default();
        if !entry.contains(&note) {
            entry.push(note);
        }
    }

    /// Append every note from `other`
    pub fn extend(&mut self, other: &Notes) {
        for (id, notes) in other.iter() {
            for note in notes {
                self.push(id, note.clone());
            }
        }
    }

    /// Notes recorded for `id`
    #[must_use]
    pub fn get(&self, id: &str) -> &[String] {
        match self.entries.get(id) {
            Some(notes) => notes,
            None => &[],
        }
    }

    /// Any note recorded for `id`
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterate `(id, notes)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(id, notes)| (id.as_str(), notes.as_slice()))
    }

    /// Number of ids with notes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No notes at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order_and_dedups() {
        let mut notes = Notes::new();
        notes.push("b", "one");
        notes.push("a", "two");
        notes.push("b", "three");
        notes.push("b", "one");

        let ids: Vec<_> = notes.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(notes.get("b"), ["one", "three"]);
        assert!(notes.get("missing").is_empty());
    }

    #[test]
    fn extend_merges() {
        let mut left = Notes::new();
        left.push("a", "x");
        let mut right = Notes::new();
        right.push("a", "x");
        right.push("c", "y");

        left.extend(&right);
        assert_eq!(left.len(), 2);
        assert_eq!(left.get("a"), ["x"]);
        assert_eq!(left.get("c"), ["y"]);
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut notes = Notes::new();
        notes.push("a", "x");
        assert_eq!(serde_json::to_string(&notes).unwrap(), r#"{"a":["x"]}"#);
    }
}
