#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The persisted textual encoding of one generation's grid state.
///
/// A snapshot is opaque: it is never parsed, only diffed line by line
/// against the snapshot of the neighboring generation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// The text an engine wrote to disk.
    text: String,
}

impl Snapshot {
    /// Create a snapshot from the text an engine wrote to disk.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw text of the snapshot.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of distinct lines present in `self` but absent from `other`.
    ///
    /// The difference is taken in one direction only, and duplicate lines
    /// count once.
    pub fn lines_not_in(&self, other: &Self) -> usize {
        let other_lines: HashSet<&str> = other.text.lines().collect();

        self.text
            .lines()
            .collect::<HashSet<&str>>()
            .difference(&other_lines)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_is_one_directional() {
        let prev = Snapshot::new("A\nB\nC");
        let curr = Snapshot::new("A\nB\nC\nX");

        assert_eq!(curr.lines_not_in(&prev), 1);
        assert_eq!(prev.lines_not_in(&curr), 0);
    }

    #[test]
    fn test_identical_snapshots_have_no_difference() {
        let snapshot = Snapshot::new("A\nB\nC");
        assert_eq!(snapshot.lines_not_in(&snapshot.clone()), 0);
    }

    #[test]
    fn test_duplicate_lines_count_once() {
        let prev = Snapshot::new("A");
        let curr = Snapshot::new("A\nX\nX\nX");

        assert_eq!(curr.lines_not_in(&prev), 1);
    }

    #[test]
    fn test_disjoint_snapshots() {
        let prev = Snapshot::new("A\nB");
        let curr = Snapshot::new("A\nC\nD");

        assert_eq!(curr.lines_not_in(&prev), 2);
    }
}
