#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fmt::{self, Display, Formatter},
};

/// A Life-like cellular automaton rule.
///
/// Conceptually, a rule is an ordered pair of sets of neighbor counts: the
/// counts for which a dead cell is born, and the counts for which a live cell
/// survives. The rule is held as its canonical lower-case
/// [B/S notation](https://conwaylife.com/wiki/Rulestring), `b<born>/s<survive>`,
/// which is the form the automaton engine consumes.
///
/// A rule is immutable once constructed, and is the sole configuration input
/// to the engine for an entire run.
///
/// There are two ways to obtain a rule:
///
/// - [`Rule::random`] generates one. Generated rules are canonical by
///   construction: digits are unique, ascending, and restricted to `1`–`8`.
/// - [`Rule::normalize`] lower-cases a user-supplied rule string and uses it
///   verbatim. Digit `0` is reachable only this way.
///
/// # Examples
///
/// ```rust
/// # use ca_rulegen::Rule;
/// let life = Rule::normalize("B3/S23");
/// assert_eq!(life.as_str(), "b3/s23");
/// assert_eq!(life.directory_name(), "b3_s23");
/// assert_eq!(life.snapshot_file_name(7, "rle"), "b3_s23_7.rle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    /// The canonical lower-case rule string.
    notation: String,
}

impl Rule {
    /// Render two digit sets into canonical notation.
    ///
    /// A [`BTreeSet`] iterates in ascending order, so the digits of each half
    /// come out sorted and unique. Either set may be empty.
    pub(crate) fn from_digit_sets(born: &BTreeSet<u8>, survive: &BTreeSet<u8>) -> Self {
        let mut notation = String::with_capacity(born.len() + survive.len() + 3);
        notation.push('b');
        notation.extend(born.iter().map(|&digit| char::from(b'0' + digit)));
        notation.push_str("/s");
        notation.extend(survive.iter().map(|&digit| char::from(b'0' + digit)));
        Self { notation }
    }

    /// Normalize a user-supplied rule string, expected to follow
    /// `B[0-8]*/S[0-8]*` notation (case-insensitive).
    ///
    /// The string is lower-cased and otherwise used verbatim: digits are not
    /// re-sorted or deduplicated. Syntax validation is left to the automaton
    /// engine, which rejects malformed rule strings when it is configured.
    pub fn normalize(rule_str: &str) -> Self {
        Self {
            notation: rule_str.to_lowercase(),
        }
    }

    /// The canonical rule string.
    pub fn as_str(&self) -> &str {
        &self.notation
    }

    /// Name of the directory holding the snapshots of a run of this rule:
    /// the rule string with `/` replaced by `_`.
    pub fn directory_name(&self) -> String {
        self.notation.replace('/', "_")
    }

    /// File name of one generation's snapshot:
    /// `<directory-name>_<generation>.<extension>`.
    ///
    /// Generation indices start at 0 and increase by 1 until a stop
    /// condition fires.
    pub fn snapshot_file_name(&self, generation: u32, extension: &str) -> String {
        format!("{}_{}.{}", self.directory_name(), generation, extension)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lower_cases() {
        assert_eq!(Rule::normalize("B3/S23").as_str(), "b3/s23");
        assert_eq!(Rule::normalize("b36/s125").as_str(), "b36/s125");
        assert_eq!(Rule::normalize("B0/S8").as_str(), "b0/s8");
    }

    #[test]
    fn test_normalize_is_verbatim() {
        // User input is not re-sorted or deduplicated.
        assert_eq!(Rule::normalize("B62/S41").as_str(), "b62/s41");
        assert_eq!(Rule::normalize("B33/S22").as_str(), "b33/s22");
    }

    #[test]
    fn test_from_digit_sets() {
        let born = BTreeSet::from([3]);
        let survive = BTreeSet::from([2, 3]);
        assert_eq!(Rule::from_digit_sets(&born, &survive).as_str(), "b3/s23");

        let empty = BTreeSet::new();
        assert_eq!(Rule::from_digit_sets(&empty, &empty).as_str(), "b/s");
    }

    #[test]
    fn test_naming_scheme() {
        let rule = Rule::normalize("b3/s23");
        assert_eq!(rule.directory_name(), "b3_s23");
        assert_eq!(rule.snapshot_file_name(0, "rle"), "b3_s23_0.rle");
        assert_eq!(rule.snapshot_file_name(42, "rle"), "b3_s23_42.rle");

        let empty = Rule::normalize("b/s");
        assert_eq!(empty.snapshot_file_name(1, "rle"), "b_s_1.rle");
    }

    #[test]
    fn test_display() {
        let rule = Rule::normalize("B3/S23");
        assert_eq!(rule.to_string(), "b3/s23");
    }
}
