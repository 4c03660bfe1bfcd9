//! Declarative character predicates.

use serde::{Deserialize, Serialize};

/// A named class of characters a rule can test for.
///
/// Unit variants deserialize from a bare string (`"digit"`); the data
/// variants from an inline table (`{ char = "." }`, `{ any_of = "-_" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    Uppercase,
    Lowercase,
    /// ASCII `0`-`9` only. Other Unicode decimal digits such as `'٣'` do not match.
    Digit,
    Whitespace,
    Char(char),
    AnyOf(String),
}

impl CharClass {
    #[must_use]
    pub fn matches(&self, ch: char) -> bool {
        match self {
            CharClass::Uppercase => ch.is_uppercase(),
            CharClass::Lowercase => ch.is_lowercase(),
            CharClass::Digit => ch.is_ascii_digit(),
            CharClass::Whitespace => ch.is_whitespace(),
            CharClass::Char(expected) => ch == *expected,
            CharClass::AnyOf(set) => set.contains(ch),
        }
    }
}
