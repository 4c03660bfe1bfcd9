//! Character rule validation.
//!
//! A rule pairs a character predicate with an [`ErrorCode`]. Validation runs
//! two rule lists over a character sequence:
//!
//! - **must-not-be**: any matching character is a violation
//! - **must-be**: at least one character has to match
//!
//! Rules are immutable and shareable; the per-rule satisfaction of a run is
//! returned in the [`ValidationReport`] rather than stored on the rule.

use std::collections::HashSet;
use std::fmt;

use arrkit_types::{CharClass, ErrorCode};

type Predicate = Box<dyn Fn(char) -> bool + Send + Sync>;

/// A predicate over single characters plus the code reported when it fails.
pub struct CharacterRule {
    predicate: Predicate,
    code: ErrorCode,
    enabled: bool,
}

impl fmt::Debug for CharacterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterRule")
            .field("code", &self.code)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive() // Omit predicate
    }
}

impl CharacterRule {
    #[must_use]
    pub fn new<P>(predicate: P, code: ErrorCode) -> Self
    where
        P: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            code,
            enabled: true,
        }
    }

    #[must_use]
    pub fn from_class(class: CharClass, code: ErrorCode) -> Self {
        Self::new(move |ch| class.matches(ch), code)
    }

    /// A disabled must-be rule is skipped and never reported. Must-not-be
    /// rules ignore the flag: a forbidden character always reports.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn matches(&self, ch: char) -> bool {
        (self.predicate)(ch)
    }

    fn matches_any(&self, chars: &[char]) -> bool {
        chars.iter().any(|&ch| self.matches(ch))
    }
}

/// Satisfaction of one rule in one validation run.
///
/// For a must-be rule `satisfied` means a matching character was present; for
/// a must-not-be rule it means the forbidden character was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub code: ErrorCode,
    pub enabled: bool,
    pub satisfied: bool,
}

/// Result of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ErrorCode>,
    must_be: Vec<RuleOutcome>,
    must_not_be: Vec<RuleOutcome>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Reported codes, deduplicated, in report order.
    #[must_use]
    pub fn errors(&self) -> &[ErrorCode] {
        &self.errors
    }

    /// One outcome per must-be rule, in rule-list order.
    #[must_use]
    pub fn must_be(&self) -> &[RuleOutcome] {
        &self.must_be
    }

    /// One outcome per must-not-be rule, in rule-list order.
    #[must_use]
    pub fn must_not_be(&self) -> &[RuleOutcome] {
        &self.must_not_be
    }

    /// Error messages joined with `", "`. Empty when the input is valid.
    #[must_use]
    pub fn message(&self) -> String {
        self.errors
            .iter()
            .map(|code| code.message())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Check `chars` against both rule lists.
///
/// Report order: triggered must-not-be rules in list order, then unmet
/// must-be rules in list order. A code is reported at most once even when
/// several rules share it. Empty input fails every enabled must-be rule and
/// passes every must-not-be rule. The enabled flag only gates must-be rules.
#[must_use]
pub fn validate(
    chars: &[char],
    must_be: &[CharacterRule],
    must_not_be: &[CharacterRule],
) -> ValidationReport {
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    let must_not_be: Vec<RuleOutcome> = must_not_be
        .iter()
        .map(|rule| {
            let satisfied = rule.matches_any(chars);
            if satisfied && reported.insert(rule.code) {
                tracing::debug!(code = %rule.code, "forbidden character present");
                errors.push(rule.code);
            }
            outcome(rule, satisfied)
        })
        .collect();

    let must_be: Vec<RuleOutcome> = must_be
        .iter()
        .map(|rule| outcome(rule, rule.enabled && rule.matches_any(chars)))
        .collect();

    for unmet in must_be.iter().filter(|o| o.enabled && !o.satisfied) {
        if reported.insert(unmet.code) {
            tracing::debug!(code = %unmet.code, "required character missing");
            errors.push(unmet.code);
        }
    }

    ValidationReport {
        errors,
        must_be,
        must_not_be,
    }
}

/// [`validate`] over the characters of a string.
#[must_use]
pub fn validate_str(
    input: &str,
    must_be: &[CharacterRule],
    must_not_be: &[CharacterRule],
) -> ValidationReport {
    let chars: Vec<char> = input.chars().collect();
    validate(&chars, must_be, must_not_be)
}

fn outcome(rule: &CharacterRule, satisfied: bool) -> RuleOutcome {
    RuleOutcome {
        code: rule.code,
        enabled: rule.enabled,
        satisfied,
    }
}

/// A must-be list and a must-not-be list validated together.
#[derive(Debug, Default)]
pub struct RuleBook {
    must_be: Vec<CharacterRule>,
    must_not_be: Vec<CharacterRule>,
}

impl RuleBook {
    #[must_use]
    pub fn new(must_be: Vec<CharacterRule>, must_not_be: Vec<CharacterRule>) -> Self {
        Self {
            must_be,
            must_not_be,
        }
    }

    /// Uppercase, lowercase, digit and dot required; whitespace forbidden.
    #[must_use]
    pub fn password_policy() -> Self {
        Self::new(
            vec![
                CharacterRule::from_class(CharClass::Uppercase, ErrorCode::UppercaseRequired),
                CharacterRule::from_class(CharClass::Lowercase, ErrorCode::LowercaseRequired),
                CharacterRule::from_class(CharClass::Digit, ErrorCode::DigitRequired),
                CharacterRule::from_class(CharClass::Char('.'), ErrorCode::DotRequired),
            ],
            vec![CharacterRule::from_class(
                CharClass::Whitespace,
                ErrorCode::SpacesNotAllowed,
            )],
        )
    }

    #[must_use]
    pub fn must_be(&self) -> &[CharacterRule] {
        &self.must_be
    }

    #[must_use]
    pub fn must_not_be(&self) -> &[CharacterRule] {
        &self.must_not_be
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.must_be.is_empty() && self.must_not_be.is_empty()
    }

    #[must_use]
    pub fn validate(&self, chars: &[char]) -> ValidationReport {
        validate(chars, &self.must_be, &self.must_not_be)
    }

    #[must_use]
    pub fn validate_str(&self, input: &str) -> ValidationReport {
        validate_str(input, &self.must_be, &self.must_not_be)
    }
}
