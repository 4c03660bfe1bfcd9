//! Rule-book configuration.
//!
//! Rule books are declared in TOML and resolved into an [`arrkit_core::RuleBook`]
//! at the parse boundary. The raw deserialization structs stay private; a
//! successfully returned `RuleBook` is always non-empty and well-formed.
//!
//! ```toml
//! [[must_be]]
//! class = "uppercase"
//! error = "UPPERCASE_REQUIRED"
//!
//! [[must_be]]
//! class = { char = "." }
//! error = "DOT_REQUIRED"
//!
//! [[must_not_be]]
//! class = "whitespace"
//! error = "SPACES_NOT_ALLOWED"
//! ```

use serde::Deserialize;
use thiserror::Error;

use arrkit_core::{CharacterRule, RuleBook};
use arrkit_types::{CharClass, ErrorCode};

#[derive(Debug, Error)]
pub enum RuleConfigError {
    #[error("failed to parse rule book: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("rule book declares no rules")]
    Empty,
    #[error("{code} rule has an empty `any_of` set")]
    EmptyCharSet { code: ErrorCode },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRuleBook {
    #[serde(default)]
    must_be: Vec<RawRule>,
    #[serde(default)]
    must_not_be: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRule {
    class: CharClass,
    error: ErrorCode,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl RawRule {
    fn resolve(self, role: &'static str) -> Result<CharacterRule, RuleConfigError> {
        if matches!(&self.class, CharClass::AnyOf(set) if set.is_empty()) {
            return Err(RuleConfigError::EmptyCharSet { code: self.error });
        }
        if !self.enabled && role == "must_be" {
            tracing::warn!(code = %self.error, role, "rule is disabled and will never report");
        }
        Ok(CharacterRule::from_class(self.class, self.error).with_enabled(self.enabled))
    }
}

impl RawRuleBook {
    fn resolve(self) -> Result<RuleBook, RuleConfigError> {
        if self.must_be.is_empty() && self.must_not_be.is_empty() {
            return Err(RuleConfigError::Empty);
        }
        let must_be = self
            .must_be
            .into_iter()
            .map(|raw| raw.resolve("must_be"))
            .collect::<Result<Vec<_>, _>>()?;
        let must_not_be = self
            .must_not_be
            .into_iter()
            .map(|raw| raw.resolve("must_not_be"))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            must_be = must_be.len(),
            must_not_be = must_not_be.len(),
            "rule book resolved"
        );
        Ok(RuleBook::new(must_be, must_not_be))
    }
}

/// Parse and validate a TOML rule book.
pub fn parse_rule_book(source: &str) -> Result<RuleBook, RuleConfigError> {
    let raw: RawRuleBook = toml::from_str(source)?;
    raw.resolve()
}
