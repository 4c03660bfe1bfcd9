//! Core domain types for arrkit.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! The algorithms live in `arrkit-core`; everything here is data plus lookups.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod class;
mod search;

pub use class::CharClass;
pub use search::SearchOutcome;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Array Errors
// ============================================================================

/// Failure of an index-based insertion or removal primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Index outside `[0, len]` for insertion or `[0, len)` for removal.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Removal from an empty sequence would produce a negative length.
    #[error("cannot remove from an empty sequence")]
    NegativeSize,
}

// ============================================================================
// Validation Error Codes
// ============================================================================

/// Identifier of a rule violation, paired with a fixed human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    UppercaseRequired,
    LowercaseRequired,
    DigitRequired,
    DotRequired,
    SpacesNotAllowed,
}

impl ErrorCode {
    /// Stable identifier, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UppercaseRequired => "UPPERCASE_REQUIRED",
            ErrorCode::LowercaseRequired => "LOWERCASE_REQUIRED",
            ErrorCode::DigitRequired => "DIGIT_REQUIRED",
            ErrorCode::DotRequired => "DOT_REQUIRED",
            ErrorCode::SpacesNotAllowed => "SPACES_NOT_ALLOWED",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::UppercaseRequired => "At least one uppercase letter required",
            ErrorCode::LowercaseRequired => "At least one lowercase letter required",
            ErrorCode::DigitRequired => "At least one digit required",
            ErrorCode::DotRequired => "At least one dot required",
            ErrorCode::SpacesNotAllowed => "Spaces are not allowed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
