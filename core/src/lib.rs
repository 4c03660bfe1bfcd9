//! Array algorithms for arrkit.
//!
//! - **`ordering`**: the `Comparator` seam (closures, natural, by-key, reversed)
//! - **`ordered`**: bubble sort, signed-encoding binary search, sorted insertion
//! - **`arrays`**: non-destructive copy/insert/remove/filter primitives
//! - **`rules`**: must-be / must-not-be character rule validation

pub mod arrays;
pub mod ordered;
pub mod ordering;
pub mod rules;

pub use arrays::{append, filter, insert_at, linear_search, remove_at, remove_if};
pub use arrkit_types::{ArrayError, CharClass, ErrorCode, SearchOutcome};
pub use ordered::{
    binary_search, binary_search_by, binary_search_by_key, insert_sorted, insert_sorted_by,
    is_one_swap_needed, sort, sort_by,
};
pub use ordering::{ByKey, Comparator, Natural, Reversed, by_key, reversed};
pub use rules::{CharacterRule, RuleBook, RuleOutcome, ValidationReport, validate, validate_str};
