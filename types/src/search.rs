//! Typed view of the signed binary-search result.
//!
//! Search functions return an `isize`: a non-negative value is the index of a
//! matching element, a negative value `r` encodes the insertion point as
//! `-(r + 1)`. `SearchOutcome` converts between the two without loss.

/// Decoded binary-search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Index of a matching element. Which one, under duplicates, is unspecified.
    Found(usize),
    /// Index at which the target would be inserted to keep the order.
    Vacant(usize),
}

impl SearchOutcome {
    #[must_use]
    pub fn decode(encoded: isize) -> Self {
        if encoded >= 0 {
            SearchOutcome::Found(encoded as usize)
        } else {
            SearchOutcome::Vacant((-(encoded + 1)) as usize)
        }
    }

    #[must_use]
    pub fn encode(self) -> isize {
        match self {
            SearchOutcome::Found(index) => index as isize,
            SearchOutcome::Vacant(point) => -(point as isize) - 1,
        }
    }

    /// Position to insert at: the match index or the insertion point.
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            SearchOutcome::Found(index) | SearchOutcome::Vacant(index) => index,
        }
    }
}
