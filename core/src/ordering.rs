//! Caller-supplied orderings.
//!
//! Every engine function in [`crate::ordered`] takes a `Comparator` rather than
//! assuming `Ord`. Plain closures work directly; `Natural`, `ByKey` and
//! `Reversed` cover the common cases without writing one.

use std::cmp::Ordering;

/// A total pre-order over `T`.
///
/// Two elements comparing `Equal` need not be identical: a by-length ordering
/// on strings treats `"lmn"` and `"LMN"` as equal.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The element type's own `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements by an extracted key.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(F);

/// Build a [`ByKey`] comparator from a key extractor.
#[must_use]
pub fn by_key<F>(key: F) -> ByKey<F> {
    ByKey(key)
}

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Inverts the wrapped comparator.
#[derive(Debug, Clone, Copy)]
pub struct Reversed<C>(C);

/// The same ordering, descending.
#[must_use]
pub fn reversed<C>(comparator: C) -> Reversed<C> {
    Reversed(comparator)
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}
