//! Ordered collection engine: sort, search and sorted insertion.
//!
//! All three are parameterised by a [`Comparator`]. Searching or inserting
//! with a comparator other than the one the slice was sorted by gives
//! meaningless results; nothing here checks for it.
//!
//! Search results use the signed encoding described on [`SearchOutcome`]:
//! a non-negative index on a hit, `-(insertion_point) - 1` on a miss.

use std::cmp::Ordering;

use arrkit_types::SearchOutcome;

use crate::arrays::splice_in;
use crate::ordering::{Comparator, Natural, by_key};

/// Sort `items` in place by repeated adjacent-swap passes.
///
/// Each pass bubbles the largest remaining element to the end of the active
/// window, which then shrinks by one. A pass with no swaps ends the sort.
/// Only strictly out-of-order neighbours are swapped, so equal elements keep
/// their relative order.
pub fn sort_by<T, C>(items: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    let mut last = items.len();
    let mut passes = 0usize;

    while last > 1 {
        last -= 1;
        passes += 1;
        if !push_max_to(items, last, comparator) {
            break;
        }
    }

    tracing::trace!(len = items.len(), passes, "sort finished");
}

/// [`sort_by`] with the element type's own ordering.
pub fn sort<T: Ord>(items: &mut [T]) {
    sort_by(items, &Natural);
}

/// One pass over `items[..=last]`. Returns whether anything was swapped.
fn push_max_to<T, C>(items: &mut [T], last: usize, comparator: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    let mut swapped = false;
    for i in 0..last {
        if comparator.compare(&items[i], &items[i + 1]) == Ordering::Greater {
            items.swap(i, i + 1);
            swapped = true;
        }
    }
    swapped
}

/// Binary search for `target` in a slice sorted by `comparator`.
///
/// Returns the index of *a* matching element on a hit; under duplicates which
/// one is unspecified. On a miss returns `-(insertion_point) - 1`, so an empty
/// slice yields `-1`.
#[must_use]
pub fn binary_search_by<T, C>(items: &[T], target: &T, comparator: &C) -> isize
where
    C: Comparator<T> + ?Sized,
{
    // `high` is exclusive; the midpoint matches an inclusive [low, high - 1] search.
    let mut low = 0usize;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - 1 - low) / 2;
        match comparator.compare(&items[mid], target) {
            Ordering::Equal => return mid as isize,
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    SearchOutcome::Vacant(low).encode()
}

/// [`binary_search_by`] with the element type's own ordering.
#[must_use]
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> isize {
    binary_search_by(items, target, &Natural)
}

/// [`binary_search_by`] comparing only the keys extracted by `key`.
#[must_use]
pub fn binary_search_by_key<T, K, F>(items: &[T], target: &T, key: F) -> isize
where
    K: Ord,
    F: Fn(&T) -> K,
{
    binary_search_by(items, target, &by_key(key))
}

/// Copy of a sorted slice with `value` inserted where the search places it.
///
/// A value equal to an existing element lands at the matched index, ahead of
/// that element.
#[must_use]
pub fn insert_sorted_by<T, C>(items: &[T], value: T, comparator: &C) -> Vec<T>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let outcome = SearchOutcome::decode(binary_search_by(items, &value, comparator));
    splice_in(items, outcome.position(), value)
}

/// [`insert_sorted_by`] with the element type's own ordering.
#[must_use]
pub fn insert_sorted<T: Ord + Clone>(items: &[T], value: T) -> Vec<T> {
    insert_sorted_by(items, value, &Natural)
}

/// Whether exchanging exactly one pair of elements would sort `items`.
///
/// An already sorted slice needs no swap and returns `false`.
#[must_use]
pub fn is_one_swap_needed<T: Ord + Clone>(items: &[T]) -> bool {
    let mut sorted = items.to_vec();
    sort(&mut sorted);

    let mut misplaced = items
        .iter()
        .zip(&sorted)
        .enumerate()
        .filter(|(_, (actual, expected))| actual != expected)
        .map(|(index, _)| index);

    match (misplaced.next(), misplaced.next(), misplaced.next()) {
        (Some(i), Some(j), None) => items[i] == sorted[j] && items[j] == sorted[i],
        _ => false,
    }
}
