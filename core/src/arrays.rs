//! Non-destructive array primitives.
//!
//! Every function here leaves its input untouched and returns a fresh `Vec`.

use arrkit_types::ArrayError;

/// Index of the first element equal to `value`.
#[must_use]
pub fn linear_search<T: PartialEq>(items: &[T], value: &T) -> Option<usize> {
    items.iter().position(|item| item == value)
}

/// Copy of `items` with `value` appended.
#[must_use]
pub fn append<T: Clone>(items: &[T], value: T) -> Vec<T> {
    let mut result = Vec::with_capacity(items.len() + 1);
    result.extend_from_slice(items);
    result.push(value);
    result
}

/// Copy of `items` with `value` placed at `index`, later elements shifted right.
///
/// `index == items.len()` appends.
pub fn insert_at<T: Clone>(items: &[T], index: usize, value: T) -> Result<Vec<T>, ArrayError> {
    if index > items.len() {
        return Err(ArrayError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    Ok(splice_in(items, index, value))
}

/// Copy of `items` without the element at `index`.
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Result<Vec<T>, ArrayError> {
    if items.is_empty() {
        return Err(ArrayError::NegativeSize);
    }
    if index >= items.len() {
        return Err(ArrayError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    let mut result = Vec::with_capacity(items.len() - 1);
    result.extend_from_slice(&items[..index]);
    result.extend_from_slice(&items[index + 1..]);
    Ok(result)
}

/// Elements matching `predicate`, in their original order.
#[must_use]
pub fn filter<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Elements *not* matching `predicate`, in their original order.
#[must_use]
pub fn remove_if<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    filter(items, |item| !predicate(item))
}

/// Caller guarantees `index <= items.len()`.
pub(crate) fn splice_in<T: Clone>(items: &[T], index: usize, value: T) -> Vec<T> {
    let mut result = Vec::with_capacity(items.len() + 1);
    result.extend_from_slice(&items[..index]);
    result.push(value);
    result.extend_from_slice(&items[index..]);
    result
}
