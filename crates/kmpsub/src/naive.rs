//! Baseline search and replace built on a plain "find next" primitive.
//!
//! These routines restart a window comparison at every offset and cost
//! O(n·m). They exist to cross-check the linear-time routines: for every
//! input, [`count`] must agree with
//! [`count_occurrences`](crate::count_occurrences) and [`replace`] with
//! [`replace_occurrences`](crate::replace_occurrences).
//!
//! An empty key never matches here, so callers get `0` and an unchanged copy
//! rather than an error.

use alloc::vec::Vec;

/// Offset of the first occurrence of `key` in `text` at or after `start`.
#[must_use]
pub fn find_from<T: PartialEq>(text: &[T], key: &[T], start: usize) -> Option<usize> {
    if key.is_empty() || start > text.len() || key.len() > text.len() - start {
        return None;
    }
    text[start..]
        .windows(key.len())
        .position(|window| window == key)
        .map(|offset| start + offset)
}

/// Number of non-overlapping occurrences of `key`.
#[must_use]
pub fn count<T: PartialEq>(text: &[T], key: &[T]) -> usize {
    let mut count = 0;
    let mut pos = find_from(text, key, 0);
    while let Some(found) = pos {
        count += 1;
        pos = find_from(text, key, found + key.len());
    }
    count
}

/// Copy of `text` with each non-overlapping occurrence of `key` replaced by
/// `value`.
///
/// Edits the copy in place and resumes the search right after the inserted
/// value, so an occurrence that the value itself completes is never matched.
#[must_use]
pub fn replace<T: PartialEq + Clone>(text: &[T], key: &[T], value: &[T]) -> Vec<T> {
    let mut result = text.to_vec();
    let mut pos = find_from(&result, key, 0);
    while let Some(found) = pos {
        result.splice(found..found + key.len(), value.iter().cloned());
        pos = find_from(&result, key, found + value.len());
    }
    result
}
