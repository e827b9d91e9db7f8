use alloc::vec::Vec;

use crate::{
    counter::{self, MatchIter},
    error::Result,
    failure::FailureTable,
    options::{CountOptions, ReplaceOptions},
    substituter::{self, Replaced},
};

/// A key paired with its failure table.
///
/// Building the table costs O(m); a `Matcher` pays it once and can then count
/// and replace in any number of texts. The free functions [`count`] and
/// [`replace`] build a fresh table per call instead.
///
/// ```rust
/// use kmpsub::Matcher;
///
/// let ni = Matcher::new(b"Ni").unwrap();
/// assert_eq!(ni.count(b"NiNi NI N ni NNi nI Niinii"), 4);
/// assert_eq!(ni.replace(b"NiNi", b"ABC"), b"ABCABC");
/// ```
#[derive(Debug, Clone)]
pub struct Matcher<'k, T> {
    key: &'k [T],
    table: FailureTable,
}

impl<'k, T: PartialEq> Matcher<'k, T> {
    /// Builds the failure table for `key`.
    ///
    /// # Errors
    ///
    /// Fails if `key` is empty.
    pub fn new(key: &'k [T]) -> Result<Self> {
        let table = FailureTable::build(key)?;
        Ok(Self { key, table })
    }

    /// The key being searched for.
    #[must_use]
    pub fn key(&self) -> &'k [T] {
        self.key
    }

    /// Failure table built for [`key`](Self::key).
    #[must_use]
    pub fn table(&self) -> &FailureTable {
        &self.table
    }

    /// Number of non-overlapping occurrences in `text`.
    #[must_use]
    pub fn count(&self, text: &[T]) -> usize {
        self.count_with(text, CountOptions::default())
    }

    /// Number of occurrences in `text`, overlapping ones included.
    #[must_use]
    pub fn count_overlapping(&self, text: &[T]) -> usize {
        self.count_with(text, CountOptions { overlapping: true })
    }

    /// Counts occurrences according to `options`.
    #[must_use]
    pub fn count_with(&self, text: &[T], options: CountOptions) -> usize {
        // The table was built from `self.key`, so validation cannot fail.
        let counted = if options.overlapping {
            counter::count_overlapping(text, self.key, &self.table)
        } else {
            counter::count_occurrences(text, self.key, &self.table)
        };
        counted.unwrap_or_default()
    }

    /// Start offsets of the non-overlapping occurrences in `text`.
    pub fn find_iter<'m, 't>(&'m self, text: &'t [T]) -> MatchIter<'t, 'm, T> {
        MatchIter::new(text, self.key, &self.table)
    }
}

impl<T: PartialEq + Clone> Matcher<'_, T> {
    /// Copy of `text` with every non-overlapping occurrence replaced by
    /// `value`.
    #[must_use]
    pub fn replace(&self, text: &[T], value: &[T]) -> Vec<T> {
        self.substitute(text, value, ReplaceOptions::default()).text
    }

    /// Replaces occurrences according to `options` and reports how many were
    /// replaced.
    #[must_use]
    pub fn substitute(&self, text: &[T], value: &[T], options: ReplaceOptions) -> Replaced<T> {
        substituter::substitute(text, self.key, value, &self.table, options).unwrap_or_else(|_| Replaced {
            text: text.to_vec(),
            replacements: 0,
        })
    }
}

/// Counts the non-overlapping occurrences of `key` in `text`.
///
/// # Errors
///
/// Fails if `key` is empty.
pub fn count<T: PartialEq>(text: &[T], key: &[T]) -> Result<usize> {
    let table = FailureTable::build(key)?;
    counter::count_occurrences(text, key, &table)
}

/// Replaces the non-overlapping occurrences of `key` in `text` by `value`.
///
/// # Errors
///
/// Fails if `key` is empty.
pub fn replace<T: PartialEq + Clone>(text: &[T], key: &[T], value: &[T]) -> Result<Vec<T>> {
    let table = FailureTable::build(key)?;
    substituter::replace_occurrences(text, key, value, &table)
}
