//! Failure function (prefix function) of a search key.
//!
//! Entry `i` of the table is the length of the longest proper prefix of
//! `key[..i]` that is also a suffix of it. Entry `0` holds the `-1` sentinel
//! that lets the matching loop fall off the front of the key. The table is
//! what keeps counting and substitution linear: on a mismatch the key cursor
//! jumps back through the table instead of the text cursor moving backwards.
//!
//! ```rust
//! use kmpsub::FailureTable;
//!
//! let table = FailureTable::build(b"abab").unwrap();
//! assert_eq!(table.as_slice(), &[-1, 0, 0, 1, 2]);
//! ```
#![allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use alloc::vec::Vec;

use crate::error::{InvalidArgument, Result};

/// Precomputed failure function for one key.
///
/// Built once per key in O(m) and read-only afterwards. Holds `m + 1` entries
/// with `table[0] == -1` and `0 <= table[i] < i` for every `i > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureTable {
    entries: Vec<isize>,
}

impl FailureTable {
    /// Computes the failure table of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyKey`] if `key` is empty.
    pub fn build<T: PartialEq>(key: &[T]) -> Result<Self> {
        if key.is_empty() {
            return Err(InvalidArgument::EmptyKey.into());
        }

        let mut entries = Vec::with_capacity(key.len() + 1);
        entries.push(-1);

        let mut j: isize = -1;
        for unit in key {
            while j >= 0 && key[j as usize] != *unit {
                j = entries[j as usize];
            }
            j += 1;
            entries.push(j);
        }

        let table = Self { entries };
        tracing::trace!(
            key_len = key.len(),
            period = table.period(),
            "built failure table"
        );
        Ok(table)
    }

    /// Length of the key this table was built for.
    #[must_use]
    pub fn key_len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Number of entries, always `key_len() + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a table is never built for an empty key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry `i`, or [`None`] past the end of the table.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<isize> {
        self.entries.get(i).copied()
    }

    /// Raw entries, sentinel included.
    #[must_use]
    pub fn as_slice(&self) -> &[isize] {
        &self.entries
    }

    /// Smallest period of the key: `m - table[m]`.
    ///
    /// A key is periodic (e.g. `"aa"`, `"abab"`) when its period is shorter
    /// than the key itself.
    #[must_use]
    pub fn period(&self) -> usize {
        self.key_len() - self.border()
    }

    /// Length of the longest proper border of the whole key, `table[m]`.
    ///
    /// This is where the key cursor resumes after a full match when
    /// overlapping occurrences are wanted.
    #[must_use]
    pub fn border(&self) -> usize {
        self.entries[self.key_len()] as usize
    }

    /// Checks that this table belongs to a key of `key`'s length.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::EmptyKey`] for an empty key,
    /// [`InvalidArgument::TableMismatch`] when the lengths disagree.
    pub fn check_key<T>(&self, key: &[T]) -> Result<()> {
        if key.is_empty() {
            return Err(InvalidArgument::EmptyKey.into());
        }
        if self.entries.len() != key.len() + 1 {
            return Err(InvalidArgument::TableMismatch {
                key_len: key.len(),
                table_len: self.entries.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Feeds one text element to the matcher.
    ///
    /// `matched` is the number of key elements matched so far and must be
    /// below `key.len()`. Returns the new matched length, which equals
    /// `key.len()` exactly when a full occurrence ends at `unit`.
    #[inline]
    pub(crate) fn step<T: PartialEq>(&self, key: &[T], matched: usize, unit: &T) -> usize {
        debug_assert!(matched < key.len());
        let mut j = matched as isize;
        while j >= 0 && key[j as usize] != *unit {
            j = self.entries[j as usize];
        }
        (j + 1) as usize
    }
}
