//! Single-pass substitution of every key occurrence.
//!
//! The scan walks the logical output sequence (rewritten prefix plus the
//! unscanned rest of the input) exactly once. When a full match ends at the
//! cursor `i`, the span `[i - m, i)` is rewritten in place:
//!
//! 1. the first `min(m, v)` elements are overwritten with the value's prefix;
//! 2. a longer value inserts its remaining `v - m` elements at `i`, moving the
//!    cursor past them;
//! 3. a shorter value removes the surplus `m - v` elements, pulling the cursor
//!    back to the end of the written value;
//! 4. equal lengths need no shift.
//!
//! The key cursor then restarts from the empty prefix. The matched elements
//! were consumed and now hold value elements, so no border of the old match
//! can be trusted; resuming at `table[m]` would let a later match start inside
//! rewritten output (for `"aaa"` with key `"aa"` and value `"b"` it would
//! consume the `b`). Everything before the cursor is final and never
//! re-examined.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{error::Result, failure::FailureTable, options::ReplaceOptions, splice::SpliceBuffer};

/// Output of a substitution together with the number of replaced spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced<T> {
    /// The rewritten sequence.
    pub text: Vec<T>,
    /// How many occurrences were replaced by the value.
    pub replacements: usize,
}

/// Position of the scan within the logical output.
///
/// `key_cursor` stays within `0..=m`; it equals `m` only between detecting a
/// match and rewriting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScanState {
    pub(crate) text_cursor: usize,
    pub(crate) key_cursor: usize,
    pub(crate) output_len: usize,
}

/// Returns a copy of `text` with every non-overlapping occurrence of `key`
/// replaced by `value`.
///
/// Occurrences are the ones [`count_occurrences`](crate::count_occurrences)
/// counts. `value` may be shorter than, longer than or as long as `key`; an
/// empty value deletes the occurrences. The input is never modified.
///
/// # Errors
///
/// Fails with an invalid-argument error if `key` is empty or `table` was not
/// built for a key of this length. No output is produced in that case.
pub fn replace_occurrences<T: PartialEq + Clone>(
    text: &[T],
    key: &[T],
    value: &[T],
    table: &FailureTable,
) -> Result<Vec<T>> {
    substitute(text, key, value, table, ReplaceOptions::default()).map(|r| r.text)
}

/// Like [`replace_occurrences`], honoring `options` and reporting how many
/// spans were replaced.
///
/// # Errors
///
/// Same as [`replace_occurrences`].
pub fn substitute<T: PartialEq + Clone>(
    text: &[T],
    key: &[T],
    value: &[T],
    table: &FailureTable,
    options: ReplaceOptions,
) -> Result<Replaced<T>> {
    table.check_key(key)?;

    let replaced = Substituter {
        key,
        value,
        table,
        buf: SpliceBuffer::new(text),
        key_cursor: 0,
        replacements: 0,
    }
    .run(options.limit);

    tracing::debug!(
        text_len = text.len(),
        key_len = key.len(),
        value_len = value.len(),
        replacements = replaced.replacements,
        output_len = replaced.text.len(),
        "substituted occurrences"
    );
    Ok(replaced)
}

struct Substituter<'a, T> {
    key: &'a [T],
    value: &'a [T],
    table: &'a FailureTable,
    buf: SpliceBuffer<'a, T>,
    key_cursor: usize,
    replacements: usize,
}

impl<T: PartialEq + Clone> Substituter<'_, T> {
    fn run(mut self, limit: Option<usize>) -> Replaced<T> {
        let m = self.key.len();

        // Stop as soon as the rest of the input cannot complete the key; the
        // unmatched tail is copied through verbatim.
        while self.buf.remaining() >= m - self.key_cursor {
            if limit.is_some_and(|limit| self.replacements >= limit) {
                break;
            }
            let Some(unit) = self.buf.advance() else {
                break;
            };
            self.key_cursor = self.table.step(self.key, self.key_cursor, unit);
            if self.key_cursor == m {
                self.rewrite_match();
            }
        }

        Replaced {
            text: self.buf.into_vec(),
            replacements: self.replacements,
        }
    }

    /// Rewrites the match that ends at the cursor.
    fn rewrite_match(&mut self) {
        let m = self.key.len();
        let v = self.value.len();
        let before = self.state();
        debug_assert_eq!(before.key_cursor, m);
        let end = before.text_cursor;
        let start = end - m;

        let shared = m.min(v);
        self.buf.overwrite(start, &self.value[..shared]);
        match v.cmp(&m) {
            Ordering::Greater => self.buf.insert_at(end, &self.value[m..]),
            Ordering::Less => self.buf.remove_range(start + v..end),
            Ordering::Equal => {}
        }
        self.key_cursor = 0;
        self.replacements += 1;

        let after = self.state();
        debug_assert_eq!(after.text_cursor, start + v);
        debug_assert_eq!(after.output_len + m, before.output_len + v);
        tracing::trace!(?before, ?after, "rewrote occurrence");
    }

    fn state(&self) -> ScanState {
        ScanState {
            text_cursor: self.buf.cursor(),
            key_cursor: self.key_cursor,
            output_len: self.buf.len(),
        }
    }
}
