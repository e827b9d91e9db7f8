//! Occurrence counting over a precomputed [`FailureTable`].

use crate::{error::Result, failure::FailureTable};

/// Counts the non-overlapping occurrences of `key` in `text`.
///
/// Scans left to right once. After a full match the matched elements are
/// consumed, so an occurrence that overlaps the previous one is not counted:
/// `"NiN"` occurs once in `"NiNiNi"`. The result always equals what repeated
/// "find the next occurrence after the previous match end" produces.
///
/// Runs in O(n + m) and returns `0` straight away when the key is longer than
/// the text.
///
/// # Errors
///
/// Fails with an invalid-argument error if `key` is empty or `table` was not
/// built for a key of this length. Nothing is scanned in that case.
pub fn count_occurrences<T: PartialEq>(text: &[T], key: &[T], table: &FailureTable) -> Result<usize> {
    table.check_key(key)?;
    let count = MatchIter::new(text, key, table).count();
    tracing::debug!(text_len = text.len(), key_len = key.len(), count, "counted occurrences");
    Ok(count)
}

/// Counts every occurrence of `key`, including ones that overlap.
///
/// This is the textbook KMP count: after a match the key cursor resumes from
/// the key's longest border (`table[m]`) instead of from scratch, so `"aa"`
/// occurs twice in `"aaa"`.
///
/// # Errors
///
/// Same as [`count_occurrences`].
pub fn count_overlapping<T: PartialEq>(text: &[T], key: &[T], table: &FailureTable) -> Result<usize> {
    table.check_key(key)?;
    let m = key.len();
    if m > text.len() {
        return Ok(0);
    }

    let mut count = 0;
    let mut matched = 0;
    for unit in text {
        matched = table.step(key, matched, unit);
        if matched == m {
            count += 1;
            matched = table.border();
        }
    }
    tracing::debug!(text_len = text.len(), key_len = m, count, "counted overlapping occurrences");
    Ok(count)
}

/// Iterator over the start offsets of non-overlapping occurrences.
///
/// Created by [`Matcher::find_iter`](crate::Matcher::find_iter). Yields
/// offsets in increasing order; consecutive offsets are at least `key.len()`
/// apart.
#[derive(Debug, Clone)]
pub struct MatchIter<'t, 'k, T> {
    text: &'t [T],
    key: &'k [T],
    table: &'k FailureTable,
    pos: usize,
}

impl<'t, 'k, T: PartialEq> MatchIter<'t, 'k, T> {
    pub(crate) fn new(text: &'t [T], key: &'k [T], table: &'k FailureTable) -> Self {
        debug_assert_eq!(table.key_len(), key.len());
        // A key longer than the text can never match; skip the scan.
        let pos = if key.len() > text.len() { text.len() } else { 0 };
        Self { text, key, table, pos }
    }
}

impl<T: PartialEq> Iterator for MatchIter<'_, '_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let m = self.key.len();
        let mut matched = 0;
        while self.pos < self.text.len() {
            if self.text.len() - self.pos < m - matched {
                // Not enough input left to complete the key.
                self.pos = self.text.len();
                break;
            }
            matched = self.table.step(self.key, matched, &self.text[self.pos]);
            self.pos += 1;
            if matched == m {
                return Some(self.pos - m);
            }
        }
        None
    }
}

impl<T: PartialEq> core::iter::FusedIterator for MatchIter<'_, '_, T> {}
