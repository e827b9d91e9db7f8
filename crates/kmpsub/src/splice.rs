//! Growable output sequence for single-pass substitution.
//!
//! Overview
//! - The substituter reads and rewrites the same logical sequence: the output
//!   so far followed by the input not yet scanned. `SpliceBuffer` stores that
//!   sequence in two parts, a rewritten `head: Vec<T>` and an unscanned
//!   `tail: &[T]` borrowed from the caller's text.
//! - The scan cursor sits on the seam. `advance()` moves the element at the
//!   cursor from the tail into the head.
//!
//! Edits
//! - `overwrite`, `insert_at` and `remove_range` address logical positions in
//!   the head, i.e. strictly behind the cursor. `insert_at` moves the cursor
//!   forward by the inserted length and `remove_range` pulls it back by the
//!   removed length, so elements never cross the seam and the tail is never
//!   rewritten.
//! - Cost is proportional to the number of head elements after the edit
//!   point. The substituter only edits the last `m` elements, so each match
//!   costs O(m + v) and a whole call stays linear in input plus output size.
//!
//! Invariants
//! - `len() == head.len() + tail.len()` is the logical output length.
//! - `cursor() == head.len()`.
//! - The caller's text is never mutated; `into_vec()` copies the remaining
//!   tail once.

use alloc::vec::Vec;
use core::ops::Range;

#[derive(Debug)]
pub(crate) struct SpliceBuffer<'a, T> {
    head: Vec<T>,
    tail: &'a [T],
}

impl<'a, T: Clone> SpliceBuffer<'a, T> {
    pub(crate) fn new(text: &'a [T]) -> Self {
        Self {
            head: Vec::with_capacity(text.len()),
            tail: text,
        }
    }

    /// Logical length of the sequence.
    pub(crate) fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    /// Position of the next element to scan.
    pub(crate) fn cursor(&self) -> usize {
        self.head.len()
    }

    /// Elements not yet scanned.
    pub(crate) fn remaining(&self) -> usize {
        self.tail.len()
    }

    /// Moves the cursor one element forward.
    pub(crate) fn advance(&mut self) -> Option<&'a T> {
        let (first, rest) = self.tail.split_first()?;
        self.head.push(first.clone());
        self.tail = rest;
        Some(first)
    }

    /// Overwrites `src.len()` elements starting at `at`.
    pub(crate) fn overwrite(&mut self, at: usize, src: &[T]) {
        debug_assert!(at + src.len() <= self.cursor(), "overwrite crosses the cursor");
        self.head[at..at + src.len()].clone_from_slice(src);
    }

    /// Inserts `src` before position `at`; the cursor moves by `src.len()`.
    pub(crate) fn insert_at(&mut self, at: usize, src: &[T]) {
        debug_assert!(at <= self.cursor(), "insert past the cursor");
        if at == self.head.len() {
            self.head.extend_from_slice(src);
        } else {
            self.head.splice(at..at, src.iter().cloned());
        }
    }

    /// Removes `range`; the cursor moves back by its length.
    pub(crate) fn remove_range(&mut self, range: Range<usize>) {
        debug_assert!(range.end <= self.cursor(), "removal crosses the cursor");
        if range.end == self.head.len() {
            self.head.truncate(range.start);
        } else {
            self.head.drain(range);
        }
    }

    /// Finishes the scan, copying whatever was not scanned.
    pub(crate) fn into_vec(mut self) -> Vec<T> {
        self.head.extend_from_slice(self.tail);
        self.head
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn scanned(text: &[u8], n: usize) -> SpliceBuffer<'_, u8> {
        let mut buf = SpliceBuffer::new(text);
        for _ in 0..n {
            buf.advance().unwrap();
        }
        buf
    }

    #[test]
    fn advance_moves_the_seam() {
        let mut buf = SpliceBuffer::new(b"abc".as_slice());
        assert_eq!(buf.advance(), Some(&b'a'));
        assert_eq!((buf.cursor(), buf.remaining(), buf.len()), (1, 2, 3));
        buf.advance();
        buf.advance();
        assert_eq!(buf.advance(), None);
        assert_eq!(buf.into_vec(), b"abc");
    }

    #[test]
    fn insert_grows_and_advances_cursor() {
        let mut buf = scanned(b"NiNi", 2);
        buf.overwrite(0, b"AB");
        buf.insert_at(2, b"C");
        assert_eq!((buf.cursor(), buf.len()), (3, 5));
        assert_eq!(buf.into_vec(), b"ABCNi");
    }

    #[test]
    fn remove_shrinks_and_retracts_cursor() {
        let mut buf = scanned(b"NiNiNi", 4);
        buf.overwrite(0, b"X");
        buf.remove_range(1..4);
        assert_eq!((buf.cursor(), buf.len()), (1, 3));
        assert_eq!(buf.tail.first(), Some(&b'N'));
        assert_eq!(buf.into_vec(), b"XNi");
    }

    #[test]
    fn edits_inside_the_head() {
        let mut buf = scanned(b"abcdef", 4);
        buf.insert_at(1, b"xy");
        assert_eq!(buf.cursor(), 6);
        buf.remove_range(0..2);
        assert_eq!(buf.cursor(), 4);
        assert_eq!(buf.into_vec(), vec![b'y', b'b', b'c', b'd', b'e', b'f']);
    }
}
