//! Linear-time substring counting and substitution.
//!
//! `kmpsub` answers two questions about a text and a fixed, non-empty key:
//! how many non-overlapping occurrences of the key it contains, and what the
//! text looks like with every such occurrence replaced by a value of any
//! length. Both run in a single left-to-right pass driven by the key's
//! failure function (Knuth–Morris–Pratt), over any element type with
//! equality: narrow `u8`, wide `u16`, `char`, or your own tokens.
//!
//! ```rust
//! use kmpsub::{FailureTable, count_occurrences, replace_occurrences};
//!
//! let key = b"Ni";
//! let table = FailureTable::build(key)?;
//! assert_eq!(count_occurrences(b"aNiNib", key, &table)?, 2);
//! assert_eq!(replace_occurrences(b"aNiNib", key, b"", &table)?, b"ab");
//! # Ok::<(), kmpsub::SubstError>(())
//! ```
//!
//! The [`naive`] module holds the O(n·m) baseline used to cross-check these
//! routines.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod counter;
mod error;
mod failure;
mod matcher;
mod options;
mod splice;
mod substituter;
mod text;

pub mod naive;

#[cfg(test)]
mod tests;

pub use counter::{MatchIter, count_occurrences, count_overlapping};
pub use error::{InvalidArgument, Result, SubstError};
pub use failure::FailureTable;
pub use matcher::{Matcher, count, replace};
pub use options::{CountOptions, ReplaceOptions};
pub use substituter::{Replaced, replace_occurrences, substitute};
pub use text::{Substitute, narrow, str_count, str_replace, wide};
