use thiserror::Error;

/// Errors surfaced by table construction, counting and substitution.
///
/// Every operation validates its arguments before touching any buffer, so an
/// error never comes with partial output.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstError {
    /// An argument can never produce a meaningful result.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// The specific argument that was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The key has no elements, so occurrences are not well defined.
    #[error("search key is empty")]
    EmptyKey,
    /// A failure table was paired with a key of a different length.
    #[error("failure table has {table_len} entries but the key has length {key_len}")]
    TableMismatch {
        /// Length of the key passed alongside the table.
        key_len: usize,
        /// Number of entries in the table (`key_len + 1` when they agree).
        table_len: usize,
    },
}

/// Shorthand used throughout the crate.
pub type Result<T, E = SubstError> = core::result::Result<T, E>;
