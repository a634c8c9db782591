//! Error types for todo list mutations.

use super::state::TodoId;

/// Result type alias using [`TodoError`].
pub type Result<T> = std::result::Result<T, TodoError>;

/// Errors raised by [`AppController`](super::AppController) operations.
///
/// The view only ever hands out indices and ids taken from the current
/// render, so these indicate a stale or forged removal request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoError {
    /// Positional removal past the end of the list.
    #[error("todo index {index} out of range (list has {len} entries)")]
    IndexOutOfRange {
        /// Requested ordinal position.
        index: usize,
        /// Length of the list at the time of the request.
        len: usize,
    },

    /// Identity-based removal of a record that no longer exists.
    #[error("no todo with id {0}")]
    UnknownId(TodoId),
}
