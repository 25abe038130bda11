//! Error types for card operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while encoding, decoding, or ordering cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Suit or rank label not present in the table.
    #[error("unknown label `{label}`")]
    UnknownLabel {
        /// The offending label.
        label: String,
    },
    /// Card index outside `0..52`.
    #[error("card index {index} out of range")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },
}

/// Errors that can occur when building a custom table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// A suit appears more than once in the suit order.
    #[error("suit listed more than once")]
    DuplicateSuit,
    /// A rank appears more than once in the rank order.
    #[error("rank listed more than once")]
    DuplicateRank,
}
