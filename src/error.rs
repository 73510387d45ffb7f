//! Error types for sequence analysis.

use thiserror::Error;

/// Result type alias for sequence analysis operations
pub type Result<T> = std::result::Result<T, SeqError>;

/// Error type for sequence analysis operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// Normalized sequence contains a character outside {A, T, G, C}
    #[error("Invalid nucleotide '{base}' at position {position} (allowed: A, T, G, C)")]
    InvalidAlphabet {
        /// The offending character
        base: char,
        /// 0-based position in the normalized sequence
        position: usize,
    },

    /// Ratio metrics were requested for a zero-length sequence
    #[error("Sequence is empty, GC content is undefined")]
    EmptySequence,
}
