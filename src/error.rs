//! Error types for code construction and verification.

use thiserror::Error;

/// Error variants for Huffman code metrics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A symbol of the frequency table has no entry in the code table.
    ///
    /// Only happens when a table is paired with codes built from a
    /// different distribution.
    #[error("missing code for symbol {symbol}")]
    MissingCode {
        /// The offending symbol, rendered with `Debug`.
        symbol: String,
    },

    /// The weighted length does not fit in a `u128`.
    #[error("weighted length overflow")]
    WeightOverflow,
}

/// A specialized Result type for Huffman code operations.
pub type Result<T> = std::result::Result<T, Error>;
