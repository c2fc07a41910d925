//! Error types for the huffpack codec.

use thiserror::Error;

/// Result type alias used by the codec.
pub type Result<T> = std::result::Result<T, HuffError>;

/// Failures surfaced by compression and decompression.
///
/// A missing header and a short bitstream are not errors: the first decodes to
/// nothing, the second decodes to as many symbols as the available bits allow.
#[derive(Debug, Error)]
pub enum HuffError {
    /// I/O error from the underlying source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The symbol table ended before all declared records were read.
    #[error("truncated container: header declares {declared} symbols, found {found}")]
    TruncatedContainer { declared: u16, found: u16 },

    /// The input holds a byte the code table has no code for.
    #[error("no huffman code for symbol {0:#04x}")]
    UnknownSymbol(u8),

    /// The symbol table lists the same symbol more than once.
    #[error("corrupt container: symbol {0:#04x} appears twice in the symbol table")]
    DuplicateSymbol(u8),
}
