//! Error handling for the ledger
//!
//! This module provides the error types for ledger operations.

use std::fmt;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Error types for ledger operations
///
/// A hash mismatch is not an error: tamper detection is reported as a
/// boolean result of `is_hash_valid`/`is_chain_valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Requested block index is outside `[0, len)`
    IndexOutOfRange { index: usize, len: usize },
    /// Serialization/deserialization errors
    Serialization(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::IndexOutOfRange { index, len } => {
                write!(f, "Block index {index} out of range (chain length {len})")
            }
            LedgerError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<bincode::error::EncodeError> for LedgerError {
    fn from(err: bincode::error::EncodeError) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}

impl From<bincode::error::DecodeError> for LedgerError {
    fn from(err: bincode::error::DecodeError) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}
