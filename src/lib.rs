//! # Ledger Chain - a minimal tamper-evident append-only ledger
//!
//! An ordered sequence of blocks, each cryptographically bound to its
//! predecessor through a SHA-256 content hash, so any retroactive change to
//! a stored record is detectable by recomputing hashes and checking linkage.
//!
//! ## How the code is organized
//! - `core/`: the ledger itself (transaction records, blocks, the chain)
//! - `error/`: error types and the crate `Result` alias
//! - `utils/`: digest, timestamp, and bincode serialization helpers
//! - `cli/`: argument parsing for the demo binary
//!
//! ## What this deliberately is not
//! No networking, no consensus or proof-of-work, no persistence, and no
//! signature verification: signatories are provenance tags, not proofs of
//! authorship. Tamper-evidence means changes are detectable, not prevented.
//! A host that wants to persist or transmit blocks serializes them itself;
//! the serde/bincode derives on `Block` and `TransactionRecord` are the hook.

pub mod cli;
pub mod core;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{Command, Opt};
pub use core::{Block, Chain, TransactionRecord, GENESIS_TAG};
pub use error::{LedgerError, Result};
pub use utils::{current_timestamp, deserialize, serialize, sha256_digest};
