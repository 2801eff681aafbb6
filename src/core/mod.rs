//! Core ledger functionality
//!
//! This module contains the fundamental ledger components: transaction
//! records, hash-linked blocks, and the append-only chain that owns them.

pub mod block;
pub mod chain;
pub mod record;

pub use block::Block;
pub use chain::Chain;
pub use record::{TransactionRecord, GENESIS_TAG};
