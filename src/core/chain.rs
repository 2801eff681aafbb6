use crate::core::{Block, TransactionRecord, GENESIS_TAG};
use crate::error::{LedgerError, Result};
use crate::utils::current_timestamp;
use log::info;

/// The append-only ledger: an ordered sequence of hash-linked blocks.
///
/// A chain owns its blocks exclusively and only ever grows. Two invariants
/// hold across the whole sequence: every block's stored hash matches a
/// recomputation from its own fields (self-integrity), and every block's
/// `previous_hash` equals the hash of the block before it (linkage).
/// `is_chain_valid` checks both.
///
/// Thread contract: `add_block` takes `&mut self`, so exclusive access
/// serializes writers and excludes readers during an append. Sharing a chain
/// across threads is the caller's job (wrap it in a lock); the chain itself
/// holds no synchronization state and performs no I/O.
#[derive(Debug, Clone)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain holding only the genesis block: a placeholder record
    /// (amount 0, the reserved genesis tag, current time) at index 0, linked
    /// to the fixed seed hash rather than a real predecessor.
    pub fn new() -> Chain {
        let genesis_record =
            TransactionRecord::new(0.0, vec![String::from(GENESIS_TAG)], current_timestamp());
        let genesis = Block::new_block(0, genesis_record, Block::genesis_seed_hash());
        info!("Created chain with genesis block: {}", genesis.get_hash());
        Chain {
            blocks: vec![genesis],
        }
    }

    /// Append a new block wrapping `record` after the current tail.
    ///
    /// The new block's index is the current length and its `previous_hash`
    /// is the tail's hash; no existing block is touched. The record is
    /// stored without validation.
    pub fn add_block(&mut self, record: TransactionRecord) {
        let index = self.blocks.len();
        let block = Block::new_block(index, record, self.get_latest_block().get_hash());
        info!("Appended block {} with hash {}", index, block.get_hash());
        self.blocks.push(block);
    }

    /// Walk the whole sequence once, checking self-integrity of every block
    /// and linkage of every non-genesis block. Returns false at the first
    /// violation.
    pub fn is_chain_valid(&self) -> bool {
        for (i, block) in self.blocks.iter().enumerate() {
            if !block.is_hash_valid() {
                return false;
            }
            if i > 0 && block.get_previous_hash() != self.blocks[i - 1].get_hash() {
                return false;
            }
        }
        true
    }

    /// Copy of the block at `index`, or `IndexOutOfRange` when `index` is
    /// past the tail. Negative positions are unrepresentable in `usize`.
    pub fn get_block(&self, index: usize) -> Result<Block> {
        self.blocks
            .get(index)
            .cloned()
            .ok_or(LedgerError::IndexOutOfRange {
                index,
                len: self.blocks.len(),
            })
    }

    /// Copy of the tail block. The chain is never empty after construction,
    /// so this always succeeds.
    pub fn get_latest_block(&self) -> Block {
        self.blocks
            .last()
            .cloned()
            .expect("chain always contains at least the genesis block")
    }

    pub fn get_chain_size(&self) -> usize {
        self.blocks.len()
    }

    /// Test-only mutable access to a stored block, to simulate corruption.
    #[cfg(test)]
    pub(crate) fn block_mut(&mut self, index: usize) -> &mut Block {
        &mut self.blocks[index]
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}
