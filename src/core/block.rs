use crate::core::TransactionRecord;
use crate::error::Result;
use crate::utils::{deserialize, serialize, sha256_digest};
use data_encoding::HEXLOWER;
use ring::digest::{Context, SHA256};
use serde::{Deserialize, Serialize};

/// A single ledger entry binding a transaction record to a content hash and
/// to the hash of the block before it.
///
/// All fields are fixed at construction; accessors hand out owned copies so
/// a caller can never reach the stored state through a returned value. Any
/// later divergence between the stored fields and `hash` is tampering, and
/// `is_hash_valid` reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct Block {
    index: usize,
    payload: TransactionRecord,
    previous_hash: String,
    hash: String,
}

impl Block {
    /// Build a block at `index` whose content hash covers `payload` and
    /// `previous_hash`. The payload is stored as-is; no validation.
    pub fn new_block(
        index: usize,
        payload: TransactionRecord,
        previous_hash: String,
    ) -> Block {
        let hash = Self::hash_contents(&payload, &previous_hash);
        Block {
            index,
            payload,
            previous_hash,
            hash,
        }
    }

    /// SHA-256 over a canonical byte form of the payload followed by the
    /// previous hash, hex-encoded.
    ///
    /// Every variable-length field is length-prefixed so distinct payloads
    /// always produce distinct input bytes: `["ab", "c"]` and `["a", "bc"]`
    /// hash differently even though their concatenations agree. All integers
    /// are big-endian and the amount is hashed by IEEE-754 bit pattern, so
    /// the digest is reproducible across platforms.
    fn hash_contents(payload: &TransactionRecord, previous_hash: &str) -> String {
        let mut context = Context::new(&SHA256);
        context.update(&payload.get_amount().to_bits().to_be_bytes());
        let signatories = payload.get_signatories();
        context.update(&(signatories.len() as u64).to_be_bytes());
        for signatory in &signatories {
            context.update(&(signatory.len() as u64).to_be_bytes());
            context.update(signatory.as_bytes());
        }
        context.update(&payload.get_timestamp().to_be_bytes());
        context.update(previous_hash.as_bytes());
        HEXLOWER.encode(context.finish().as_ref())
    }

    /// Recompute the hash from the stored fields and compare it with the
    /// hash recorded at construction. Pure; false means the block's stored
    /// data no longer matches what was hashed (tampering or corruption).
    pub fn is_hash_valid(&self) -> bool {
        Self::hash_contents(&self.payload, &self.previous_hash) == self.hash
    }

    pub fn get_index(&self) -> usize {
        self.index
    }

    pub fn get_hash(&self) -> String {
        self.hash.clone()
    }

    pub fn get_previous_hash(&self) -> String {
        self.previous_hash.clone()
    }

    pub fn get_data(&self) -> TransactionRecord {
        self.payload.clone()
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        serialize(self)
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Block> {
        deserialize::<Block>(bytes)
    }

    /// Hex digest of the genesis seed: SHA-256 of the integer 0 as eight
    /// big-endian bytes. Reproducible, so independently created chains carry
    /// the same genesis previous-hash.
    pub fn genesis_seed_hash() -> String {
        HEXLOWER.encode(&sha256_digest(&0u64.to_be_bytes()))
    }

    /// Test-only access to the stored payload, to simulate corruption.
    #[cfg(test)]
    pub(crate) fn payload_mut(&mut self) -> &mut TransactionRecord {
        &mut self.payload
    }

    #[cfg(test)]
    pub(crate) fn set_previous_hash(&mut self, previous_hash: String) {
        self.previous_hash = previous_hash;
    }
}
