use serde::{Deserialize, Serialize};

/// Reserved signatory tag carried by the genesis placeholder record.
///
/// No real transaction ever needs it; its presence marks "not a transfer".
pub const GENESIS_TAG: &str = "genesis";

/// An immutable value-transfer payload with provenance metadata.
///
/// Pure value type: construction and field access only. The signatories are
/// ordered identity tags, not verified signatures. Once a record is embedded
/// in a block it is owned by that block and never mutated.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct TransactionRecord {
    amount: f64,
    signatories: Vec<String>,
    timestamp: i64,
}

impl TransactionRecord {
    /// Create a record. No semantic validation is performed: amount sign and
    /// signatory count are the caller's business.
    pub fn new(amount: f64, signatories: Vec<String>, timestamp: i64) -> TransactionRecord {
        TransactionRecord {
            amount,
            signatories,
            timestamp,
        }
    }

    pub fn get_amount(&self) -> f64 {
        self.amount
    }

    pub fn get_signatories(&self) -> Vec<String> {
        self.signatories.clone()
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Test-only field mutators used to simulate corruption of stored data.
    #[cfg(test)]
    pub(crate) fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    #[cfg(test)]
    pub(crate) fn set_signatories(&mut self, signatories: Vec<String>) {
        self.signatories = signatories;
    }

    #[cfg(test)]
    pub(crate) fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = timestamp;
    }
}
