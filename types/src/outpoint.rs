//! Outpoints — references to a specific output of a prior transaction.

use crate::hash::TxId;
use serde::{Deserialize, Serialize};

/// A reference to one output of a confirmed transaction.
///
/// The pair (txid, index) identifies a spendable coin independent of which
/// fork references it, which is what makes outpoint fingerprints usable as
/// fork-stable coin identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: TxId,
    pub index: u32,
}

impl OutPoint {
    pub fn new(txid: TxId, index: u32) -> Self {
        Self { txid, index }
    }

    /// The null outpoint used by coinbase inputs.
    pub fn null() -> Self {
        Self {
            txid: TxId::ZERO,
            index: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.index == u32::MAX
    }
}
