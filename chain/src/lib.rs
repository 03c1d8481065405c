//! Read-only chain-state lookups behind a narrow trait.
//!
//! Validation code never touches a block index or transaction store
//! directly; it receives a `&dyn ChainView` per call. Backends only need to
//! answer two questions: where was this transaction confirmed, and how high
//! is this block. Absence is `None` — the guard layer decides what a missing
//! lookup means.

pub mod memory;

pub use memory::MemoryChain;

use stakeproof_tx::Transaction;
use stakeproof_types::{BlockHash, TxId};

/// A block-index entry: the facts validation needs about a confirmed block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockIndexEntry {
    pub hash: BlockHash,
    pub height: u32,
}

/// Read-only view of confirmed chain state.
///
/// Implementations must be safe for concurrent reads from multiple
/// validation threads; every method is a pure lookup with no side effects.
pub trait ChainView: Send + Sync {
    /// The confirmed transaction with this id and the hash of its
    /// confirming block, or `None` if unknown.
    fn confirmed_transaction(&self, txid: &TxId) -> Option<(Transaction, BlockHash)>;

    /// The block-index entry for this block hash, or `None` if unknown.
    fn block_index(&self, hash: &BlockHash) -> Option<BlockIndexEntry>;
}
