//! In-memory chain view — thread-safe map-backed lookups.

use crate::{BlockIndexEntry, ChainView};
use stakeproof_tx::Transaction;
use stakeproof_types::{BlockHash, TxId};
use std::collections::HashMap;
use std::sync::Mutex;

/// A map-backed [`ChainView`] for tests and light tooling.
/// Thread-safe for concurrent reads across validation threads.
pub struct MemoryChain {
    transactions: Mutex<HashMap<[u8; 32], (Transaction, BlockHash)>>,
    blocks: Mutex<HashMap<[u8; 32], u32>>,
}

impl MemoryChain {
    pub fn new() -> Self {
        Self {
            transactions: Mutex::new(HashMap::new()),
            blocks: Mutex::new(HashMap::new()),
        }
    }

    /// Record a block at the given height.
    pub fn insert_block(&self, hash: BlockHash, height: u32) {
        self.blocks.lock().unwrap().insert(*hash.as_bytes(), height);
    }

    /// Record a transaction as confirmed in the given block.
    pub fn insert_transaction(&self, tx: Transaction, block: BlockHash) {
        let txid = tx.txid();
        self.transactions
            .lock()
            .unwrap()
            .insert(*txid.as_bytes(), (tx, block));
    }
}

impl Default for MemoryChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainView for MemoryChain {
    fn confirmed_transaction(&self, txid: &TxId) -> Option<(Transaction, BlockHash)> {
        self.transactions.lock().unwrap().get(txid.as_bytes()).cloned()
    }

    fn block_index(&self, hash: &BlockHash) -> Option<BlockIndexEntry> {
        let height = *self.blocks.lock().unwrap().get(hash.as_bytes())?;
        Some(BlockIndexEntry {
            hash: *hash,
            height,
        })
    }
}
