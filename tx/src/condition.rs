//! Spend conditions — the resolved forms an output script can take.
//!
//! Resolution happens at construction time: an output is built directly as
//! one of these forms, so validators never re-parse raw script bytes.

use crate::chunk::ScriptChunk;
use serde::{Deserialize, Serialize};
use stakeproof_crypto::key_hash;
use stakeproof_types::{KeyHash, PublicKey};

/// The spending condition of a transaction output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpendCondition {
    /// Spendable by a signature from exactly this key.
    PayToKey(PublicKey),

    /// Spendable by a signature from the key hashing to this value.
    PayToKeyHash(KeyHash),

    /// A 1-of-2 guarded condition: spendable by either key, annotated with
    /// identifying metadata chunks. Used for guarded coinbase reward outputs.
    GuardedOneOfTwo {
        keys: [PublicKey; 2],
        metadata: Vec<ScriptChunk>,
    },

    /// Provably unspendable; exists only to carry data chunks.
    DataCarrier(Vec<ScriptChunk>),
}

impl SpendCondition {
    /// Whether any signature can ever satisfy this condition.
    pub fn is_spendable(&self) -> bool {
        !matches!(self, Self::DataCarrier(_))
    }

    /// The carried data chunks, for data-bearing conditions.
    pub fn data_chunks(&self) -> Option<&[ScriptChunk]> {
        match self {
            Self::DataCarrier(chunks) => Some(chunks),
            _ => None,
        }
    }

    /// Whether `signer` is one of the keys this condition admits.
    ///
    /// For pay-to-key-hash the signer's key is hashed and compared; for the
    /// guarded 1-of-2 either listed key is admitted. This is the key-identity
    /// half of spend authorization; the signature itself is checked
    /// separately against the transaction's signature hash.
    pub fn admits_signer(&self, signer: &PublicKey) -> bool {
        match self {
            Self::PayToKey(key) => key == signer,
            Self::PayToKeyHash(hash) => key_hash(signer) == *hash,
            Self::GuardedOneOfTwo { keys, .. } => keys.contains(signer),
            Self::DataCarrier(_) => false,
        }
    }
}
