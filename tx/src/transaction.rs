//! The transaction model: inputs, outputs, witnesses, canonical encoding.

use crate::condition::SpendCondition;
use crate::error::TxError;
use serde::{Deserialize, Serialize};
use stakeproof_crypto::blake2b_256;
use stakeproof_types::{Amount, OutPoint, PublicKey, Signature, TxId};

/// The witness satisfying an input's spend condition: which key signed and
/// the signature itself. The signature covers the transaction's signature
/// hash, never the witness fields (see `sighash`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub signer: PublicKey,
    pub signature: Signature,
}

/// A transaction input: the coin being spent plus its witness.
///
/// Coinbase inputs reference the null outpoint and carry no witness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub prevout: OutPoint,
    pub witness: Option<Witness>,
}

impl TxInput {
    /// An unsigned input spending `prevout`.
    pub fn unsigned(prevout: OutPoint) -> Self {
        Self {
            prevout,
            witness: None,
        }
    }
}

/// A transaction output: value plus spending condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub value: Amount,
    pub condition: SpendCondition,
}

/// A transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
}

impl Transaction {
    pub fn new(inputs: Vec<TxInput>, outputs: Vec<TxOutput>) -> Self {
        Self { inputs, outputs }
    }

    /// A coinbase transaction: single null-outpoint input, given outputs.
    pub fn coinbase(outputs: Vec<TxOutput>) -> Self {
        Self {
            inputs: vec![TxInput::unsigned(OutPoint::null())],
            outputs,
        }
    }

    /// Whether this is a coinbase (block reward) transaction.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    /// The transaction id: Blake2b-256 of the canonical encoding.
    pub fn txid(&self) -> TxId {
        // bincode of an in-memory transaction cannot fail; fall back to
        // hashing nothing rather than panicking in consensus code.
        let bytes = bincode::serialize(self).unwrap_or_default();
        TxId::new(blake2b_256(&bytes))
    }

    /// Canonical wire encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TxError> {
        bincode::serialize(self).map_err(|e| TxError::Serialize(e.to_string()))
    }

    /// Decode a transaction from its canonical encoding.
    ///
    /// Fallible by design: evidence payloads are attacker-supplied, so every
    /// parse failure must surface as an error, never a panic.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TxError> {
        bincode::deserialize(bytes).map_err(|e| TxError::Deserialize(e.to_string()))
    }

    /// The data chunks of the trailing output, if it is a data carrier.
    pub fn trailing_data_chunks(&self) -> Option<&[crate::chunk::ScriptChunk]> {
        self.outputs.last()?.condition.data_chunks()
    }
}
