//! Signature hashing for transaction inputs.
//!
//! The signature hash commits to every prevout, every output, the index of
//! the input being signed, the source output being spent, and the consensus
//! branch id of the active epoch. Witness fields are excluded, so signatures
//! can be attached after the fact; outputs are included, so evidence outputs
//! must be attached *before* signing a slashing spend.

use crate::error::TxError;
use crate::transaction::{Transaction, TxOutput, Witness};
use stakeproof_crypto::{sign_message, tagged_hash, verify_signature};
use stakeproof_types::{KeyPair, OutPoint};

/// Domain tag for input signature hashes.
pub const SIGHASH_DOMAIN: &[u8] = b"stakeproof.sighash.v1";

/// Compute the signature hash for `input_index` of `tx` spending
/// `source_output`, under the epoch identified by `branch_id`.
pub fn signature_hash(
    tx: &Transaction,
    input_index: usize,
    source_output: &TxOutput,
    branch_id: u32,
) -> Result<[u8; 32], TxError> {
    if input_index >= tx.inputs.len() {
        return Err(TxError::InputOutOfRange(input_index));
    }
    let prevouts: Vec<OutPoint> = tx.inputs.iter().map(|i| i.prevout).collect();
    let prevout_bytes =
        bincode::serialize(&prevouts).map_err(|e| TxError::Serialize(e.to_string()))?;
    let output_bytes =
        bincode::serialize(&tx.outputs).map_err(|e| TxError::Serialize(e.to_string()))?;
    let source_bytes =
        bincode::serialize(source_output).map_err(|e| TxError::Serialize(e.to_string()))?;

    Ok(tagged_hash(
        SIGHASH_DOMAIN,
        &[
            &branch_id.to_le_bytes(),
            &prevout_bytes,
            &output_bytes,
            &(input_index as u32).to_le_bytes(),
            &source_bytes,
        ],
    ))
}

/// Sign `input_index` of `tx` with `keypair` and attach the witness.
pub fn sign_input(
    tx: &mut Transaction,
    input_index: usize,
    source_output: &TxOutput,
    branch_id: u32,
    keypair: &KeyPair,
) -> Result<(), TxError> {
    let digest = signature_hash(tx, input_index, source_output, branch_id)?;
    let signature = sign_message(&digest, &keypair.private);
    tx.inputs[input_index].witness = Some(Witness {
        signer: keypair.public,
        signature,
    });
    Ok(())
}

/// Verify the witness on `input_index` of `tx` against `source_output`.
///
/// Checks both halves of spend authorization: the witness signer must be
/// admitted by the source condition, and the signature must verify over the
/// input's signature hash. Any structural defect (missing witness, bad
/// index) is simply `false`.
pub fn verify_input(
    tx: &Transaction,
    input_index: usize,
    source_output: &TxOutput,
    branch_id: u32,
) -> bool {
    let Some(input) = tx.inputs.get(input_index) else {
        return false;
    };
    let Some(witness) = &input.witness else {
        return false;
    };
    if !source_output.condition.admits_signer(&witness.signer) {
        return false;
    }
    let Ok(digest) = signature_hash(tx, input_index, source_output, branch_id) else {
        return false;
    };
    verify_signature(&digest, &witness.signature, &witness.signer)
}
