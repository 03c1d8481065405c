//! Guarded-output construction.
//!
//! A staking reward is not paid to a bare key: it is wrapped in a 1-of-2
//! condition over the winner's destination key and the guard authority's
//! key, annotated with enough metadata to identify the staked coin and the
//! fork claim. The guard authority's secret key is published protocol-wide;
//! what authorizes the guard branch is cheat evidence, not key secrecy.

use crate::codec::encode_height_le;
use crate::error::GuardError;
use crate::validate::extract_stake_params;
use stakeproof_crypto::tagged_hash;
use stakeproof_tx::{ScriptChunk, SpendCondition, Transaction, TxOutput};
use stakeproof_types::{Amount, OutPoint, PublicKey};

/// Domain tag for coin fingerprints.
pub const COIN_FINGERPRINT_DOMAIN: &[u8] = b"stakeproof.coin.v1";

/// The fork-stable identity of a spendable coin: a domain-separated hash of
/// (source transaction id, output index).
///
/// Builder, detector, and authorizer all call this one function, so the
/// fingerprint recorded in a guarded output is bit-identical to the one any
/// later verifier recomputes from a competing stake transaction.
pub fn coin_fingerprint(prevout: &OutPoint) -> [u8; 32] {
    tagged_hash(
        COIN_FINGERPRINT_DOMAIN,
        &[prevout.txid.as_bytes(), &prevout.index.to_le_bytes()],
    )
}

/// Build the guarded reward output for a stake transaction.
///
/// Metadata chunk layout (byte-stable):
/// `[coin fingerprint (32B), prev block hash (32B), target height LE (4B)]`.
///
/// Fails if `stake_tx` is not itself a structurally well-formed stake
/// transaction — there is no guarded output without a decodable claim.
pub fn make_guarded_output(
    value: Amount,
    destination: &PublicKey,
    guard_authority: &PublicKey,
    stake_tx: &Transaction,
) -> Result<TxOutput, GuardError> {
    let params = extract_stake_params(stake_tx)?;
    let fingerprint = coin_fingerprint(&stake_tx.inputs[0].prevout);

    let metadata = vec![
        ScriptChunk::push(fingerprint.to_vec()),
        ScriptChunk::push(params.prev_block_hash.as_bytes().to_vec()),
        ScriptChunk::push(encode_height_le(params.target_height).to_vec()),
    ];

    Ok(TxOutput {
        value,
        condition: SpendCondition::GuardedOneOfTwo {
            keys: [*destination, *guard_authority],
            metadata,
        },
    })
}
