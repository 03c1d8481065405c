//! Guarded-spend authorization.
//!
//! A guarded 1-of-2 output admits two spend paths: the destination key
//! (the staker claiming their matured reward) or the guard authority key
//! (anyone slashing a provable cheat). The paths are distinguished by which
//! key the witness names; an unknown signer is rejected outright rather
//! than assumed onto either branch.

use crate::codec::{decode_height_le, CHEAT_EVIDENCE_TAG};
use crate::detect::{detect_matching_stake, StakeMatch};
use crate::error::GuardError;
use stakeproof_chain::ChainView;
use stakeproof_tx::{sighash, SpendCondition, Transaction};
use stakeproof_types::ConsensusParams;

/// Which spend path authorized a guarded-output spend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpendAuthorization {
    /// Signed by the destination key; no further conditions.
    Owner,
    /// Signed by the guard authority key and backed by provable cheat
    /// evidence.
    Slashing,
}

enum SignatureBranch {
    Destination,
    GuardAuthority,
}

/// Authorize the spend of a guarded output by `input_index` of `spending_tx`.
///
/// The owner path needs only a valid destination-key signature. The guard
/// path additionally requires the spending transaction to carry a trailing
/// evidence output whose embedded stake transaction proves cheating against
/// the guarded reward. The branch id for signature verification comes from
/// the target height recorded in the guarded metadata, so verifier and
/// spender agree on the epoch without consulting current chain state.
pub fn authorize_guarded_spend(
    chain: &dyn ChainView,
    consensus: &ConsensusParams,
    spending_tx: &Transaction,
    input_index: usize,
) -> Result<SpendAuthorization, GuardError> {
    let input = spending_tx
        .inputs
        .get(input_index)
        .ok_or(GuardError::StructuralMismatch("input index out of range"))?;
    let prevout = input.prevout;

    let (reward_tx, _) = chain
        .confirmed_transaction(&prevout.txid)
        .ok_or_else(|| GuardError::UnresolvedLookup(format!("reward transaction {}", prevout.txid)))?;
    let guarded_output = reward_tx
        .outputs
        .get(prevout.index as usize)
        .ok_or(GuardError::StructuralMismatch(
            "spent output index out of range",
        ))?;

    let SpendCondition::GuardedOneOfTwo {
        keys: [destination, guard_authority],
        metadata,
    } = &guarded_output.condition
    else {
        return Err(GuardError::StructuralMismatch(
            "spent output is not a guarded 1-of-2",
        ));
    };

    let height_chunk = metadata
        .get(2)
        .ok_or(GuardError::MalformedMetadata("missing recorded height"))?;
    let recorded_height = decode_height_le(&height_chunk.as_bytes())
        .ok_or(GuardError::MalformedMetadata("recorded height chunk too long"))?;
    let branch_id = consensus.active_branch_id(recorded_height);

    let witness = input.witness.as_ref().ok_or(GuardError::SignatureInvalid)?;
    let branch = if witness.signer == *destination {
        SignatureBranch::Destination
    } else if witness.signer == *guard_authority {
        SignatureBranch::GuardAuthority
    } else {
        return Err(GuardError::SignatureInvalid);
    };

    if !sighash::verify_input(spending_tx, input_index, guarded_output, branch_id) {
        return Err(GuardError::SignatureInvalid);
    }

    match branch {
        SignatureBranch::Destination => {
            tracing::debug!(prevout = %prevout.txid, "guarded output spent by owner");
            Ok(SpendAuthorization::Owner)
        }
        SignatureBranch::GuardAuthority => {
            let cheat_tx = decode_evidence(spending_tx)?;
            let verdict = detect_matching_stake(
                chain,
                consensus,
                &reward_tx,
                prevout.index as usize,
                &cheat_tx,
            );
            if verdict == StakeMatch::Cheating {
                tracing::warn!(
                    reward = %prevout.txid,
                    cheat = %cheat_tx.txid(),
                    "guarded output slashed with cheat evidence"
                );
                Ok(SpendAuthorization::Slashing)
            } else {
                tracing::warn!(
                    reward = %prevout.txid,
                    ?verdict,
                    "guard-key spend with non-proving evidence rejected"
                );
                Err(GuardError::AmbiguousCheatClaim)
            }
        }
    }
}

/// Decode the competing stake transaction from the spending transaction's
/// trailing evidence output.
fn decode_evidence(spending_tx: &Transaction) -> Result<Transaction, GuardError> {
    let chunks = spending_tx
        .trailing_data_chunks()
        .ok_or(GuardError::StructuralMismatch(
            "slashing spend carries no evidence output",
        ))?;
    if chunks.len() != 2 {
        return Err(GuardError::MalformedMetadata(
            "evidence must be exactly two chunks",
        ));
    }
    let tag = chunks[0].as_bytes();
    if tag.len() != 1 || tag[0] != CHEAT_EVIDENCE_TAG {
        return Err(GuardError::MalformedMetadata("wrong evidence type tag"));
    }
    Transaction::from_bytes(&chunks[1].as_bytes()).map_err(|_| GuardError::EvidenceCodec)
}
