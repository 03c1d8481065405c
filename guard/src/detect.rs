//! Matching-stake detection — the cheating verdict.
//!
//! Given a guarded coinbase reward and a candidate stake transaction, decide
//! whether the candidate proves the staker reused the same coin toward a
//! different fork. The verdict must be recomputable by anyone from on-chain
//! data alone, and the same procedure runs off-chain (building a slashing
//! transaction) and on-chain (authorizing it), so both reach the same answer.

use crate::builder::coin_fingerprint;
use crate::codec::decode_height_le;
use crate::validate::validate_stake_transaction;
use stakeproof_chain::ChainView;
use stakeproof_tx::{SpendCondition, Transaction};
use stakeproof_types::{BlockHash, ConsensusParams};

/// The relation between a guarded reward output and a candidate stake
/// transaction over the same chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StakeMatch {
    /// No provable relation: different coin, invalid candidate, or an
    /// ambiguous height/hash combination. Never grounds for slashing.
    Distinct,
    /// The identical claim re-submitted: same coin, same target height,
    /// same previous block hash. Legitimate, not cheating.
    Rebroadcast,
    /// The same coin staked toward a different, height-compatible fork.
    Cheating,
}

impl StakeMatch {
    /// Whether the candidate references the same source coin as the reward.
    pub fn is_match(self) -> bool {
        matches!(self, Self::Rebroadcast | Self::Cheating)
    }

    pub fn is_cheating(self) -> bool {
        self == Self::Cheating
    }
}

/// Decide whether `candidate` proves cheating against the guarded output at
/// `reward_index` of `reward_tx`.
///
/// Conservative by construction: every malformed, unresolved, or ambiguous
/// input collapses to [`StakeMatch::Distinct`]. A cheat is only declared
/// when the fingerprints agree, the previous-block hashes differ, and the
/// candidate's target height is at or beyond the rewarded claim's height — a
/// stale, already-superseded competing stake is not proof.
pub fn detect_matching_stake(
    chain: &dyn ChainView,
    consensus: &ConsensusParams,
    reward_tx: &Transaction,
    reward_index: usize,
    candidate: &Transaction,
) -> StakeMatch {
    // Only coinbase rewards are guarded.
    if !reward_tx.is_coinbase() {
        return StakeMatch::Distinct;
    }

    // Structural and age validity suffice here; the signature is checked
    // where it matters (the candidate itself competing for a block).
    let Ok(validated) = validate_stake_transaction(chain, consensus, candidate, false) else {
        return StakeMatch::Distinct;
    };

    let Some(reward_output) = reward_tx.outputs.get(reward_index) else {
        return StakeMatch::Distinct;
    };
    let SpendCondition::GuardedOneOfTwo { metadata, .. } = &reward_output.condition else {
        return StakeMatch::Distinct;
    };
    if metadata.len() < 3 {
        return StakeMatch::Distinct;
    }

    let recorded_fingerprint = metadata[0].as_bytes();
    let Some(recorded_prev) = BlockHash::from_slice(&metadata[1].as_bytes()) else {
        return StakeMatch::Distinct;
    };
    let Some(recorded_height) = decode_height_le(&metadata[2].as_bytes()) else {
        return StakeMatch::Distinct;
    };

    let candidate_fingerprint = coin_fingerprint(&candidate.inputs[0].prevout);
    if recorded_fingerprint != candidate_fingerprint {
        return StakeMatch::Distinct;
    }

    let params = &validated.params;
    if params.prev_block_hash != recorded_prev && params.target_height >= recorded_height {
        StakeMatch::Cheating
    } else if params.target_height == recorded_height {
        // Equal heights with the cheating branch excluded means the previous
        // hashes were equal too: the same claim again.
        StakeMatch::Rebroadcast
    } else {
        StakeMatch::Distinct
    }
}
