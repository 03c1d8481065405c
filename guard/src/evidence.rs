//! Cheat-evidence attachment.
//!
//! A slashing spend of a guarded output must carry the competing stake
//! transaction on-chain, so validators can recompute the cheating verdict
//! themselves. The evidence rides in a trailing unspendable output:
//! `[CHEAT_EVIDENCE_TAG, serialized competing transaction]`.

use crate::codec::CHEAT_EVIDENCE_TAG;
use crate::detect::{detect_matching_stake, StakeMatch};
use crate::error::GuardError;
use stakeproof_chain::ChainView;
use stakeproof_tx::{ScriptChunk, SpendCondition, Transaction, TxOutput};
use stakeproof_types::{Amount, ConsensusParams};

/// Attach `cheat_tx` as evidence to `spending_tx`, which spends the guarded
/// output at `reward_index` of `reward_tx`.
///
/// The verdict is recomputed here: evidence is only ever attached for a
/// provable cheat. A rebroadcast or unrelated candidate leaves the spending
/// transaction untouched and returns [`GuardError::AmbiguousCheatClaim`].
///
/// The signature hash commits to outputs, so call this *before* signing the
/// slashing input.
pub fn attach_cheat_evidence(
    spending_tx: &mut Transaction,
    chain: &dyn ChainView,
    consensus: &ConsensusParams,
    reward_tx: &Transaction,
    reward_index: usize,
    cheat_tx: &Transaction,
) -> Result<(), GuardError> {
    let verdict = detect_matching_stake(chain, consensus, reward_tx, reward_index, cheat_tx);
    if verdict != StakeMatch::Cheating {
        return Err(GuardError::AmbiguousCheatClaim);
    }

    let bytes = cheat_tx.to_bytes().map_err(|_| GuardError::EvidenceCodec)?;
    spending_tx.outputs.push(TxOutput {
        value: Amount::ZERO,
        condition: SpendCondition::DataCarrier(vec![
            ScriptChunk::push(vec![CHEAT_EVIDENCE_TAG]),
            ScriptChunk::push(bytes),
        ]),
    });
    Ok(())
}
