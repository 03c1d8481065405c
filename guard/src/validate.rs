//! Stake-transaction validation.
//!
//! Validation is two-phase: a cheap structural pre-check with no chain
//! lookups ([`extract_stake_params`]), then the chain-backed semantic check
//! ([`validate_stake_transaction`]). The semantic check only proves the
//! claim was *ever* valid — a spent source coin still validates, which is
//! exactly what lets a fork's stake transaction serve as cheat evidence.

use crate::codec::{decode_stake_chunks, StakeParams};
use crate::error::GuardError;
use stakeproof_chain::ChainView;
use stakeproof_tx::{sighash, SpendCondition, Transaction};
use stakeproof_types::{ConsensusParams, PublicKey};

/// A stake claim that passed full validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedStake {
    /// The decoded claim, exactly as carried on chain.
    pub params: StakeParams,
    /// The effective staking key: the embedded delegate if present,
    /// otherwise the source coin's own key.
    pub staking_key: PublicKey,
}

/// Structural pre-check: shape and metadata only, no chain lookups.
///
/// A well-formed stake transaction has exactly one input and two outputs;
/// output 0 carries the staked value, output 1 is the unspendable metadata
/// carrier.
pub fn extract_stake_params(stake_tx: &Transaction) -> Result<StakeParams, GuardError> {
    if stake_tx.inputs.len() != 1 || stake_tx.outputs.len() != 2 {
        return Err(GuardError::StructuralMismatch(
            "stake transaction must have exactly one input and two outputs",
        ));
    }
    if stake_tx.outputs[0].value.is_zero() {
        return Err(GuardError::StructuralMismatch(
            "stake output must carry positive value",
        ));
    }
    let chunks = stake_tx.outputs[1]
        .condition
        .data_chunks()
        .ok_or(GuardError::StructuralMismatch(
            "second output must be an unspendable data carrier",
        ))?;
    decode_stake_chunks(chunks)
}

/// Full validation of a candidate stake transaction.
///
/// On top of the structural pre-check: the source coin must be confirmed at
/// exactly the claimed source height, aged at least `min_stake_age` blocks
/// relative to the claimed target, and held under a pay-to-key or
/// pay-to-key-hash condition. With `check_signature`, the input witness is
/// verified against the source output under the branch id active at the
/// *target* height — epochs are selected by the claimed block, not the
/// source coin.
pub fn validate_stake_transaction(
    chain: &dyn ChainView,
    consensus: &ConsensusParams,
    stake_tx: &Transaction,
    check_signature: bool,
) -> Result<ValidatedStake, GuardError> {
    let params = extract_stake_params(stake_tx)?;

    let prevout = stake_tx.inputs[0].prevout;
    let (source_tx, block_hash) = chain
        .confirmed_transaction(&prevout.txid)
        .ok_or_else(|| GuardError::UnresolvedLookup(format!("source transaction {}", prevout.txid)))?;
    let index_entry = chain
        .block_index(&block_hash)
        .ok_or_else(|| GuardError::UnresolvedLookup(format!("block {}", block_hash)))?;

    let source_output = source_tx
        .outputs
        .get(prevout.index as usize)
        .ok_or(GuardError::StructuralMismatch(
            "source output index out of range",
        ))?;

    // An attacker must not be able to claim an arbitrary source height for
    // a real coin; the claim must name the confirming block's height exactly.
    if params.source_height != index_entry.height {
        return Err(GuardError::StructuralMismatch(
            "claimed source height does not match confirming block",
        ));
    }

    let age = params.target_height.saturating_sub(params.source_height);
    if age < consensus.min_stake_age {
        return Err(GuardError::AgeViolation {
            age,
            minimum: consensus.min_stake_age,
        });
    }

    let staking_key = match &source_output.condition {
        SpendCondition::PayToKey(key) => params.delegate.unwrap_or(*key),
        SpendCondition::PayToKeyHash(_) => params.delegate.ok_or(GuardError::StructuralMismatch(
            "pay-to-key-hash stake requires an embedded delegate key",
        ))?,
        _ => {
            return Err(GuardError::StructuralMismatch(
                "source output is not pay-to-key or pay-to-key-hash",
            ))
        }
    };

    if check_signature {
        let branch_id = consensus.active_branch_id(params.target_height);
        if !sighash::verify_input(stake_tx, 0, source_output, branch_id) {
            return Err(GuardError::SignatureInvalid);
        }
    }

    Ok(ValidatedStake {
        params,
        staking_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{fixture_at_height, stake_tx, StakeTxSpec};
    use stakeproof_crypto::{key_hash, keypair_from_seed};
    use stakeproof_types::BlockHash;

    #[test]
    fn valid_signed_stake_passes() {
        let fix = fixture_at_height(100);
        let tx = stake_tx(&fix, StakeTxSpec::targeting(260).signed());
        let validated = validate_stake_transaction(&fix.chain, &fix.consensus, &tx, true).unwrap();
        assert_eq!(validated.params.source_height, 100);
        assert_eq!(validated.params.target_height, 260);
        assert_eq!(validated.staking_key, fix.owner_public());
    }

    #[test]
    fn signature_check_monotonic() {
        // success with the signature check implies success without it
        let fix = fixture_at_height(100);
        let tx = stake_tx(&fix, StakeTxSpec::targeting(260).signed());
        assert!(validate_stake_transaction(&fix.chain, &fix.consensus, &tx, true).is_ok());
        assert!(validate_stake_transaction(&fix.chain, &fix.consensus, &tx, false).is_ok());
    }

    #[test]
    fn unsigned_stake_fails_only_with_signature_check() {
        let fix = fixture_at_height(100);
        let tx = stake_tx(&fix, StakeTxSpec::targeting(260));
        assert!(validate_stake_transaction(&fix.chain, &fix.consensus, &tx, false).is_ok());
        assert_eq!(
            validate_stake_transaction(&fix.chain, &fix.consensus, &tx, true),
            Err(GuardError::SignatureInvalid)
        );
    }

    #[test]
    fn wrong_shape_rejected() {
        let fix = fixture_at_height(100);
        let mut tx = stake_tx(&fix, StakeTxSpec::targeting(260));
        tx.outputs.pop();
        assert!(matches!(
            validate_stake_transaction(&fix.chain, &fix.consensus, &tx, false),
            Err(GuardError::StructuralMismatch(_))
        ));
    }

    #[test]
    fn unknown_source_is_unresolved_lookup() {
        let fix = fixture_at_height(100);
        let other = fixture_at_height(100);
        // stake built against a coin the first chain has never seen
        let tx = stake_tx(&other, StakeTxSpec::targeting(260));
        assert!(matches!(
            validate_stake_transaction(&fix.chain, &fix.consensus, &tx, false),
            Err(GuardError::UnresolvedLookup(_))
        ));
    }

    #[test]
    fn wrong_source_height_rejected() {
        let fix = fixture_at_height(100);
        let tx = stake_tx(&fix, StakeTxSpec::targeting(260).claiming_source(101));
        assert_eq!(
            validate_stake_transaction(&fix.chain, &fix.consensus, &tx, false),
            Err(GuardError::StructuralMismatch(
                "claimed source height does not match confirming block"
            ))
        );
    }

    #[test]
    fn underaged_stake_rejected() {
        let fix = fixture_at_height(100);
        // min_stake_age is 150; 100 -> 249 is one block short
        let tx = stake_tx(&fix, StakeTxSpec::targeting(249));
        assert_eq!(
            validate_stake_transaction(&fix.chain, &fix.consensus, &tx, false),
            Err(GuardError::AgeViolation {
                age: 149,
                minimum: 150
            })
        );
        // exactly at the boundary passes
        let tx = stake_tx(&fix, StakeTxSpec::targeting(250));
        assert!(validate_stake_transaction(&fix.chain, &fix.consensus, &tx, false).is_ok());
    }

    #[test]
    fn target_below_source_is_age_violation() {
        let fix = fixture_at_height(100);
        let tx = stake_tx(&fix, StakeTxSpec::targeting(50));
        assert!(matches!(
            validate_stake_transaction(&fix.chain, &fix.consensus, &tx, false),
            Err(GuardError::AgeViolation { age: 0, .. })
        ));
    }

    #[test]
    fn delegate_overrides_staking_key() {
        let fix = fixture_at_height(100);
        let delegate = keypair_from_seed(&[77u8; 32]).public;
        let tx = stake_tx(&fix, StakeTxSpec::targeting(260).with_delegate(delegate).signed());
        let validated = validate_stake_transaction(&fix.chain, &fix.consensus, &tx, true).unwrap();
        assert_eq!(validated.staking_key, delegate);
    }

    #[test]
    fn key_hash_source_requires_delegate() {
        let mut fix = fixture_at_height(100);
        fix.convert_source_to_key_hash();
        let tx = stake_tx(&fix, StakeTxSpec::targeting(260).signed());
        assert!(matches!(
            validate_stake_transaction(&fix.chain, &fix.consensus, &tx, false),
            Err(GuardError::StructuralMismatch(_))
        ));

        let delegate = keypair_from_seed(&[78u8; 32]).public;
        let tx = stake_tx(&fix, StakeTxSpec::targeting(260).with_delegate(delegate).signed());
        let validated = validate_stake_transaction(&fix.chain, &fix.consensus, &tx, true).unwrap();
        assert_eq!(validated.staking_key, delegate);
        // the owner key still hashes to the source condition
        assert_eq!(
            fix.source_output().condition,
            SpendCondition::PayToKeyHash(key_hash(&fix.owner_public()))
        );
    }

    #[test]
    fn guarded_source_condition_rejected() {
        let mut fix = fixture_at_height(100);
        fix.convert_source_to_guarded();
        let tx = stake_tx(&fix, StakeTxSpec::targeting(260));
        assert_eq!(
            validate_stake_transaction(&fix.chain, &fix.consensus, &tx, false),
            Err(GuardError::StructuralMismatch(
                "source output is not pay-to-key or pay-to-key-hash"
            ))
        );
    }

    #[test]
    fn signature_under_wrong_branch_rejected() {
        let fix = fixture_at_height(100);
        let mut tx = stake_tx(&fix, StakeTxSpec::targeting(260));
        // sign under a branch id no epoch schedule produces
        let src = fix.source_output();
        stakeproof_tx::sighash::sign_input(&mut tx, 0, &src, 0xdead, &fix.owner).unwrap();
        assert_eq!(
            validate_stake_transaction(&fix.chain, &fix.consensus, &tx, true),
            Err(GuardError::SignatureInvalid)
        );
    }

    #[test]
    fn metadata_decode_failure_surfaces() {
        let fix = fixture_at_height(100);
        let mut tx = stake_tx(&fix, StakeTxSpec::targeting(260));
        tx.outputs[1].condition = SpendCondition::DataCarrier(vec![]);
        assert!(matches!(
            extract_stake_params(&tx),
            Err(GuardError::MalformedMetadata(_))
        ));
    }

    #[test]
    fn prev_hash_carried_through() {
        let fix = fixture_at_height(100);
        let prev = BlockHash::new([0x42; 32]);
        let tx = stake_tx(&fix, StakeTxSpec::targeting(260).on_fork(prev));
        let validated = validate_stake_transaction(&fix.chain, &fix.consensus, &tx, false).unwrap();
        assert_eq!(validated.params.prev_block_hash, prev);
    }
}
