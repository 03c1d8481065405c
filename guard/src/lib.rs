//! Nothing-at-stake fraud proofs for guarded coinbase rewards.
//!
//! Proof-of-stake block production costs nothing per fork, so a staker can
//! reuse the same coin to stake on every fork at once. This crate makes that
//! provable and punishable: staking rewards are paid into a guarded 1-of-2
//! output ([`builder`]) recording which coin staked and toward which fork;
//! anyone who later observes the same coin staked toward a different fork
//! can build a slashing spend carrying the competing transaction as evidence
//! ([`evidence`]), and validators authorize that spend by recomputing the
//! cheating verdict from the evidence alone ([`authorize`], [`detect`]).

pub mod authorize;
pub mod builder;
pub mod codec;
pub mod detect;
pub mod error;
pub mod evidence;
pub mod validate;

#[cfg(test)]
pub(crate) mod testutil;

pub use authorize::{authorize_guarded_spend, SpendAuthorization};
pub use builder::{coin_fingerprint, make_guarded_output, COIN_FINGERPRINT_DOMAIN};
pub use codec::{
    decode_height_le, decode_stake_chunks, encode_height_le, encode_stake_params, StakeParams,
    CHEAT_EVIDENCE_TAG, STAKE_PARAMS_TAG,
};
pub use detect::{detect_matching_stake, StakeMatch};
pub use error::GuardError;
pub use evidence::attach_cheat_evidence;
pub use validate::{extract_stake_params, validate_stake_transaction, ValidatedStake};
