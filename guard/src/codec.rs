//! Stake-metadata codec — the on-chain format of a stake claim.
//!
//! A stake transaction's trailing unspendable output carries 4 or 5 chunks:
//!
//! 1. type tag (1 byte, [`STAKE_PARAMS_TAG`])
//! 2. source block height, little-endian, ≤4 bytes
//! 3. target block height, little-endian, ≤4 bytes
//! 4. previous block hash (32 bytes)
//! 5. delegate public key (32 bytes) — optional; absent means the staking
//!    key is the source coin's own key
//!
//! This layout is consensus-critical and must remain byte-stable.

use crate::error::GuardError;
use stakeproof_crypto::parse_public_key;
use stakeproof_tx::chunk::{total_len, ScriptChunk, MAX_DATA_CARRIER_BYTES};
use stakeproof_types::{BlockHash, PublicKey};

/// Type tag of stake-claim metadata.
pub const STAKE_PARAMS_TAG: u8 = 0x01;

/// Type tag of attached cheat evidence.
pub const CHEAT_EVIDENCE_TAG: u8 = 0x02;

/// Minimum chunk count of a stake claim (no delegate).
pub const STAKE_MIN_CHUNKS: usize = 4;

/// Maximum chunk count of a stake claim (with delegate).
pub const STAKE_MAX_CHUNKS: usize = 5;

/// A decoded stake claim.
///
/// Only ever constructed by a successful [`decode_stake_chunks`] (or by a
/// wallet about to encode one); a failed decode is a [`GuardError`], never a
/// partially-filled value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StakeParams {
    /// Height of the block confirming the staked source coin.
    pub source_height: u32,
    /// Height of the block this stake claims the right to produce.
    pub target_height: u32,
    /// Hash of the block preceding the claimed block — the fork claim.
    pub prev_block_hash: BlockHash,
    /// Key authorized to claim the reward, when it differs from the source
    /// coin's own key.
    pub delegate: Option<PublicKey>,
}

/// Reconstruct a height from a ≤4-byte little-endian chunk.
///
/// Short chunks zero-extend the missing high-order bytes. Accumulation is an
/// explicit shift-or over the bytes in big-endian order (the little-endian
/// chunk iterated back to front).
pub fn decode_height_le(bytes: &[u8]) -> Option<u32> {
    if bytes.len() > 4 {
        return None;
    }
    let mut height: u32 = 0;
    for &byte in bytes.iter().rev() {
        height = (height << 8) | u32::from(byte);
    }
    Some(height)
}

/// Encode a height as a 4-byte little-endian chunk.
pub fn encode_height_le(height: u32) -> [u8; 4] {
    height.to_le_bytes()
}

/// Decode stake-claim metadata from its chunk sequence.
///
/// Accepts literal-push and small-integer chunks uniformly (both normalize
/// through [`ScriptChunk::as_bytes`]). Never panics; every structural
/// violation is a typed error.
pub fn decode_stake_chunks(chunks: &[ScriptChunk]) -> Result<StakeParams, GuardError> {
    if chunks.len() < STAKE_MIN_CHUNKS || chunks.len() > STAKE_MAX_CHUNKS {
        return Err(GuardError::MalformedMetadata(
            "expected 4 or 5 metadata chunks",
        ));
    }
    if chunks.iter().any(|c| !c.is_well_formed()) {
        return Err(GuardError::MalformedMetadata(
            "oversized or out-of-range chunk",
        ));
    }
    if total_len(chunks) > MAX_DATA_CARRIER_BYTES {
        return Err(GuardError::MalformedMetadata(
            "metadata exceeds data-carrier limit",
        ));
    }

    let tag = chunks[0].as_bytes();
    if tag.len() != 1 || tag[0] != STAKE_PARAMS_TAG {
        return Err(GuardError::MalformedMetadata("wrong type tag"));
    }

    let source_height = decode_height_le(&chunks[1].as_bytes())
        .ok_or(GuardError::MalformedMetadata("source height chunk too long"))?;
    let target_height = decode_height_le(&chunks[2].as_bytes())
        .ok_or(GuardError::MalformedMetadata("target height chunk too long"))?;

    let prev_block_hash = BlockHash::from_slice(&chunks[3].as_bytes())
        .ok_or(GuardError::MalformedMetadata("prev hash must be 32 bytes"))?;

    let delegate = if chunks.len() == STAKE_MAX_CHUNKS {
        let key = parse_public_key(&chunks[4].as_bytes())
            .ok_or(GuardError::MalformedMetadata("invalid delegate key"))?;
        Some(key)
    } else {
        None
    };

    // A genesis-height source can never stake; zero doubles as the
    // uninitialized value in older wire formats, so it is rejected outright.
    if source_height == 0 {
        return Err(GuardError::MalformedMetadata("zero source height"));
    }

    Ok(StakeParams {
        source_height,
        target_height,
        prev_block_hash,
        delegate,
    })
}

/// Encode a stake claim as its chunk sequence — the inverse of
/// [`decode_stake_chunks`]. Always 4 chunks, plus a 5th iff a delegate key
/// is present.
pub fn encode_stake_params(params: &StakeParams) -> Vec<ScriptChunk> {
    let mut chunks = vec![
        ScriptChunk::push(vec![STAKE_PARAMS_TAG]),
        ScriptChunk::push(encode_height_le(params.source_height).to_vec()),
        ScriptChunk::push(encode_height_le(params.target_height).to_vec()),
        ScriptChunk::push(params.prev_block_hash.as_bytes().to_vec()),
    ];
    if let Some(delegate) = &params.delegate {
        chunks.push(ScriptChunk::push(delegate.as_bytes().to_vec()));
    }
    chunks
}
