//! Blake2b-256 hashing with explicit domain separation.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute a domain-separated Blake2b-256 hash over a sequence of parts.
///
/// The domain tag is absorbed first, length-prefixed, so distinct tags yield
/// independent hash functions and part boundaries cannot be shifted between
/// tag and payload. Every consensus-relevant hash in the protocol (coin
/// fingerprints, signature hashes) goes through here with its own tag;
/// builder and detector computing the same tagged hash over the same parts
/// are bit-identical by construction.
pub fn tagged_hash(domain: &[u8], parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update((domain.len() as u64).to_le_bytes());
    hasher.update(domain);
    for part in parts {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}
