//! Ed25519 key generation and key-derived values.

use crate::hash::blake2b_256;
use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use stakeproof_types::{KeyHash, KeyPair, PrivateKey, PublicKey};

/// Generate a new Ed25519 key pair from a secure random source.
pub fn generate_keypair() -> KeyPair {
    let signing_key = SigningKey::generate(&mut OsRng);
    KeyPair {
        public: PublicKey(signing_key.verifying_key().to_bytes()),
        private: PrivateKey(signing_key.to_bytes()),
    }
}

/// Derive a key pair from a 32-byte seed (deterministic).
pub fn keypair_from_seed(seed: &[u8; 32]) -> KeyPair {
    let signing_key = SigningKey::from_bytes(seed);
    KeyPair {
        public: PublicKey(signing_key.verifying_key().to_bytes()),
        private: PrivateKey(signing_key.to_bytes()),
    }
}

/// Parse raw bytes as a public key, validating the curve point.
///
/// Returns `None` unless the slice is exactly 32 bytes and decompresses to a
/// valid Edwards point. Stake metadata embeds delegate keys as raw bytes, so
/// this is the gate that keeps garbage out of the key algebra.
pub fn parse_public_key(bytes: &[u8]) -> Option<PublicKey> {
    let arr: [u8; 32] = bytes.try_into().ok()?;
    VerifyingKey::from_bytes(&arr).ok()?;
    Some(PublicKey(arr))
}

/// Hash a public key for use in a pay-to-key-hash spend condition.
pub fn key_hash(public_key: &PublicKey) -> KeyHash {
    KeyHash(blake2b_256(public_key.as_bytes()))
}
