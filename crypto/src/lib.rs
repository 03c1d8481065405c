//! Hashing and signing primitives for the stakeproof protocol.
//!
//! All protocol hashes are Blake2b-256 behind an explicit domain tag, so
//! values hashed for one purpose can never collide with values hashed for
//! another. Signing is Ed25519 via `ed25519-dalek`.

pub mod hash;
pub mod keys;
pub mod sign;

pub use hash::{blake2b_256, tagged_hash};
pub use keys::{generate_keypair, key_hash, keypair_from_seed, parse_public_key};
pub use sign::{sign_message, verify_signature};
