//! Fundamental types for the stakeproof protocol.
//!
//! This crate defines the value types shared by every other crate in the
//! workspace: transaction and block hashes, outpoints, keys and signatures,
//! amounts, and the consensus parameter set.

pub mod amount;
pub mod hash;
pub mod keys;
pub mod outpoint;
pub mod params;

pub use amount::Amount;
pub use hash::{BlockHash, TxId};
pub use keys::{KeyHash, KeyPair, PrivateKey, PublicKey, Signature};
pub use outpoint::OutPoint;
pub use params::{ConsensusParams, NetworkUpgrade};
