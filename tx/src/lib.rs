//! Transaction model for the stakeproof protocol.
//!
//! Defines transactions, inputs/outputs, spend conditions, the byte-chunk
//! metadata abstraction, canonical `bincode` wire encoding, and input
//! signature hashing. Consensus code above this crate never touches raw
//! script bytes; conditions and chunks are the only currency.

pub mod chunk;
pub mod condition;
pub mod error;
pub mod sighash;
pub mod transaction;

pub use chunk::{ScriptChunk, MAX_DATA_CARRIER_BYTES, MAX_PUSH_BYTES};
pub use condition::SpendCondition;
pub use error::TxError;
pub use transaction::{Transaction, TxInput, TxOutput, Witness};
