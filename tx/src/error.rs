use thiserror::Error;

#[derive(Debug, Error)]
pub enum TxError {
    #[error("transaction serialization failed: {0}")]
    Serialize(String),

    #[error("transaction deserialization failed: {0}")]
    Deserialize(String),

    #[error("input index {0} out of range")]
    InputOutOfRange(usize),

    #[error("input carries no witness")]
    MissingWitness,
}
