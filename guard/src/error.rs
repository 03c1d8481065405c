use thiserror::Error;

/// Every way a stake claim, guarded output, or slashing spend can be
/// rejected. All variants are local, non-fatal outcomes; nothing in this
/// crate panics on adversarial input. A rejected spend simply fails
/// verification for that transaction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GuardError {
    /// Stake metadata chunks have the wrong count, sizes, or tag.
    #[error("malformed stake metadata: {0}")]
    MalformedMetadata(&'static str),

    /// The transaction does not have the required input/output shape.
    #[error("structural mismatch: {0}")]
    StructuralMismatch(&'static str),

    /// A referenced source transaction or block is not in the chain view.
    /// Retrying is pointless until external state changes (e.g. a reorg).
    #[error("unresolved chain lookup: {0}")]
    UnresolvedLookup(String),

    /// The staked coin is younger than the consensus minimum.
    #[error("stake age {age} below minimum {minimum}")]
    AgeViolation { age: u32, minimum: u32 },

    /// The spending witness failed signature verification.
    #[error("stake spend signature rejected")]
    SignatureInvalid,

    /// The claimed cheat does not prove cheating (fingerprint, height, or
    /// hash combination is ambiguous). Ambiguity is never treated as proof.
    #[error("claimed cheat is not provable")]
    AmbiguousCheatClaim,

    /// Attached cheat evidence could not be serialized or deserialized.
    #[error("cheat evidence codec failure")]
    EvidenceCodec,
}
