//! The byte-chunk abstraction for metadata carried in output scripts.
//!
//! Data outputs carry an ordered sequence of chunks. At the script layer a
//! chunk is either a literal push (up to [`MAX_PUSH_BYTES`]) or one of the
//! small-integer opcodes standing in for a single byte 1–16. Everything above
//! the script layer sees only [`ScriptChunk`] and its normalized bytes, so
//! codecs stay opcode-unaware.

use serde::{Deserialize, Serialize};

/// Maximum size of a single literal push.
pub const MAX_PUSH_BYTES: usize = 520;

/// Maximum total metadata bytes a data output may carry.
pub const MAX_DATA_CARRIER_BYTES: usize = 520;

/// One metadata chunk of a data-carrying output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptChunk {
    /// A literal byte push.
    Push(Vec<u8>),
    /// A small-integer opcode, equivalent to the single byte 1–16.
    SmallInt(u8),
}

impl ScriptChunk {
    pub fn push(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Push(bytes.into())
    }

    /// A small-integer chunk; `None` outside the opcode range 1–16.
    pub fn small_int(value: u8) -> Option<Self> {
        (1..=16).contains(&value).then_some(Self::SmallInt(value))
    }

    /// The chunk normalized to its byte content.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Self::Push(bytes) => bytes.clone(),
            Self::SmallInt(n) => vec![*n],
        }
    }

    /// Byte length after normalization.
    pub fn len(&self) -> usize {
        match self {
            Self::Push(bytes) => bytes.len(),
            Self::SmallInt(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the chunk is representable at the script layer at all.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::Push(bytes) => bytes.len() <= MAX_PUSH_BYTES,
            Self::SmallInt(n) => (1..=16).contains(n),
        }
    }
}

/// Total normalized byte length of a chunk sequence.
pub fn total_len(chunks: &[ScriptChunk]) -> usize {
    chunks.iter().map(ScriptChunk::len).sum()
}
