// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GrammarError>;

/// Everything the trainer can reject. Selection errors are contract
/// violations by the caller and leave the engine untouched.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("noun index {index} out of range (catalog has {len})")]
    NounOutOfRange { index: usize, len: usize },

    #[error("location index {index} out of range (catalog has {len})")]
    LocationOutOfRange { index: usize, len: usize },

    #[error("pronoun index {index} out of range (table has {len})")]
    PronounOutOfRange { index: usize, len: usize },

    #[error("numeral value {0} out of range (expected 1..=10)")]
    NumeralOutOfRange(u32),

    #[error("unknown template '{0}'")]
    UnknownTemplate(String),

    #[error("unknown slot '{0}'")]
    UnknownSlot(String),

    #[error("unknown mode '{0}'")]
    UnknownMode(String),

    #[error("persistence failed: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("ledger encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("malformed command: {0}")]
    Protocol(#[from] serde_json::Error),
}
