use thiserror::Error;

/// Errors raised while building piano model types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("expected {expected} note names, got {actual}")]
    NoteNameCount { expected: usize, actual: usize },
    #[error("duplicate note name {0:?}")]
    DuplicateNoteName(String),
    #[error("key slot {0} out of range")]
    SlotOutOfRange(usize),
}
