use thiserror::Error;

/// Precondition violations in input components.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("mode {mode} out of range (0..{count})")]
    ModeOutOfRange { mode: usize, count: usize },
    #[error("at least one mode region is required")]
    NoModes,
}
