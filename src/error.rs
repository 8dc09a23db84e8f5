//! Error types for the vocabulary test engine.

use thiserror::Error;

/// Reasons a test cannot start.
///
/// These are the only fallible conditions in the engine; everything after a
/// successful start degrades softly instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("no question types enabled")]
    NoTypesEnabled,

    #[error("no words in scope")]
    NoWords,

    #[error("test already started")]
    AlreadyStarted,
}
