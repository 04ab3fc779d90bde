//! Error types for sequence editing, prediction and storage.
//!
//! Every variant is recoverable: the session rejects the input, keeps its
//! previous state and reports the error through the notifier.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PredictorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictorError {
    /// Input contains a character outside {T, D, E}.
    #[error("Invalid input {input:?}: '{offending}' is not one of T, D, E")]
    InvalidAlphabet { input: String, offending: char },

    /// Window size is not a positive integer.
    #[error("Please enter a valid positive number! (got {0:?})")]
    InvalidWindowSize(String),

    /// Query length differs from the configured window size.
    #[error("Please enter exactly {expected} characters for the search! (got {actual})")]
    InvalidQueryLength { expected: usize, actual: usize },

    /// Reading from or writing to the key-value store failed.
    #[error("Storage error: {0}")]
    StorageFailure(String),

    /// The sequence was edited while edit mode was off.
    #[error("Editing is disabled, press \"Make Correction\" first")]
    EditingDisabled,
}

impl PredictorError {
    /// Create an InvalidAlphabet error.
    #[inline]
    pub fn invalid_alphabet(input: &str, offending: char) -> Self {
        Self::InvalidAlphabet {
            input: input.to_string(),
            offending,
        }
    }

    /// Create a StorageFailure from anything printable.
    #[inline]
    pub fn storage<E: std::fmt::Display>(err: E) -> Self {
        Self::StorageFailure(err.to_string())
    }

    /// Message shown to the user, without the diagnostic suffix.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidAlphabet { .. } => "Only the characters T, D and E are allowed!".to_string(),
            Self::InvalidWindowSize(_) => "Please enter a valid positive number!".to_string(),
            Self::InvalidQueryLength { expected, .. } => {
                format!("Please enter exactly {} characters for the search!", expected)
            }
            Self::StorageFailure(_) => "Could not access storage, changes are kept for this session only.".to_string(),
            Self::EditingDisabled => "Press \"Make Correction\" before editing the sequence.".to_string(),
        }
    }
}
