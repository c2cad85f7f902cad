//! Crate-level error type and `Result` alias for structured error handling.
//! Every variant except `InternalInvariant` reports a problem with the input;
//! `InternalInvariant` reports a defect in the classifier itself.
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("null is not allowed as an input, only I, V, X, L, C, D, M are allowed")]
    NullInput,

    #[error("an empty string is not allowed")]
    EmptyInput,

    #[error("invalid character '{character}' at position {position}: only I, V, X, L, C, D, M are allowed")]
    InvalidCharacter { character: char, position: usize },

    #[error("{input}: Roman numerals cannot repeat more than three times")]
    TooManyRepeats { input: String },

    #[error("{input}: Roman numerals V, L, and D can not be repeated")]
    NonRepeatableSymbolRepeated { input: String },

    #[error("{input}: invalid Roman numeral subtraction")]
    IllegalSubtraction { input: String },

    #[error("{input}: numeric value {value} is above maximum allowed: 3999")]
    ValueTooLarge { input: String, value: u32 },

    #[error("internal invariant violated while processing '{input}': {detail}")]
    InternalInvariant { input: String, detail: String },
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InternalInvariant { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }

    pub fn is_internal(&self) -> bool {
        self.category() == ErrorCategory::Internal
    }
}
