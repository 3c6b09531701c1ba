//! Core error types for SORTLINE.

/// Core result type
pub type CoreResult<T> = Result<T, CoreError>;

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Algorithm identifier is not in the catalog
    #[error("Unknown algorithm: {name}")]
    UnknownAlgorithm {
        /// Identifier that failed the lookup
        name: String,
    },

    /// Invalid encoding
    #[error("Invalid encoding: {reason}")]
    InvalidEncoding {
        /// Decoder message
        reason: String,
    },

    /// Recomputed digest differs from the stored one
    #[error("Digest mismatch: expected {expected}, got {actual}")]
    DigestMismatch {
        /// Digest carried by the data
        expected: String,
        /// Digest computed from the data
        actual: String,
    },

    /// Validation error
    #[error("Validation failed for {field}: {reason}")]
    Validation {
        /// Offending field
        field: String,
        /// Why it was rejected
        reason: String,
    },
}

impl CoreError {
    /// Shorthand for a validation failure
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidEncoding {
            reason: err.to_string(),
        }
    }
}
