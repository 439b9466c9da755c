//! Error types for lane-intent operations.
//!
//! Only structural misuse (wrong arity, unrecognized labels, empty data,
//! using an unfitted estimator) is reported as an error. Anomalous
//! floating-point state produced by the statistics is never trapped here.

use std::fmt;

/// Main error type for lane-intent operations.
///
/// # Examples
///
/// ```
/// use lane_intent::error::IntentError;
///
/// let err = IntentError::DimensionMismatch {
///     expected: "n_features=4".to_string(),
///     actual: "3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum IntentError {
    /// Observation or table dimensions don't match.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Training data or observation set is empty.
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// A label outside the fixed `left` / `keep` / `right` set.
    UnknownLabel {
        /// The rejected symbol
        label: String,
        /// Position in the label sequence, when known
        position: Option<usize>,
    },

    /// Prediction was requested before the estimator was fitted.
    NotFitted,

    /// I/O error while persisting or loading a model.
    Io(std::io::Error),

    /// JSON (de)serialization error for models and configuration.
    Serialization(serde_json::Error),
}

impl fmt::Display for IntentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentError::DimensionMismatch { expected, actual } => {
                write!(f, "Observation dimension mismatch: expected {expected}, got {actual}")
            }
            IntentError::EmptyInput { context } => write!(f, "Empty input: {context}"),
            IntentError::UnknownLabel { label, position } => match position {
                Some(pos) => write!(
                    f,
                    "Unknown label {label:?} at position {pos}, expected one of left, keep, right"
                ),
                None => write!(f, "Unknown label {label:?}, expected one of left, keep, right"),
            },
            IntentError::NotFitted => write!(f, "Model not fitted, call fit() first"),
            IntentError::Io(e) => write!(f, "I/O error: {e}"),
            IntentError::Serialization(e) => write!(f, "Serialization error: {e}"),
        }
    }
}

impl std::error::Error for IntentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntentError::Io(e) => Some(e),
            IntentError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IntentError {
    fn from(err: std::io::Error) -> Self {
        IntentError::Io(err)
    }
}

impl From<serde_json::Error> for IntentError {
    fn from(err: serde_json::Error) -> Self {
        IntentError::Serialization(err)
    }
}

impl IntentError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }

    /// Create an unknown label error
    #[must_use]
    pub fn unknown_label(label: &str, position: Option<usize>) -> Self {
        Self::UnknownLabel {
            label: label.to_string(),
            position,
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, IntentError>;
