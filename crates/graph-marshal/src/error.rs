//! Error types for value marshalling.

use thiserror::Error;

use crate::model::TypeDescriptor;

/// Error during conversion between application and storage values.
///
/// Conversions are single, all-or-nothing operations: the first failure is
/// returned to the caller and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The value handed to a converter does not have the variant its
    /// declared type calls for (e.g. an attribute declared `Date` holding
    /// a `Text` value).
    #[error("cannot marshal {actual:?} value with the {expected:?} converter")]
    ValueTypeMismatch {
        expected: TypeDescriptor,
        actual: TypeDescriptor,
    },

    /// The storage value for a time-like attribute is not integer epoch
    /// seconds.
    #[error("storage value for {expected:?} must be integer epoch seconds, found {actual:?}")]
    StorageTypeMismatch {
        expected: TypeDescriptor,
        actual: TypeDescriptor,
    },

    /// The epoch-seconds integer cannot be reconstructed into a civil value
    /// (the resulting year does not fit the calendar range).
    #[error("epoch seconds {seconds} out of range for civil reconstruction")]
    EpochOutOfRange { seconds: i64 },
}

/// Error type for RFC 3339 parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DateTimeParseError {
    pub message: String,
}

impl DateTimeParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        DateTimeParseError {
            message: message.into(),
        }
    }
}
