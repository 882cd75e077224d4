//! Converters between application values and storage primitives.
//!
//! A converter is a pure, stateless unit: an applicability predicate over
//! type descriptors plus the two conversion directions. The variant set is
//! closed and statically enumerated; there is no runtime registration of
//! new kinds, only reordering or narrowing of the built-in list through
//! [`registry::set_converters`].

pub mod registry;

pub use registry::{convert_from_storage, convert_to_storage, converter, resolve_type, set_converters};

use crate::error::ConvertError;
use crate::model::time::Instant;
use crate::model::{TypeDescriptor, Value};
use crate::util::datetime;

/// The built-in converter variants.
///
/// `Identity` is the guaranteed fallback: it never matches a descriptor
/// and passes values through unchanged in both directions. The time-like
/// variants marshal through integer epoch seconds under a fixed UTC
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    /// Pass-through for undeclared or unrecognized types.
    Identity,
    /// Calendar date <-> epoch seconds of midnight UTC.
    Date,
    /// Civil datetime (UTC wall-clock) <-> epoch seconds; sub-second
    /// precision is dropped on write and never reconstructed.
    DateTime,
    /// Absolute instant <-> epoch seconds; sub-second precision floors
    /// toward negative infinity on write.
    Instant,
}

impl Converter {
    /// The deterministic registration order the registry discovers on
    /// first use. `Identity` is deliberately excluded: it is the
    /// hard-coded fallback, never a matched entry.
    pub fn discoverable() -> Vec<Converter> {
        vec![Converter::Date, Converter::DateTime, Converter::Instant]
    }

    /// The descriptor this converter handles, or `None` for `Identity`.
    pub fn handles(self) -> Option<TypeDescriptor> {
        match self {
            Converter::Identity => None,
            Converter::Date => Some(TypeDescriptor::Date),
            Converter::DateTime => Some(TypeDescriptor::DateTime),
            Converter::Instant => Some(TypeDescriptor::Instant),
        }
    }

    /// Applicability predicate over a declared type descriptor.
    pub fn applies(self, descriptor: &TypeDescriptor) -> bool {
        self.handles().is_some_and(|handled| handled == *descriptor)
    }

    /// Converts an application value to its storage representation.
    ///
    /// `Null` propagates as `Null` for every variant. Time-like variants
    /// emit `Value::Int` epoch seconds and reject any other value variant.
    pub fn to_storage(self, value: &Value) -> Result<Value, ConvertError> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        match self {
            Converter::Identity => Ok(value.clone()),
            Converter::Date => match value {
                Value::Date(date) => Ok(Value::Int(datetime::date_to_epoch_seconds(date))),
                other => Err(self.value_mismatch(other)),
            },
            Converter::DateTime => match value {
                Value::DateTime(civil) => Ok(Value::Int(datetime::civil_to_epoch_seconds(civil))),
                other => Err(self.value_mismatch(other)),
            },
            Converter::Instant => match value {
                Value::Instant(instant) => Ok(Value::Int(instant.epoch_seconds())),
                other => Err(self.value_mismatch(other)),
            },
        }
    }

    /// Converts a storage value back to its application representation.
    ///
    /// `Null` propagates as `Null`. Time-like variants require `Value::Int`
    /// epoch seconds; out-of-range integers fail with
    /// [`ConvertError::EpochOutOfRange`].
    pub fn to_application(self, stored: &Value) -> Result<Value, ConvertError> {
        if stored.is_null() {
            return Ok(Value::Null);
        }

        match self {
            Converter::Identity => Ok(stored.clone()),
            Converter::Date => {
                let seconds = self.expect_epoch_seconds(stored)?;
                Ok(Value::Date(datetime::epoch_seconds_to_date(seconds)?))
            }
            Converter::DateTime => {
                let seconds = self.expect_epoch_seconds(stored)?;
                Ok(Value::DateTime(datetime::epoch_seconds_to_civil(seconds)?))
            }
            Converter::Instant => {
                let seconds = self.expect_epoch_seconds(stored)?;
                let instant = Instant::from_epoch_seconds(seconds)
                    .ok_or(ConvertError::EpochOutOfRange { seconds })?;
                Ok(Value::Instant(instant))
            }
        }
    }

    fn value_mismatch(self, value: &Value) -> ConvertError {
        ConvertError::ValueTypeMismatch {
            expected: self.handles().unwrap_or(TypeDescriptor::Null),
            actual: value.type_descriptor(),
        }
    }

    fn expect_epoch_seconds(self, stored: &Value) -> Result<i64, ConvertError> {
        match stored {
            Value::Int(seconds) => Ok(*seconds),
            other => Err(ConvertError::StorageTypeMismatch {
                expected: self.handles().unwrap_or(TypeDescriptor::Null),
                actual: other.type_descriptor(),
            }),
        }
    }
}
