//! Application-domain values and their type descriptors.
//!
//! A [`Value`] is what the owning application hands to the marshalling
//! layer; a [`TypeDescriptor`] is the finite tag shared between declared
//! property metadata and converter applicability predicates.

use std::borrow::Cow;

use crate::model::time::{CalendarDate, CivilDateTime, Instant};

/// Type descriptors for application values.
///
/// One variant per `Value` variant, plus `Custom` for arbitrary
/// user-declared types the built-in converters never match (they fall
/// through to the identity conversion).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Null,
    Bool,
    Int,
    Float,
    Text,
    Bytes,
    Date,
    DateTime,
    Instant,
    /// An application-defined type tag.
    Custom(Cow<'static, str>),
}

impl TypeDescriptor {
    /// Convenience constructor for user-defined type tags.
    pub fn custom(tag: impl Into<Cow<'static, str>>) -> TypeDescriptor {
        TypeDescriptor::Custom(tag.into())
    }
}

/// A typed value crossing the marshalling boundary.
///
/// The same enum serves both domains: application code produces any
/// variant, while the storage side is restricted (for time-like
/// attributes) to `Int` epoch seconds or `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value. Propagates as-is through every converter.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    /// UTC calendar date.
    Date(CalendarDate),
    /// Civil date and time-of-day, read as UTC wall-clock.
    DateTime(CivilDateTime),
    /// Absolute instant on the UTC timeline.
    Instant(Instant),
}

impl Value {
    /// Returns the runtime type descriptor of this value.
    pub fn type_descriptor(&self) -> TypeDescriptor {
        match self {
            Value::Null => TypeDescriptor::Null,
            Value::Bool(_) => TypeDescriptor::Bool,
            Value::Int(_) => TypeDescriptor::Int,
            Value::Float(_) => TypeDescriptor::Float,
            Value::Text(_) => TypeDescriptor::Text,
            Value::Bytes(_) => TypeDescriptor::Bytes,
            Value::Date(_) => TypeDescriptor::Date,
            Value::DateTime(_) => TypeDescriptor::DateTime,
            Value::Instant(_) => TypeDescriptor::Instant,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Value {
        Value::Bytes(v)
    }
}

impl From<CalendarDate> for Value {
    fn from(v: CalendarDate) -> Value {
        Value::Date(v)
    }
}

impl From<CivilDateTime> for Value {
    fn from(v: CivilDateTime) -> Value {
        Value::DateTime(v)
    }
}

impl From<Instant> for Value {
    fn from(v: Instant) -> Value {
        Value::Instant(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Value {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_descriptor_per_variant() {
        let date = CalendarDate::new(2021, 3, 15).unwrap();
        let dt = CivilDateTime::new(2021, 3, 15, 10, 30, 45).unwrap();

        assert_eq!(Value::Null.type_descriptor(), TypeDescriptor::Null);
        assert_eq!(Value::Bool(true).type_descriptor(), TypeDescriptor::Bool);
        assert_eq!(Value::Int(7).type_descriptor(), TypeDescriptor::Int);
        assert_eq!(Value::Float(1.5).type_descriptor(), TypeDescriptor::Float);
        assert_eq!(
            Value::Text("x".to_string()).type_descriptor(),
            TypeDescriptor::Text
        );
        assert_eq!(
            Value::Bytes(vec![1, 2]).type_descriptor(),
            TypeDescriptor::Bytes
        );
        assert_eq!(Value::Date(date).type_descriptor(), TypeDescriptor::Date);
        assert_eq!(
            Value::DateTime(dt).type_descriptor(),
            TypeDescriptor::DateTime
        );
        assert_eq!(
            Value::Instant(Instant::from_epoch_micros(0)).type_descriptor(),
            TypeDescriptor::Instant
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(42i64)), Value::Int(42));
    }

    #[test]
    fn test_custom_descriptor_equality() {
        assert_eq!(
            TypeDescriptor::custom("Money"),
            TypeDescriptor::custom("Money".to_string())
        );
        assert_ne!(
            TypeDescriptor::custom("Money"),
            TypeDescriptor::custom("Weight")
        );
    }
}
