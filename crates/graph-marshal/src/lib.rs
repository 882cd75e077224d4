//! graph-marshal: typed property-value marshalling for property-graph stores.
//!
//! This crate converts application-level typed values to a storage-neutral
//! primitive representation and back, selecting the conversion strategy
//! from either the declared type of the attribute being stored or the
//! runtime type of the value itself.
//!
//! # Overview
//!
//! The layer is built around three pieces:
//! - **Converters**: pure, stateless units pairing an applicability
//!   predicate with the two conversion directions. The built-in variants
//!   marshal calendar dates, civil datetimes, and absolute instants
//!   through integer epoch seconds under a fixed UTC policy; everything
//!   else passes through the identity conversion.
//! - **Registry**: a process-wide, lazily-initialized converter list with
//!   first-match-wins lookup and a wholesale-replacement hook for tests.
//! - **Type resolver**: declared type first, runtime type of the value as
//!   the fallback. Inbound conversion consults declarations only, since a
//!   stored integer carries no type information of its own.
//!
//! # Quick Start
//!
//! ```rust
//! use graph_marshal::{
//!     convert_from_storage, convert_to_storage, CalendarDate, PropertySchema,
//!     TypeDescriptor, Value,
//! };
//!
//! // The owner type declares its attribute types.
//! let mut person = PropertySchema::new();
//! person.declare("born_on", TypeDescriptor::Date);
//!
//! // Outbound: calendar date -> epoch seconds of midnight UTC.
//! let date = CalendarDate::new(2021, 3, 15).unwrap();
//! let stored = convert_to_storage(&Value::Date(date), Some("born_on"), Some(&person)).unwrap();
//! assert_eq!(stored, Value::Int(1615766400));
//!
//! // Inbound: the declaration (and only the declaration) picks the converter.
//! let back = convert_from_storage(&person, "born_on", &stored).unwrap();
//! assert_eq!(back, Value::Date(date));
//!
//! // Undeclared attributes degrade gracefully to pass-through.
//! let raw = Value::Text("as-is".to_string());
//! assert_eq!(convert_to_storage(&raw, None, None).unwrap(), raw);
//! ```
//!
//! # Modules
//!
//! - [`model`]: values, type descriptors, and the UTC time types
//! - [`convert`]: the converter variants, registry, and type resolver
//! - [`schema`]: the property-declaration capability owner types expose
//! - [`util`]: civil/epoch arithmetic and RFC 3339 text conversion
//! - [`error`]: error types
//!
//! # Error behavior
//!
//! Unknown declared types are not errors; they fall back to the identity
//! conversion. `Null` propagates as `Null` through every converter in both
//! directions. Genuine failures (a value whose variant contradicts its
//! declaration, an epoch integer outside the calendar range) surface as
//! [`ConvertError`] and are never retried.

pub mod convert;
pub mod error;
pub mod model;
pub mod schema;
pub mod util;

// Re-export commonly used types at crate root
pub use convert::{
    Converter, convert_from_storage, convert_to_storage, converter, resolve_type, set_converters,
};
pub use error::{ConvertError, DateTimeParseError};
pub use model::{CalendarDate, CivilDateTime, Instant, TypeDescriptor, Value};
pub use schema::{PropertyDeclarations, PropertySchema};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
