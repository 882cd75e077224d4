//! Data model types for value marshalling.
//!
//! - Values (typed application-domain data)
//! - Type descriptors (the finite tags converters key on)
//! - UTC time types (calendar date, civil datetime, absolute instant)

pub mod time;
pub mod value;

pub use time::{CalendarDate, CivilDateTime, Instant};
pub use value::{TypeDescriptor, Value};
