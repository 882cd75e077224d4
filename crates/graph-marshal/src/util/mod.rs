//! Utility modules for value marshalling.

pub mod datetime;

pub use datetime::{
    civil_to_epoch_seconds, date_to_epoch_seconds, epoch_seconds_to_civil, epoch_seconds_to_date,
    parse_date, parse_datetime, parse_instant,
};
