//! Batch analytics over a delimited hotel-booking dataset.
//!
//! One pass: load and validate the file, group bookings by
//! (country, hotel, city), then answer three questions with min-max
//! normalized scores: which destination country gets the most bookings,
//! which hotel is the most economical, and which is the most profitable.

pub mod errors;
pub mod grouping;
pub mod loader;
pub mod output;
pub mod parse;
pub mod reports;
pub mod scoring;
pub mod types;
pub mod util;

pub use errors::{LoadError, RowParseError};
pub use types::{BookingRecord, GroupStats};
