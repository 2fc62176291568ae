//! Calendar arithmetic adapters
//!
//! The core treats timezone identifiers as opaque strings; everything that
//! actually interprets them lives here.

pub mod tz;

pub use tz::ChronoTzCalendar;
