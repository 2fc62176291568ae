//! # Zoneshift Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The IANA timezone database adapter (chrono-tz) for the calendar
//!   arithmetic port
//!
//! ## Architecture
//! - Implements traits defined in `zoneshift-core`
//! - Contains the only code that interprets timezone identifiers

pub mod calendar;

// Re-export commonly used items
pub use calendar::ChronoTzCalendar;
