//! # Zoneshift Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The computation pipeline (anchor resolution, wake interpolation,
//!   schedule derivation, display projection, day bucketing)
//! - The calendar arithmetic port interface (trait)
//! - The planner service orchestrating one `compute_plan` call
//!
//! ## Architecture Principles
//! - Only depends on `zoneshift-domain`
//! - No timezone database, I/O, or platform code
//! - All calendar arithmetic via the `CalendarArithmetic` trait
//! - Pure, synchronous, referentially transparent pipeline

pub mod anchors;
pub mod buckets;
pub mod calendar_ports;
pub mod events;
pub mod interpolate;
pub mod planner;
pub mod project;

#[cfg(test)]
mod testutil;

// Re-export specific items to avoid ambiguity
pub use anchors::resolve_anchors;
pub use buckets::bucketize;
pub use calendar_ports::CalendarArithmetic;
pub use events::build_schedule;
pub use interpolate::{fill_wake_points, WakePoint};
pub use planner::PlannerService;
pub use project::{project_manual_event, project_schedule_event};
