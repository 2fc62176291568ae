//! # Zoneshift Domain
//!
//! Business domain types and models for the circadian shift planner.
//!
//! This crate contains:
//! - Plan input types (PlanParams, Anchor, ManualEvent)
//! - Computed output types (WakeScheduleEntry, DisplayEvent, ComputedView)
//! - Domain error types and Result definitions
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other zoneshift crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
