//! Domain constants
//!
//! Centralized location for all domain-level constants used by the
//! computation pipeline.

// Schedule derivation
pub const BRIGHT_LIGHT_HOURS: i64 = 5;
pub const MIN_WAKEFULNESS_BUFFER_HOURS: i64 = 6;
pub const HOURS_PER_DAY: i64 = 24;
pub const MINUTES_PER_DAY: i64 = 1440;

// Auto-generated boundary anchor ids (kept for output compatibility;
// editability is decided by `AnchorOrigin`, never by id shape)
pub const AUTO_START_ANCHOR_ID: &str = "__auto-start";
pub const AUTO_END_ANCHOR_ID: &str = "__auto-end";

// Split piece id suffixes
pub const SPLIT_START_SUFFIX: &str = "-start";
pub const SPLIT_END_SUFFIX: &str = "-end";
