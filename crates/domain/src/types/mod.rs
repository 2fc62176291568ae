//! Domain types and models
//!
//! Split by pipeline stage: plan input types, ephemeral schedule types, and
//! display-projected output types.

pub mod display;
pub mod plan;
pub mod schedule;

pub use display::{
    ComputedPlan, ComputedView, DisplayDay, DisplayEvent, DisplayEventKind, RecordKind,
    SkippedRecord, SplitIndex, SplitPart, ViewMeta,
};
pub use plan::{
    Anchor, AnchorKind, AnchorOrigin, DisplayZone, InterpolationMode, ManualEvent, Plan,
    PlanParams, PlanPrefs,
};
pub use schedule::{ScheduleEvent, ScheduleEventKind, WakeScheduleEntry};
