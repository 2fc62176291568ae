//! Display-projected output types
//!
//! Produced only by the projector; never fed back upstream. Zoned timestamps
//! carry the display zone's local wall clock plus its UTC offset.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::impl_domain_kind_conversions;
use crate::types::schedule::{ScheduleEventKind, WakeScheduleEntry};

/// Kind of a display event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayEventKind {
    Wake,
    Sleep,
    Bright,
    Manual,
}

impl_domain_kind_conversions!(DisplayEventKind {
    Wake => "wake",
    Sleep => "sleep",
    Bright => "bright",
    Manual => "manual",
});

impl From<ScheduleEventKind> for DisplayEventKind {
    fn from(kind: ScheduleEventKind) -> Self {
        match kind {
            ScheduleEventKind::Wake => Self::Wake,
            ScheduleEventKind::Sleep => Self::Sleep,
            ScheduleEventKind::Bright => Self::Bright,
        }
    }
}

/// Legacy two-category label for split pieces.
///
/// The first piece of a split is `Start`, every subsequent piece is `End`.
/// `SplitIndex` carries the exact position for spans crossing more than one
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPart {
    Start,
    End,
}

impl_domain_kind_conversions!(SplitPart {
    Start => "start",
    End => "end",
});

/// Positional index of a split piece (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitIndex {
    pub part: u32,
    pub total: u32,
}

/// An event projected into the display zone, possibly a split piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayEvent {
    pub id: String,
    pub kind: DisplayEventKind,
    pub start_zoned: DateTime<FixedOffset>,
    #[serde(default)]
    pub end_zoned: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub split_from: Option<String>,
    #[serde(default)]
    pub split_part: Option<SplitPart>,
    #[serde(default)]
    pub split_index: Option<SplitIndex>,
    #[serde(default)]
    pub anchor_id: Option<String>,
    #[serde(default)]
    pub shift_from_previous_wake_hours: Option<f64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub color_hint: Option<String>,
    #[serde(default)]
    pub original_zone: Option<String>,
}

impl DisplayEvent {
    /// Local calendar date of this event's start in the display zone.
    pub fn local_date(&self) -> NaiveDate {
        self.start_zoned.date_naive()
    }
}

/// All events falling on one local calendar date, ordered by start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayDay {
    pub date: NaiveDate,
    pub events: Vec<DisplayEvent>,
}

/// Summary statistics for a computed view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewMeta {
    pub total_delta_hours: f64,
}

/// Kind of input record a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Anchor,
    ManualEvent,
}

impl_domain_kind_conversions!(RecordKind {
    Anchor => "anchor",
    ManualEvent => "manual_event",
});

/// A malformed input record that was dropped rather than aborting the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub id: String,
    pub kind: RecordKind,
    pub reason: String,
}

/// Final pipeline output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedView {
    pub wake_schedule: Vec<WakeScheduleEntry>,
    pub display_days: Vec<DisplayDay>,
    pub manual_events: Vec<DisplayEvent>,
    pub meta: ViewMeta,
}

/// Computed view together with per-record warnings.
///
/// One bad user-entered record must not blank the whole schedule; skipped
/// records surface here instead of as logging side effects alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedPlan {
    pub view: ComputedView,
    pub warnings: Vec<SkippedRecord>,
}
