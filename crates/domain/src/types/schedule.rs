//! Ephemeral schedule types
//!
//! Everything here is expressed in absolute instants; nothing is timezone
//! local yet, and nothing is ever persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_domain_kind_conversions;
use crate::types::plan::Anchor;

/// Kind of derived schedule event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleEventKind {
    Wake,
    Sleep,
    Bright,
}

impl_domain_kind_conversions!(ScheduleEventKind {
    Wake => "wake",
    Sleep => "sleep",
    Bright => "bright",
});

/// A derived sleep/wake/bright-light event in absolute time.
///
/// One wake instant produces exactly one sleep event (ending at the wake) and
/// one bright event (starting at the wake), linked by a shared base id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: String,
    pub kind: ScheduleEventKind,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub anchor_id: Option<String>,
}

/// One computed wake per day with its derived events.
///
/// `anchor` is present only when the wake instant coincides with a resolved
/// anchor. The first entry of a schedule always has a shift of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WakeScheduleEntry {
    pub wake: ScheduleEvent,
    pub sleep: ScheduleEvent,
    pub bright: ScheduleEvent,
    #[serde(default)]
    pub anchor: Option<Anchor>,
    pub shift_from_previous_wake_hours: f64,
}

impl WakeScheduleEntry {
    /// Absolute wake instant of this entry.
    pub fn wake_instant(&self) -> DateTime<Utc> {
        self.wake.start
    }
}
