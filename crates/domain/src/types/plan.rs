//! Plan input types
//!
//! A `Plan` arrives from an external validator and is consumed as trusted:
//! instants are already parsed, numeric parameters are already range-checked.
//! The pipeline never mutates a plan, only derives output from it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Convert fractional hours to a chrono duration with second precision.
pub fn hours_to_duration(hours: f64) -> Duration {
    Duration::seconds((hours * 3600.0).round() as i64)
}

/// Timezone selected for presenting the computed schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayZone {
    /// The trip's starting timezone ("home").
    #[default]
    #[serde(alias = "home")]
    Start,
    /// The trip's destination timezone ("target").
    #[serde(alias = "target")]
    End,
}

/// Who created an anchor.
///
/// Replaces the historical `"__"` id-prefix convention: downstream consumers
/// check this field, never the id shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorOrigin {
    #[default]
    User,
    Auto,
}

impl AnchorOrigin {
    /// Auto-generated boundary anchors are not editable by consumers.
    pub fn is_editable(self) -> bool {
        matches!(self, Self::User)
    }
}

/// Kind of commitment an anchor represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    #[default]
    Wake,
}

/// A fixed commitment to be awake at a specific civil moment.
///
/// Immutable once created by the caller; the pipeline only produces derived,
/// display-projected copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub id: String,
    #[serde(default)]
    pub kind: AnchorKind,
    pub instant: DateTime<Utc>,
    pub zone: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub origin: AnchorOrigin,
}

/// A calendar appointment independent of the sleep schedule.
///
/// Never fed back into wake computation; only projected and split for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    pub zone: String,
    #[serde(default)]
    pub color_hint: Option<String>,
}

/// Trip parameters and shift-rate policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanParams {
    pub start_time_zone: String,
    pub end_time_zone: String,
    pub start_sleep_instant: DateTime<Utc>,
    pub end_wake_instant: DateTime<Utc>,
    pub sleep_hours: f64,
    pub max_shift_later_per_day_hours: f64,
    pub max_shift_earlier_per_day_hours: f64,
}

impl PlanParams {
    /// Nightly sleep length as a duration.
    pub fn sleep_duration(&self) -> Duration {
        hours_to_duration(self.sleep_hours)
    }

    /// Implied wake instant at the start of the trip.
    pub fn start_wake_instant(&self) -> DateTime<Utc> {
        self.start_sleep_instant + self.sleep_duration()
    }
}

/// Display preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPrefs {
    #[serde(default)]
    pub display_zone: DisplayZone,
}

/// Wake interpolation strategy.
///
/// Two divergent strategies exist historically; both are supported behind the
/// same interpolator interface and selected per deployment, never silently
/// merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMode {
    /// Fixed 24-hour fill steps with a 6-hour wakefulness buffer before the
    /// next anchor's sleep onset.
    #[default]
    FixedStep,
    /// Proportional interpolation across each anchor segment with the
    /// per-day shift rate applied as a hard clamp.
    Proportional,
}

/// Externally validated plan input (read-only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub params: PlanParams,
    #[serde(default)]
    pub anchors: Vec<Anchor>,
    #[serde(default)]
    pub events: Vec<ManualEvent>,
    #[serde(default)]
    pub prefs: PlanPrefs,
}

impl Plan {
    /// Timezone identifier selected by the display preference.
    pub fn display_zone_id(&self) -> &str {
        match self.prefs.display_zone {
            DisplayZone::Start => &self.params.start_time_zone,
            DisplayZone::End => &self.params.end_time_zone,
        }
    }
}
