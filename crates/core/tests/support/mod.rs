//! Shared test helpers for `zoneshift-core` integration tests.
//!
//! These helpers provide reusable fixtures and a chrono-tz-backed calendar so
//! the pipeline tests can focus on behaviour instead of boilerplate.

pub mod calendar;

use chrono::{DateTime, TimeZone, Utc};
use zoneshift_domain::{ManualEvent, Plan, PlanParams, PlanPrefs};

pub use calendar::TzCalendar;

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// Los Angeles to Taipei, 8h sleep, one-week trip, no user anchors.
pub fn la_to_taipei_plan() -> Plan {
    Plan {
        params: PlanParams {
            start_time_zone: "America/Los_Angeles".to_string(),
            end_time_zone: "Asia/Taipei".to_string(),
            start_sleep_instant: utc(2024, 10, 17, 8, 30),
            end_wake_instant: utc(2024, 10, 24, 23, 0),
            sleep_hours: 8.0,
            max_shift_later_per_day_hours: 1.0,
            max_shift_earlier_per_day_hours: 1.0,
        },
        anchors: Vec::new(),
        events: Vec::new(),
        prefs: PlanPrefs::default(),
    }
}

pub fn manual_event(
    id: &str,
    title: &str,
    zone: &str,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
) -> ManualEvent {
    ManualEvent {
        id: id.to_string(),
        title: title.to_string(),
        start,
        end,
        zone: zone.to_string(),
        color_hint: None,
    }
}
