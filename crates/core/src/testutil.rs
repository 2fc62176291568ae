//! Shared unit-test fixtures
//!
//! A chrono-tz-backed calendar and plan builders so module tests can focus on
//! behaviour instead of boilerplate. Integration tests carry their own copy
//! under `tests/support`.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use zoneshift_domain::{
    Anchor, AnchorKind, AnchorOrigin, DisplayEvent, DisplayEventKind, Plan, PlanError, PlanParams,
    PlanPrefs, Result,
};

use crate::calendar_ports::CalendarArithmetic;

/// chrono-tz calendar for tests (mirrors the infra adapter).
pub struct TzCalendar;

fn parse_zone(zone: &str) -> Result<Tz> {
    zone.parse::<Tz>().map_err(|_| PlanError::UnknownTimeZone(zone.to_string()))
}

impl CalendarArithmetic for TzCalendar {
    fn to_zoned(&self, instant: DateTime<Utc>, zone: &str) -> Result<DateTime<FixedOffset>> {
        let local = instant.with_timezone(&parse_zone(zone)?);
        Ok(local.with_timezone(&local.offset().fix()))
    }

    fn local_midnight(&self, zone: &str, date: NaiveDate) -> Result<DateTime<Utc>> {
        let tz = parse_zone(zone)?;
        let naive = date.and_hms_opt(0, 0, 0).unwrap();
        tz.from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| PlanError::InvalidLocalTime(format!("{naive} in {zone}")))
    }
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

pub fn utc_zoned(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    utc(year, month, day, hour, minute).fixed_offset()
}

/// Los Angeles to Taipei trip, no user anchors or manual events.
pub fn base_plan() -> Plan {
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

pub fn user_anchor(id: &str, instant: DateTime<Utc>) -> Anchor {
    Anchor {
        id: id.to_string(),
        kind: AnchorKind::Wake,
        instant,
        zone: "America/Los_Angeles".to_string(),
        note: None,
        origin: AnchorOrigin::User,
    }
}

pub fn display_event(id: &str, start_zoned: DateTime<FixedOffset>) -> DisplayEvent {
    DisplayEvent {
        id: id.to_string(),
        kind: DisplayEventKind::Manual,
        start_zoned,
        end_zoned: None,
        split_from: None,
        split_part: None,
        split_index: None,
        anchor_id: None,
        shift_from_previous_wake_hours: None,
        title: None,
        color_hint: None,
        original_zone: None,
    }
}
