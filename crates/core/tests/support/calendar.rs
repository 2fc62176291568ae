//! chrono-tz-backed `CalendarArithmetic` for integration tests.
//!
//! Mirrors the production adapter in `zoneshift-infra`: earliest occurrence
//! on a DST fold, error on an unknown zone.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use zoneshift_core::CalendarArithmetic;
use zoneshift_domain::{PlanError, Result};

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
