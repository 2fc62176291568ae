//! chrono-tz implementation of the calendar arithmetic port

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use zoneshift_core::CalendarArithmetic;
use zoneshift_domain::{PlanError, Result};

// A DST gap never exceeds a couple of hours; stepping in quarter hours finds
// the first representable wall-clock time without skipping short transitions
// (Lord Howe shifts by 30 minutes).
const GAP_STEP_MINUTES: i64 = 15;
const GAP_MAX_STEPS: i64 = 16;

/// IANA timezone calendar backed by chrono-tz.
///
/// DST folds resolve to the earliest occurrence; a DST gap at local midnight
/// resolves to the first representable wall-clock time of that date.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTzCalendar;

impl ChronoTzCalendar {
    /// Create a new calendar adapter.
    pub fn new() -> Self {
        Self
    }

    fn parse_zone(zone: &str) -> Result<Tz> {
        zone.parse::<Tz>().map_err(|_| PlanError::UnknownTimeZone(zone.to_string()))
    }
}

impl CalendarArithmetic for ChronoTzCalendar {
    fn to_zoned(&self, instant: DateTime<Utc>, zone: &str) -> Result<DateTime<FixedOffset>> {
        let local = instant.with_timezone(&Self::parse_zone(zone)?);
        Ok(local.with_timezone(&local.offset().fix()))
    }

    fn local_midnight(&self, zone: &str, date: NaiveDate) -> Result<DateTime<Utc>> {
        let tz = Self::parse_zone(zone)?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| PlanError::Internal(format!("invalid midnight for {date}")))?;

        let mut candidate = midnight;
        for _ in 0..GAP_MAX_STEPS {
            if let Some(resolved) = tz.from_local_datetime(&candidate).earliest() {
                return Ok(resolved.with_timezone(&Utc));
            }
            candidate += Duration::minutes(GAP_STEP_MINUTES);
        }
        Err(PlanError::InvalidLocalTime(format!("{midnight} in {zone}")))
    }
}
