//! Calendar arithmetic port interface
//!
//! The pipeline treats civil-time arithmetic as an external capability:
//! timezone identifiers are opaque strings, and every conversion between
//! absolute instants and local wall clocks goes through this trait. Duration
//! arithmetic and instant comparison use chrono directly.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use zoneshift_domain::{PlanError, Result};

/// Trait for civil-time conversions in an arbitrary timezone.
///
/// Implementations must handle DST and historical offset changes; the core
/// never inspects zone identifiers itself.
pub trait CalendarArithmetic: Send + Sync {
    /// Convert an absolute instant to local wall clock + offset in `zone`.
    fn to_zoned(&self, instant: DateTime<Utc>, zone: &str) -> Result<DateTime<FixedOffset>>;

    /// Absolute instant of local midnight at the start of `date` in `zone`.
    ///
    /// When midnight does not exist (DST gap) the first representable local
    /// time of that date is returned; when it is ambiguous (DST fold) the
    /// earliest occurrence wins.
    fn local_midnight(&self, zone: &str, date: NaiveDate) -> Result<DateTime<Utc>>;

    /// Local calendar date of `instant` in `zone`.
    fn local_date(&self, instant: DateTime<Utc>, zone: &str) -> Result<NaiveDate> {
        Ok(self.to_zoned(instant, zone)?.date_naive())
    }

    /// Half-open `[midnight, next midnight)` interval of `date` in `zone`,
    /// as absolute instants.
    fn day_bounds(&self, zone: &str, date: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self.local_midnight(zone, date)?;
        let next = date
            .succ_opt()
            .ok_or_else(|| PlanError::Internal(format!("date overflow after {date}")))?;
        Ok((start, self.local_midnight(zone, next)?))
    }
}
