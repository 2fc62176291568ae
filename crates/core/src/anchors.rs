//! Anchor resolution
//!
//! Normalizes user anchors plus the two auto-generated boundary anchors into
//! a chronologically sorted list. Anchors whose zone cannot be resolved are
//! skipped, not fatal: one bad user-entered anchor must not blank the whole
//! schedule.

use tracing::warn;
use zoneshift_domain::constants::{AUTO_END_ANCHOR_ID, AUTO_START_ANCHOR_ID};
use zoneshift_domain::{
    Anchor, AnchorKind, AnchorOrigin, Plan, RecordKind, Result, SkippedRecord,
};

use crate::calendar_ports::CalendarArithmetic;

/// Resolve the plan's anchors into a strictly sorted list of wake
/// commitments.
///
/// The implied start wake (`start_sleep_instant + sleep_hours`) and end wake
/// get an auto anchor only when no user anchor already falls on that local
/// calendar day in the respective boundary zone. The sort is stable on ties;
/// duplicate-instant anchors are retained.
pub fn resolve_anchors(
    cal: &dyn CalendarArithmetic,
    plan: &Plan,
    warnings: &mut Vec<SkippedRecord>,
) -> Result<Vec<Anchor>> {
    let params = &plan.params;

    let mut anchors: Vec<Anchor> = Vec::with_capacity(plan.anchors.len() + 2);
    for anchor in &plan.anchors {
        match cal.local_date(anchor.instant, &anchor.zone) {
            Ok(_) => anchors.push(anchor.clone()),
            Err(err) => {
                warn!(anchor_id = %anchor.id, error = %err, "skipping anchor with unresolvable zone");
                warnings.push(SkippedRecord {
                    id: anchor.id.clone(),
                    kind: RecordKind::Anchor,
                    reason: err.to_string(),
                });
            }
        }
    }

    // Both coverage checks look at user anchors only, before any auto anchor
    // is appended.
    let start_wake = params.start_wake_instant();
    let needs_start = !covers_local_day(cal, &anchors, start_wake, &params.start_time_zone)?;
    let end_wake = params.end_wake_instant;
    let needs_end = !covers_local_day(cal, &anchors, end_wake, &params.end_time_zone)?;

    if needs_start {
        anchors.push(auto_anchor(AUTO_START_ANCHOR_ID, start_wake, &params.start_time_zone));
    }
    if needs_end {
        anchors.push(auto_anchor(AUTO_END_ANCHOR_ID, end_wake, &params.end_time_zone));
    }

    anchors.sort_by_key(|a| a.instant);
    Ok(anchors)
}

/// Whether any anchor's instant falls inside the half-open local calendar day
/// containing `instant` in `zone`.
fn covers_local_day(
    cal: &dyn CalendarArithmetic,
    anchors: &[Anchor],
    instant: chrono::DateTime<chrono::Utc>,
    zone: &str,
) -> Result<bool> {
    let date = cal.local_date(instant, zone)?;
    let (day_start, day_end) = cal.day_bounds(zone, date)?;
    Ok(anchors.iter().any(|a| a.instant >= day_start && a.instant < day_end))
}

fn auto_anchor(id: &str, instant: chrono::DateTime<chrono::Utc>, zone: &str) -> Anchor {
    Anchor {
        id: id.to_string(),
        kind: AnchorKind::Wake,
        instant,
        zone: zone.to_string(),
        note: None,
        origin: AnchorOrigin::Auto,
    }
}
