//! Schedule event derivation
//!
//! For each wake instant, derives the sleep event ending at the wake, the
//! bright-light event starting at it, and the wake marker itself. Everything
//! stays in absolute instants; clamping to calendar boundaries only ever
//! happens later, as a side effect of display-zone splitting.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use zoneshift_domain::constants::{BRIGHT_LIGHT_HOURS, MINUTES_PER_DAY};
use zoneshift_domain::{PlanParams, ScheduleEvent, ScheduleEventKind, WakeScheduleEntry};

use crate::interpolate::WakePoint;

/// Deviation of a wake step from an exact 24-hour cadence, in hours.
pub fn shift_hours(prev: DateTime<Utc>, current: DateTime<Utc>) -> f64 {
    ((current - prev).num_minutes() - MINUTES_PER_DAY) as f64 / 60.0
}

/// Build one schedule entry per wake point.
///
/// The shift side channel is informational, computed after the fill: the
/// first entry is always 0 (no predecessor).
pub fn build_schedule(points: &[WakePoint], params: &PlanParams) -> Vec<WakeScheduleEntry> {
    let sleep_len = params.sleep_duration();
    let bright_len = Duration::hours(BRIGHT_LIGHT_HOURS);

    let mut entries = Vec::with_capacity(points.len());
    let mut previous: Option<DateTime<Utc>> = None;

    for point in points {
        let wake_instant = point.instant;
        let base_id = point.anchor.as_ref().map_or_else(
            || wake_instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            |a| a.id.clone(),
        );
        let anchor_id = point.anchor.as_ref().map(|a| a.id.clone());

        let wake = ScheduleEvent {
            id: format!("{base_id}-wake"),
            kind: ScheduleEventKind::Wake,
            start: wake_instant,
            end: None,
            anchor_id: anchor_id.clone(),
        };
        let sleep = ScheduleEvent {
            id: format!("{base_id}-sleep"),
            kind: ScheduleEventKind::Sleep,
            start: wake_instant - sleep_len,
            end: Some(wake_instant),
            anchor_id: anchor_id.clone(),
        };
        let bright = ScheduleEvent {
            id: format!("{base_id}-bright"),
            kind: ScheduleEventKind::Bright,
            start: wake_instant,
            end: Some(wake_instant + bright_len),
            anchor_id,
        };

        let shift = previous.map_or(0.0, |prev| shift_hours(prev, wake_instant));
        previous = Some(wake_instant);

        entries.push(WakeScheduleEntry {
            wake,
            sleep,
            bright,
            anchor: point.anchor.clone(),
            shift_from_previous_wake_hours: shift,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolate::fill_wake_points;
    use crate::testutil::{base_plan, user_anchor, utc};
    use zoneshift_domain::InterpolationMode;

    #[test]
    fn test_first_wake_matches_implied_start_wake() {
        // AC: startSleepUtc 2024-10-17T08:30Z with 8h sleep implies a first
        // wake at 16:30Z with zero shift
        let plan = base_plan();
        let anchors = vec![user_anchor("start", plan.params.start_wake_instant())];
        let points = fill_wake_points(&anchors, &plan.params, InterpolationMode::FixedStep);

        let entries = build_schedule(&points, &plan.params);

        assert_eq!(entries[0].wake_instant(), utc(2024, 10, 17, 16, 30));
        assert_eq!(entries[0].shift_from_previous_wake_hours, 0.0);
    }

    #[test]
    fn test_sleep_and_bright_pairing_invariants() {
        // AC: sleep ends at the wake, bright starts at the wake and lasts
        // exactly 5h, unclamped
        let plan = base_plan();
        let anchors = vec![
            user_anchor("a", utc(2024, 10, 17, 16, 30)),
            user_anchor("b", utc(2024, 10, 21, 14, 30)),
        ];
        let points = fill_wake_points(&anchors, &plan.params, InterpolationMode::FixedStep);

        let entries = build_schedule(&points, &plan.params);

        assert!(entries.len() > 2);
        for entry in &entries {
            assert_eq!(entry.sleep.end, Some(entry.wake.start));
            assert_eq!(entry.sleep.start, entry.wake.start - plan.params.sleep_duration());
            assert_eq!(entry.bright.start, entry.wake.start);
            assert_eq!(entry.bright.end, Some(entry.wake.start + Duration::hours(5)));
        }
    }

    #[test]
    fn test_ids_derive_from_anchor_or_instant() {
        // AC: anchored entries share the anchor id as base; fill entries use
        // the canonical instant form
        let plan = base_plan();
        let anchors = vec![
            user_anchor("takeoff", utc(2024, 10, 17, 16, 30)),
            user_anchor("landing", utc(2024, 10, 19, 16, 30)),
        ];
        let points = fill_wake_points(&anchors, &plan.params, InterpolationMode::FixedStep);

        let entries = build_schedule(&points, &plan.params);

        assert_eq!(entries[0].wake.id, "takeoff-wake");
        assert_eq!(entries[0].sleep.id, "takeoff-sleep");
        assert_eq!(entries[0].bright.id, "takeoff-bright");
        assert_eq!(entries[1].wake.id, "2024-10-18T16:30:00Z-wake");
        assert!(entries[1].anchor.is_none());
        assert_eq!(entries[1].wake.anchor_id, None);
        assert_eq!(entries.last().unwrap().anchor.as_ref().unwrap().id, "landing");
    }

    #[test]
    fn test_shift_for_23h_cadence_is_minus_one() {
        // AC: two anchors 23 hours apart produce a -1h shift on the second
        // entry
        let plan = base_plan();
        let anchors = vec![
            user_anchor("a", utc(2024, 10, 17, 10, 0)),
            user_anchor("b", utc(2024, 10, 18, 9, 0)),
        ];
        let points = fill_wake_points(&anchors, &plan.params, InterpolationMode::FixedStep);

        let entries = build_schedule(&points, &plan.params);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].shift_from_previous_wake_hours, 0.0);
        assert_eq!(entries[1].shift_from_previous_wake_hours, -1.0);
    }
}
