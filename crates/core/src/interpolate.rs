//! Wake interpolation
//!
//! Fills in one wake instant per elapsed calendar day between consecutive
//! anchors. Two historical strategies exist and are kept distinct behind
//! `InterpolationMode`: a fixed 24-hour fill with a 6-hour wakefulness buffer,
//! and proportional interpolation with the per-day shift rate as a hard
//! clamp.

use chrono::{DateTime, Duration, Utc};
use zoneshift_domain::constants::{
    HOURS_PER_DAY, MIN_WAKEFULNESS_BUFFER_HOURS, MINUTES_PER_DAY,
};
use zoneshift_domain::plan::hours_to_duration;
use zoneshift_domain::{Anchor, InterpolationMode, PlanParams};

/// One computed wake instant, tagged with its anchor when it is one.
#[derive(Debug, Clone)]
pub struct WakePoint {
    pub instant: DateTime<Utc>,
    pub anchor: Option<Anchor>,
}

/// Produce the full wake instant sequence for a sorted anchor list.
///
/// Anchors are emitted verbatim at segment ends. Consecutive anchors at the
/// identical instant emit a single wake (the first wins) so the output stays
/// strictly increasing.
pub fn fill_wake_points(
    anchors: &[Anchor],
    params: &PlanParams,
    mode: InterpolationMode,
) -> Vec<WakePoint> {
    let mut points: Vec<WakePoint> = Vec::new();

    for pair in anchors.windows(2) {
        push_anchor(&mut points, &pair[0]);
        match mode {
            InterpolationMode::FixedStep => {
                fixed_step_fill(pair[0].instant, pair[1].instant, params, &mut points);
            }
            InterpolationMode::Proportional => {
                proportional_fill(pair[0].instant, pair[1].instant, params, &mut points);
            }
        }
    }
    if let Some(last) = anchors.last() {
        push_anchor(&mut points, last);
    }

    points
}

fn push_anchor(points: &mut Vec<WakePoint>, anchor: &Anchor) {
    if points.last().is_some_and(|p| p.instant == anchor.instant) {
        return;
    }
    points.push(WakePoint { instant: anchor.instant, anchor: Some(anchor.clone()) });
}

/// Pure 24-hour-step fill, stopping once a candidate would leave less than
/// six hours of wakefulness before the right anchor's sleep onset.
fn fixed_step_fill(
    left: DateTime<Utc>,
    right: DateTime<Utc>,
    params: &PlanParams,
    out: &mut Vec<WakePoint>,
) {
    let next_sleep_start = right - params.sleep_duration();
    let stop_before = next_sleep_start - Duration::hours(MIN_WAKEFULNESS_BUFFER_HOURS);

    let mut candidate = left + Duration::hours(HOURS_PER_DAY);
    while candidate < stop_before {
        out.push(WakePoint { instant: candidate, anchor: None });
        candidate += Duration::hours(HOURS_PER_DAY);
    }
}

/// Proportional interpolation across the segment with the per-day shift rate
/// applied as a hard clamp. The right anchor absorbs whatever the clamp cut
/// off.
fn proportional_fill(
    left: DateTime<Utc>,
    right: DateTime<Utc>,
    params: &PlanParams,
    out: &mut Vec<WakePoint>,
) {
    let span_minutes = (right - left).num_minutes();
    let days = ((span_minutes as f64) / (MINUTES_PER_DAY as f64)).round().max(1.0) as i64;
    if days <= 1 {
        return;
    }

    let delta_hours = (span_minutes - days * MINUTES_PER_DAY) as f64 / 60.0;
    let per_day_shift = (delta_hours / days as f64).clamp(
        -params.max_shift_earlier_per_day_hours,
        params.max_shift_later_per_day_hours,
    );
    let step = Duration::hours(HOURS_PER_DAY) + hours_to_duration(per_day_shift);

    let mut candidate = left + step;
    for _ in 1..days {
        if candidate >= right {
            break;
        }
        out.push(WakePoint { instant: candidate, anchor: None });
        candidate += step;
    }
}
