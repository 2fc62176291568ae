//! Plan computation service - orchestrates the pipeline

use std::sync::Arc;

use tracing::warn;
use zoneshift_domain::{
    ComputedPlan, ComputedView, InterpolationMode, Plan, RecordKind, Result, SkippedRecord,
    ViewMeta,
};

use crate::anchors::resolve_anchors;
use crate::buckets::bucketize;
use crate::calendar_ports::CalendarArithmetic;
use crate::events::build_schedule;
use crate::interpolate::fill_wake_points;
use crate::project::{project_manual_event, project_schedule_event};

/// Plan computation service
///
/// Synchronous and side-effect-free apart from diagnostic logging; safe to
/// call concurrently with different plans, and repeated calls with the same
/// plan are idempotent.
pub struct PlannerService {
    calendar: Arc<dyn CalendarArithmetic>,
    mode: InterpolationMode,
}

impl PlannerService {
    /// Create a new planner service with the default interpolation mode.
    pub fn new(calendar: Arc<dyn CalendarArithmetic>) -> Self {
        Self { calendar, mode: InterpolationMode::default() }
    }

    /// Select the wake interpolation strategy.
    ///
    /// The mode is deployment policy, not plan data, so it lives on the
    /// service rather than in the plan input.
    pub fn with_mode(mut self, mode: InterpolationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Compute the full view for one plan.
    ///
    /// Structural problems (an unresolvable display or boundary zone) fail
    /// the call; malformed individual anchors and manual events are skipped
    /// into the returned warnings instead.
    pub fn compute_plan(&self, plan: &Plan) -> Result<ComputedPlan> {
        let cal = self.calendar.as_ref();
        let zone = plan.display_zone_id();

        // The display zone is part of the plan contract, not a per-record
        // input; resolve it once before any per-record work.
        cal.local_date(plan.params.start_sleep_instant, zone)?;

        let mut warnings = Vec::new();
        let anchors = resolve_anchors(cal, plan, &mut warnings)?;
        let points = fill_wake_points(&anchors, &plan.params, self.mode);
        let wake_schedule = build_schedule(&points, &plan.params);

        let mut display_events = Vec::new();
        for entry in &wake_schedule {
            display_events.extend(project_schedule_event(cal, zone, &entry.sleep, None)?);
            display_events.extend(project_schedule_event(
                cal,
                zone,
                &entry.wake,
                Some(entry.shift_from_previous_wake_hours),
            )?);
            display_events.extend(project_schedule_event(cal, zone, &entry.bright, None)?);
        }

        let mut manual_events = Vec::new();
        for event in &plan.events {
            match cal.local_date(event.start, &event.zone) {
                Ok(_) => manual_events.extend(project_manual_event(cal, zone, event)?),
                Err(err) => {
                    warn!(event_id = %event.id, error = %err, "skipping manual event with unresolvable zone");
                    warnings.push(SkippedRecord {
                        id: event.id.clone(),
                        kind: RecordKind::ManualEvent,
                        reason: err.to_string(),
                    });
                }
            }
        }

        let mut all_events = display_events;
        all_events.extend(manual_events.iter().cloned());
        let display_days = bucketize(all_events);

        let total_delta_hours =
            wake_schedule.iter().map(|e| e.shift_from_previous_wake_hours).sum();

        Ok(ComputedPlan {
            view: ComputedView {
                wake_schedule,
                display_days,
                manual_events,
                meta: ViewMeta { total_delta_hours },
            },
            warnings,
        })
    }
}
