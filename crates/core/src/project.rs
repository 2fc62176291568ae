//! Event projection and midnight splitting
//!
//! Converts events into the active display timezone and splits any event
//! whose visible span crosses local midnight into contiguous pieces meeting
//! exactly at the boundary. Intervals are half-open `[start, end)`: an event
//! ending exactly at local midnight belongs wholly to the preceding date.

use chrono::{DateTime, NaiveDate, Utc};
use zoneshift_domain::constants::{SPLIT_END_SUFFIX, SPLIT_START_SUFFIX};
use zoneshift_domain::{
    DisplayEvent, DisplayEventKind, ManualEvent, PlanError, Result, ScheduleEvent, SplitIndex,
    SplitPart,
};

use crate::calendar_ports::CalendarArithmetic;

/// Presentation metadata carried onto every projected piece.
#[derive(Debug, Clone, Default)]
pub struct EventMeta {
    pub anchor_id: Option<String>,
    pub shift_from_previous_wake_hours: Option<f64>,
    pub title: Option<String>,
    pub color_hint: Option<String>,
    pub original_zone: Option<String>,
}

/// Project a schedule event into the display zone.
///
/// The wake marker additionally carries the entry's shift side channel so
/// renderers do not need the schedule list to label the day.
pub fn project_schedule_event(
    cal: &dyn CalendarArithmetic,
    zone: &str,
    event: &ScheduleEvent,
    shift_from_previous_wake_hours: Option<f64>,
) -> Result<Vec<DisplayEvent>> {
    let meta = EventMeta {
        anchor_id: event.anchor_id.clone(),
        shift_from_previous_wake_hours,
        ..EventMeta::default()
    };
    project_span(cal, zone, &event.id, event.kind.into(), event.start, event.end, &meta)
}

/// Project a manual event into the display zone.
///
/// The event's declared origin zone is carried along as metadata; its
/// wall-clock meaning is never recomputed.
pub fn project_manual_event(
    cal: &dyn CalendarArithmetic,
    zone: &str,
    event: &ManualEvent,
) -> Result<Vec<DisplayEvent>> {
    let meta = EventMeta {
        title: Some(event.title.clone()),
        color_hint: event.color_hint.clone(),
        original_zone: Some(event.zone.clone()),
        ..EventMeta::default()
    };
    project_span(cal, zone, &event.id, DisplayEventKind::Manual, event.start, event.end, &meta)
}

/// Project an absolute `[start, end)` span into `zone`, splitting at every
/// local midnight it crosses.
///
/// Each piece is clipped to its local day except the first (kept open at its
/// start) and the last (kept open at its end); the pieces partition the
/// original interval exactly.
pub fn project_span(
    cal: &dyn CalendarArithmetic,
    zone: &str,
    id: &str,
    kind: DisplayEventKind,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    meta: &EventMeta,
) -> Result<Vec<DisplayEvent>> {
    let whole = |end: Option<DateTime<Utc>>| -> Result<Vec<DisplayEvent>> {
        let end_zoned = match end {
            Some(instant) => Some(cal.to_zoned(instant, zone)?),
            None => None,
        };
        Ok(vec![DisplayEvent {
            id: id.to_string(),
            kind,
            start_zoned: cal.to_zoned(start, zone)?,
            end_zoned,
            split_from: None,
            split_part: None,
            split_index: None,
            anchor_id: meta.anchor_id.clone(),
            shift_from_previous_wake_hours: meta.shift_from_previous_wake_hours,
            title: meta.title.clone(),
            color_hint: meta.color_hint.clone(),
            original_zone: meta.original_zone.clone(),
        }])
    };

    let Some(end) = end else {
        return whole(None);
    };

    let start_date = cal.local_date(start, zone)?;
    let end_date = last_covered_date(cal, zone, end)?;
    if end_date <= start_date {
        return whole(Some(end));
    }

    let total = (end_date - start_date).num_days() as u32 + 1;
    let mut pieces = Vec::with_capacity(total as usize);
    let mut date = start_date;
    let mut part: u32 = 1;

    while date <= end_date {
        let piece_start = if part == 1 { start } else { cal.local_midnight(zone, date)? };
        let piece_end = if date == end_date {
            end
        } else {
            let next = next_date(date)?;
            cal.local_midnight(zone, next)?
        };

        let piece_id = match part {
            1 => format!("{id}{SPLIT_START_SUFFIX}"),
            2 => format!("{id}{SPLIT_END_SUFFIX}"),
            n => format!("{id}{SPLIT_END_SUFFIX}{n}"),
        };
        let split_part = if part == 1 { SplitPart::Start } else { SplitPart::End };

        pieces.push(DisplayEvent {
            id: piece_id,
            kind,
            start_zoned: cal.to_zoned(piece_start, zone)?,
            end_zoned: Some(cal.to_zoned(piece_end, zone)?),
            split_from: Some(id.to_string()),
            split_part: Some(split_part),
            split_index: Some(SplitIndex { part, total }),
            anchor_id: meta.anchor_id.clone(),
            shift_from_previous_wake_hours: meta.shift_from_previous_wake_hours,
            title: meta.title.clone(),
            color_hint: meta.color_hint.clone(),
            original_zone: meta.original_zone.clone(),
        });

        date = next_date(date)?;
        part += 1;
    }

    Ok(pieces)
}

/// Last local date an exclusive end instant actually covers.
fn last_covered_date(
    cal: &dyn CalendarArithmetic,
    zone: &str,
    end: DateTime<Utc>,
) -> Result<NaiveDate> {
    let date = cal.local_date(end, zone)?;
    if cal.local_midnight(zone, date)? == end {
        return date
            .pred_opt()
            .ok_or_else(|| PlanError::Internal(format!("date underflow before {date}")));
    }
    Ok(date)
}

fn next_date(date: NaiveDate) -> Result<NaiveDate> {
    date.succ_opt()
        .ok_or_else(|| PlanError::Internal(format!("date overflow after {date}")))
}
