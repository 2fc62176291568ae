//! Day bucketing
//!
//! Groups projected (and split) display events by the local calendar date of
//! their start, in ascending date order. Dates with no events are not
//! synthesized.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use zoneshift_domain::{DisplayDay, DisplayEvent};

/// Group display events into ordered day buckets.
///
/// Events within a day are ordered by start; the sort is stable, so events
/// sharing a start instant keep their insertion order.
pub fn bucketize(events: Vec<DisplayEvent>) -> Vec<DisplayDay> {
    let mut buckets: BTreeMap<NaiveDate, Vec<DisplayEvent>> = BTreeMap::new();
    for event in events {
        buckets.entry(event.local_date()).or_default().push(event);
    }

    buckets
        .into_iter()
        .map(|(date, mut events)| {
            events.sort_by(|a, b| a.start_zoned.cmp(&b.start_zoned));
            DisplayDay { date, events }
        })
        .collect()
}
