//! Day-grid layout: which entries appear on a day and where they sit.
//!
//! Entries overlap for layout purposes only when their local start and end
//! times are identical. Overlapping entries split the column width equally in
//! input order. Partially overlapping entries are not grouped.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime, TimeDelta, Timelike};
use serde::Serialize;

use super::entry::{CalendarEntry, TimeKey};
use crate::filter::RoomFilter;

/// A calendar entry with its horizontal slot in the day column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedEntry {
    #[serde(flatten)]
    pub entry: CalendarEntry,
    /// 0-based slot among entries with the same time key.
    pub position_index: usize,
    /// Number of entries sharing the time key.
    pub total_overlapping: usize,
}

impl PositionedEntry {
    /// Share of the column width this entry occupies.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "overlap groups are tiny")]
    pub fn width_fraction(&self) -> f64 {
        1.0 / self.total_overlapping.max(1) as f64
    }

    /// Left edge as a share of the column width.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "overlap groups are tiny")]
    pub fn offset_fraction(&self) -> f64 {
        self.position_index as f64 / self.total_overlapping.max(1) as f64
    }
}

impl AsRef<CalendarEntry> for PositionedEntry {
    fn as_ref(&self) -> &CalendarEntry {
        &self.entry
    }
}

/// ## Summary
/// Lays out the entries for `date`.
///
/// Entries on other dates and entries whose room is switched off in `filter`
/// are dropped. The rest are grouped by [`TimeKey`]; groups are emitted in
/// order of first appearance and members keep their input order.
///
/// Running the result back through `layout_day` yields the same positions.
pub fn layout_day<I, E>(entries: I, date: NaiveDate, filter: &RoomFilter) -> Vec<PositionedEntry>
where
    I: IntoIterator<Item = E>,
    E: AsRef<CalendarEntry>,
{
    let mut groups: Vec<Vec<CalendarEntry>> = Vec::new();
    let mut slots: HashMap<TimeKey, usize> = HashMap::new();

    for item in entries {
        let entry = item.as_ref();
        if entry.date != date {
            continue;
        }
        if !filter.includes_room(&entry.room) {
            tracing::trace!(meeting = %entry.meeting_id, room = %entry.room, "Room filtered out");
            continue;
        }

        let slot = *slots.entry(entry.time_key()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(entry.clone());
    }

    tracing::trace!(%date, groups = groups.len(), "Laid out day");

    groups
        .into_iter()
        .flat_map(|group| {
            let total = group.len();
            group
                .into_iter()
                .enumerate()
                .map(move |(position_index, entry)| PositionedEntry {
                    entry,
                    position_index,
                    total_overlapping: total,
                })
        })
        .collect()
}

/// Vertical measurements of the day grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub hour_height: f64,
    pub header_offset: f64,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            hour_height: 100.0,
            header_offset: 40.0,
        }
    }
}

impl GridGeometry {
    /// Distance from the first hour row to `time`.
    #[must_use]
    pub fn top_of(&self, time: NaiveTime) -> f64 {
        f64::from(time.hour()) * self.hour_height
            + f64::from(time.minute()) * self.hour_height / 60.0
    }

    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "minute counts are small")]
    pub fn height_of(&self, duration: TimeDelta) -> f64 {
        duration.num_minutes().max(0) as f64 * self.hour_height / 60.0
    }

    /// Position of the current-time indicator, measured from the top of the
    /// column including its header.
    #[must_use]
    pub fn current_time_offset(&self, now: NaiveTime) -> f64 {
        self.top_of(now) + self.header_offset
    }
}
