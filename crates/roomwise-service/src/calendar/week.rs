//! Week navigation and week view assembly.

use chrono::{Datelike, Days, NaiveDate};
use roomwise_time::format::day_header;
use serde::Serialize;

use super::entry::CalendarEntry;
use super::layout::{PositionedEntry, layout_day};
use super::recurrence::OccurrenceResolver;
use crate::filter::RoomFilter;
use crate::model::Meeting;

/// The Sunday on or before `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

/// Seven consecutive dates beginning at `start`.
#[must_use]
pub fn week_days(start: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take(7).collect()
}

/// Every occurrence on `date` among `meetings`, in input order.
#[must_use]
pub fn expand_day(
    meetings: &[Meeting],
    date: NaiveDate,
    resolver: &OccurrenceResolver,
) -> Vec<CalendarEntry> {
    meetings
        .iter()
        .filter_map(|meeting| {
            resolver
                .occurrence_on(meeting, date)
                .map(|occurrence| CalendarEntry::new(meeting, &occurrence, resolver.zone()))
        })
        .collect()
}

/// One column of the week grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayColumn {
    pub date: NaiveDate,
    /// `"MON"`
    pub header: String,
    pub day_number: u32,
    pub entries: Vec<PositionedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekView {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<DayColumn>,
}

/// The laid-out column for a single `date`.
#[must_use]
pub fn build_day_column(
    meetings: &[Meeting],
    date: NaiveDate,
    filter: &RoomFilter,
    resolver: &OccurrenceResolver,
) -> DayColumn {
    let entries = expand_day(meetings, date, resolver);
    DayColumn {
        date,
        header: day_header(date),
        day_number: date.day(),
        entries: layout_day(&entries, date, filter),
    }
}

/// ## Summary
/// Builds the Sunday-to-Saturday view containing `anchor`.
///
/// Each day's meetings are resolved to occurrences, then laid out with
/// [`layout_day`] under `filter`.
#[must_use]
pub fn build_week_view(
    meetings: &[Meeting],
    anchor: NaiveDate,
    filter: &RoomFilter,
    resolver: &OccurrenceResolver,
) -> WeekView {
    let start = week_start(anchor);
    let days: Vec<DayColumn> = week_days(start)
        .into_iter()
        .map(|date| build_day_column(meetings, date, filter, resolver))
        .collect();

    tracing::debug!(
        %start,
        meetings = meetings.len(),
        placed = days.iter().map(|d| d.entries.len()).sum::<usize>(),
        "Built week view"
    );

    WeekView {
        start,
        end: start + Days::new(6),
        days,
    }
}
