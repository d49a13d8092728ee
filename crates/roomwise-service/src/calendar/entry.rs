use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};
use roomwise_core::types::{CalType, ModeType};
use roomwise_time::Tz;
use roomwise_time::local::local_time;
use serde::Serialize;

use super::recurrence::Occurrence;
use crate::model::Meeting;

/// A meeting placed on one calendar date, ready for the day grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub meeting_id: String,
    pub title: String,
    pub room: String,
    pub mode_type: ModeType,
    pub cal_type: CalType,
    pub date: NaiveDate,
    /// Local wall-clock start in the display zone.
    pub start_time: NaiveTime,
    /// Local wall-clock end in the display zone.
    pub end_time: NaiveTime,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CalendarEntry {
    #[must_use]
    pub fn new(meeting: &Meeting, occurrence: &Occurrence, zone: Tz) -> Self {
        Self {
            meeting_id: meeting.mid.clone(),
            title: meeting.title.clone(),
            room: meeting.room.clone(),
            mode_type: meeting.mode_type,
            cal_type: meeting.cal_type,
            date: occurrence.date,
            start_time: local_time(occurrence.start, zone),
            end_time: local_time(occurrence.end, zone),
            start: occurrence.start,
            end: occurrence.end,
        }
    }

    /// Key that decides which entries share a row slot.
    #[must_use]
    pub fn time_key(&self) -> TimeKey {
        TimeKey::new(self.start_time, self.end_time)
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl AsRef<CalendarEntry> for CalendarEntry {
    fn as_ref(&self) -> &CalendarEntry {
        self
    }
}

/// Local start and end time truncated to whole seconds.
///
/// Two entries overlap for layout purposes only when their keys are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeKey {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeKey {
    #[must_use]
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: start.with_nanosecond(0).unwrap_or(start),
            end: end.with_nanosecond(0).unwrap_or(end),
        }
    }
}

impl std::fmt::Display for TimeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M:%S"),
            self.end.format("%H:%M:%S")
        )
    }
}
