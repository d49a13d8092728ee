//! Occurrence resolution for recurring meetings.
//!
//! Calendar dates and times of day are evaluated in the resolver's display
//! zone. The resolver never fails: missing or malformed recurrence data narrows
//! a meeting to its original date.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use roomwise_time::Tz;
use roomwise_time::local::{combine, local_date, local_time};
use serde::Serialize;

use crate::model::{Meeting, RecurrenceRule};

/// One concrete instance of a meeting on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Occurrence {
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Decides on which dates a meeting occurs and where each occurrence lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccurrenceResolver {
    zone: Tz,
}

impl Default for OccurrenceResolver {
    fn default() -> Self {
        Self::new(Tz::America__New_York)
    }
}

impl OccurrenceResolver {
    #[must_use]
    pub const fn new(zone: Tz) -> Self {
        Self { zone }
    }

    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// ## Summary
    /// Whether `meeting` has an occurrence on `date`.
    ///
    /// - No rule: only the start date matches.
    /// - Weekly: the weekday must be listed, and the whole weeks between the
    ///   series start date and `date` (in either direction) must be a
    ///   multiple of the interval.
    /// - Unsupported kinds match every date.
    #[must_use]
    pub fn occurs_on(&self, meeting: &Meeting, date: NaiveDate) -> bool {
        let start_date = local_date(meeting.start_date_time, self.zone);

        match meeting.recurrence_rule() {
            None => date == start_date,
            Some(RecurrenceRule::Weekly { interval, days }) => {
                if !days.contains(&date.weekday()) {
                    return false;
                }
                let elapsed_days = date.signed_duration_since(start_date).num_days().unsigned_abs();
                let elapsed_weeks = elapsed_days / 7;
                elapsed_weeks % u64::from(interval.get()) == 0
            }
            Some(RecurrenceRule::Unsupported { kind }) => {
                tracing::trace!(
                    meeting = %meeting.mid,
                    kind = %kind,
                    "Unsupported recurrence kind, matching every date"
                );
                true
            }
        }
    }

    /// ## Summary
    /// Places `meeting` on `date`, keeping its time of day and duration.
    ///
    /// The start is the original local time of day on `date`; the end is the
    /// new start plus the original duration, so `end - start` is unchanged.
    /// Callers are expected to have checked [`Self::occurs_on`] first.
    #[must_use]
    pub fn project_occurrence(&self, meeting: &Meeting, date: NaiveDate) -> Occurrence {
        let time_of_day = local_time(meeting.start_date_time, self.zone);
        let start = combine(date, time_of_day, self.zone);
        Occurrence {
            date,
            start,
            end: start + meeting.duration(),
        }
    }

    /// The occurrence of `meeting` on `date`, if it has one.
    #[must_use]
    pub fn occurrence_on(&self, meeting: &Meeting, date: NaiveDate) -> Option<Occurrence> {
        self.occurs_on(meeting, date)
            .then(|| self.project_occurrence(meeting, date))
    }
}
