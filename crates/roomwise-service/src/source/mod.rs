//! Where meetings come from, and the per-week cache in front of it.

use std::fmt;

use chrono::{DateTime, Days, NaiveDate, Utc};
use roomwise_time::Tz;
use roomwise_time::local::local_midnight;

use crate::calendar::week::week_start;
use crate::error::{ServiceError, ServiceResult};
use crate::model::Meeting;

pub mod cache;
pub mod json_file;

pub use cache::{CacheStats, CachedSource, WeekCache};
pub use json_file::JsonFileSource;

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// ## Errors
    ///
    /// Returns `ServiceError::InvalidRange` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> ServiceResult<Self> {
        if start > end {
            return Err(ServiceError::InvalidRange(format!("{start} is after {end}")));
        }
        Ok(Self { start, end })
    }

    /// The range covering only `date`.
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The Sunday-to-Saturday week containing `date`.
    #[must_use]
    pub fn week_of(date: NaiveDate) -> Self {
        let start = week_start(date);
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Half-open instant bounds `[start midnight, day after end midnight)` in `zone`.
    #[must_use]
    pub fn instant_bounds(&self, zone: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
        let upper = self.end.succ_opt().map_or(DateTime::<Utc>::MAX_UTC, |next| {
            local_midnight(next, zone)
        });
        (local_midnight(self.start, zone), upper)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A store that can list the meetings relevant to a date range.
///
/// Implementations return every non-recurring meeting starting inside the
/// range and every recurring meeting whose series has begun by the end of the
/// range. Occurrence filtering happens later.
pub trait MeetingSource {
    /// ## Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn meetings_between(
        &self,
        range: DateRange,
    ) -> impl Future<Output = ServiceResult<Vec<Meeting>>> + Send;
}
