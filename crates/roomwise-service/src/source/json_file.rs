//! Meetings read from a JSON array on disk.

use std::path::{Path, PathBuf};

use roomwise_time::Tz;
use roomwise_time::local::local_date;

use super::{DateRange, MeetingSource};
use crate::error::ServiceResult;
use crate::model::Meeting;

/// ## Summary
/// Keeps the meetings relevant to `range`.
///
/// Non-recurring meetings are kept when their start instant falls inside the
/// range as seen in `zone`. Recurring meetings are kept when their series starts
/// on or before the last day of the range.
#[must_use]
pub fn select_for_range(meetings: Vec<Meeting>, range: DateRange, zone: Tz) -> Vec<Meeting> {
    let (lower, upper) = range.instant_bounds(zone);
    meetings
        .into_iter()
        .filter(|meeting| {
            if meeting.is_recurring {
                local_date(meeting.start_date_time, zone) <= range.end()
            } else {
                lower <= meeting.start_date_time && meeting.start_date_time < upper
            }
        })
        .collect()
}

/// A [`MeetingSource`] backed by a JSON file holding an array of meetings.
///
/// The file is re-read on every query.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    zone: Tz,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, zone: Tz) -> Self {
        Self {
            path: path.into(),
            zone,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ## Summary
    /// Reads and parses every meeting in the file.
    ///
    /// ## Errors
    ///
    /// Returns `ServiceError::IoError` if the file cannot be read, or
    /// `ServiceError::JsonError` if it is not a JSON array of meetings.
    pub async fn load_all(&self) -> ServiceResult<Vec<Meeting>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let meetings: Vec<Meeting> = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), count = meetings.len(), "Loaded meetings");
        Ok(meetings)
    }
}

impl MeetingSource for JsonFileSource {
    async fn meetings_between(&self, range: DateRange) -> ServiceResult<Vec<Meeting>> {
        let meetings = self.load_all().await?;
        Ok(select_for_range(meetings, range, self.zone))
    }
}
