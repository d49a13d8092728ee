//! Conversions between UTC instants and calendar dates / wall-clock times in
//! a display zone.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{TimeError, TimeResult};

/// Calendar date of `instant` as seen in `zone`.
#[must_use]
pub fn local_date(instant: DateTime<Utc>, zone: Tz) -> NaiveDate {
    instant.with_timezone(&zone).date_naive()
}

/// Wall-clock time of `instant` as seen in `zone`, including sub-second precision.
#[must_use]
pub fn local_time(instant: DateTime<Utc>, zone: Tz) -> NaiveTime {
    instant.with_timezone(&zone).time()
}

/// ## Summary
/// Converts a wall-clock datetime in `zone` to UTC.
///
/// Ambiguous times (DST fold) resolve to the earlier instant.
///
/// ## Errors
///
/// Returns `TimeError::NonExistentTime` if the wall-clock time falls in a DST gap.
pub fn convert_to_utc(local: NaiveDateTime, zone: Tz) -> TimeResult<DateTime<Utc>> {
    match zone.from_local_datetime(&local) {
        LocalResult::None => Err(TimeError::NonExistentTime(format!(
            "{local} in timezone {}",
            zone.name()
        ))),
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _later) => Ok(earlier.with_timezone(&Utc)),
    }
}

/// ## Summary
/// Converts a wall-clock datetime in `zone` to UTC without failing.
///
/// Times inside a DST gap are shifted forward by one hour. If the shifted time
/// is still unrepresentable the wall-clock value is read as UTC.
#[must_use]
pub fn convert_to_utc_lenient(local: NaiveDateTime, zone: Tz) -> DateTime<Utc> {
    match convert_to_utc(local, zone) {
        Ok(dt) => dt,
        Err(err) => {
            tracing::trace!(error = %err, "Shifting wall-clock time out of DST gap");
            let shifted = local + TimeDelta::hours(1);
            convert_to_utc(shifted, zone).unwrap_or_else(|_err| Utc.from_utc_datetime(&local))
        }
    }
}

/// First instant of `date` in `zone`.
#[must_use]
pub fn local_midnight(date: NaiveDate, zone: Tz) -> DateTime<Utc> {
    convert_to_utc_lenient(date.and_time(NaiveTime::MIN), zone)
}

/// Places a wall-clock time on a calendar date in `zone`.
#[must_use]
pub fn combine(date: NaiveDate, time: NaiveTime, zone: Tz) -> DateTime<Utc> {
    convert_to_utc_lenient(date.and_time(time), zone)
}
