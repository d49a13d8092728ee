//! Calendar projection: occurrences, entries, day layout and week views.

pub mod details;
pub mod entry;
pub mod layout;
pub mod recurrence;
pub mod week;

pub use details::{MeetingDetails, describe_recurrence, meeting_details};
pub use entry::{CalendarEntry, TimeKey};
pub use layout::{GridGeometry, PositionedEntry, layout_day};
pub use recurrence::{Occurrence, OccurrenceResolver};
pub use week::{
    DayColumn, WeekView, build_day_column, build_week_view, expand_day, week_days, week_start,
};

#[cfg(test)]
mod layout_tests;
