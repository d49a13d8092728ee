pub mod meeting;
pub mod recurrence;

pub use meeting::Meeting;
pub use recurrence::{RecurrencePattern, RecurrenceRule};
