/// Error during timezone resolution or conversion.
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Non-existent wall-clock time during a DST gap.
    #[error("Non-existent time (DST gap): {0}")]
    NonExistentTime(String),
}

pub type TimeResult<T> = std::result::Result<T, TimeError>;
