use thiserror::Error;

/// Application-level errors (command-line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] roomwise_service::error::ServiceError),

    #[error(transparent)]
    CoreError(#[from] roomwise_core::error::CoreError),

    #[error(transparent)]
    TimeError(#[from] roomwise_time::TimeError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
