use crate::errors::TickclockError;

#[derive(Debug, thiserror::Error)]
pub enum TickerError {
    #[error("Invalid tick period: must be greater than 0")]
    InvalidPeriod,

    #[error("Ticker task already joined")]
    AlreadyJoined,

    #[error("Ticker task failed: {message}")]
    TaskFailed { message: String },
}

impl TickclockError for TickerError {
    fn error_code(&self) -> &'static str {
        match self {
            TickerError::InvalidPeriod => "TICKER_INVALID_PERIOD",
            TickerError::AlreadyJoined => "TICKER_ALREADY_JOINED",
            TickerError::TaskFailed { .. } => "TICKER_TASK_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, TickerError::InvalidPeriod)
    }
}
