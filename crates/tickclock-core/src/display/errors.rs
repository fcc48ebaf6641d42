use std::path::PathBuf;

use crate::errors::TickclockError;

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// The slot behind the writer is gone. Callers treat this as "no target".
    #[error("Display target '{target}' is not present")]
    TargetMissing { target: String },

    /// The consumer reading the slot went away, e.g. a broken pipe. No later
    /// write can succeed.
    #[error("Display target '{target}' was closed by its reader")]
    TargetClosed { target: String },

    #[error("Display target is misconfigured: {message}")]
    InvalidTarget { message: String },

    #[error("Failed to replace '{path}': {source}")]
    PersistFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl DisplayError {
    pub fn is_target_missing(&self) -> bool {
        matches!(self, DisplayError::TargetMissing { .. })
    }

    pub fn is_target_closed(&self) -> bool {
        matches!(self, DisplayError::TargetClosed { .. })
    }
}

impl TickclockError for DisplayError {
    fn error_code(&self) -> &'static str {
        match self {
            DisplayError::TargetMissing { .. } => "DISPLAY_TARGET_MISSING",
            DisplayError::TargetClosed { .. } => "DISPLAY_TARGET_CLOSED",
            DisplayError::InvalidTarget { .. } => "DISPLAY_INVALID_TARGET",
            DisplayError::PersistFailed { .. } => "DISPLAY_PERSIST_FAILED",
            DisplayError::Io { .. } => "DISPLAY_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, DisplayError::InvalidTarget { .. })
    }
}
