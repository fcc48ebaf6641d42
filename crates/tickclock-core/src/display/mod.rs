//! # Display targets
//!
//! The updater never looks its output up by name. It is handed a
//! [`DisplayWriter`] capability and overwrites that writer's visible text on
//! every tick.
//!
//! Concrete writers:
//! - [`TerminalDisplay`] - a terminal line (rewritten in place on a TTY)
//! - [`FileDisplay`] - a file replaced atomically, for status bars that poll it
//! - [`MemoryDisplay`] - shared in-process text, for embedding and tests

pub mod errors;
pub mod file;
pub mod memory;
pub mod terminal;

pub use errors::DisplayError;
pub use file::FileDisplay;
pub use memory::MemoryDisplay;
pub use terminal::{TerminalDisplay, TerminalMode};

use crate::config::types::{DisplayConfig, TargetKind};

/// Capability to overwrite the text of one display slot.
pub trait DisplayWriter: Send {
    /// Replace the slot's visible text.
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Called once when the owner tears the display down.
    fn finish(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

impl<W: DisplayWriter + ?Sized> DisplayWriter for Box<W> {
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        (**self).write_text(text)
    }

    fn finish(&mut self) -> Result<(), DisplayError> {
        (**self).finish()
    }
}

/// Resolve a display configuration into a writer.
///
/// `target = "none"` resolves to `Ok(None)`: the clock runs without a slot
/// and every tick is a no-op.
pub fn open_target(config: &DisplayConfig) -> Result<Option<Box<dyn DisplayWriter>>, DisplayError> {
    match config.target_kind() {
        TargetKind::None => Ok(None),
        TargetKind::Stdout => Ok(Some(Box::new(TerminalDisplay::stdout()))),
        TargetKind::File => {
            let path = config
                .path
                .as_ref()
                .ok_or_else(|| DisplayError::InvalidTarget {
                    message: "target 'file' requires a path".to_string(),
                })?;
            Ok(Some(Box::new(FileDisplay::new(path))))
        }
    }
}
