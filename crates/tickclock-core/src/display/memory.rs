use std::sync::{Arc, Mutex, MutexGuard};

use super::{DisplayError, DisplayWriter};

#[derive(Debug, Default)]
struct MemoryState {
    current: Option<String>,
    writes: usize,
}

/// In-process display slot. Clones share the same text, so one clone can be
/// handed to the updater while another is read by the owner.
///
/// Only the latest text is kept, so a long-running ticker holds constant memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text most recently written, if any.
    pub fn current(&self) -> Option<String> {
        self.lock().current.clone()
    }

    /// Number of writes so far.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DisplayWriter for MemoryDisplay {
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        let mut state = self.lock();
        let current = state.current.get_or_insert_with(String::new);
        current.clear();
        current.push_str(text);
        state.writes += 1;
        Ok(())
    }
}
