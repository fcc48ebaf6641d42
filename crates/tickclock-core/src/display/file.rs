use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{DisplayError, DisplayWriter};

/// A display slot backed by a file.
///
/// Each write lands in a temp file next to the target and is renamed over
/// it, so readers never observe a half-written timestamp. The text is
/// terminated with a newline.
#[derive(Debug, Clone)]
pub struct FileDisplay {
    path: PathBuf,
}

impl FileDisplay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn target_missing(&self) -> DisplayError {
        DisplayError::TargetMissing {
            target: self.path.display().to_string(),
        }
    }
}

/// The directory can vanish between any two steps of a write.
fn is_missing_dir(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

impl DisplayWriter for FileDisplay {
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        let mut tmp = NamedTempFile::new_in(self.parent_dir()).map_err(|e| {
            if is_missing_dir(&e) {
                self.target_missing()
            } else {
                e.into()
            }
        })?;
        writeln!(tmp, "{text}")?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| {
            if is_missing_dir(&e.error) {
                self.target_missing()
            } else {
                DisplayError::PersistFailed {
                    path: self.path.clone(),
                    source: e.error,
                }
            }
        })?;

        debug!(
            event = "core.display.file_written",
            path = %self.path.display(),
            bytes = text.len() + 1
        );
        Ok(())
    }
}
