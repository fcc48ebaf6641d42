use std::io::{self, IsTerminal, Write};

use super::{DisplayError, DisplayWriter};

/// ANSI: return to column 0 and clear the line.
const REWRITE_LINE: &str = "\r\x1b[2K";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    /// Overwrite the current line on every tick.
    Inline,
    /// Print one line per tick. Used when output is piped.
    Lines,
}

/// A display slot backed by a terminal (or anything implementing `Write`).
#[derive(Debug)]
pub struct TerminalDisplay<W: Write + Send = io::Stdout> {
    out: W,
    mode: TerminalMode,
    dirty: bool,
    closed: bool,
}

impl TerminalDisplay<io::Stdout> {
    /// Stdout, rewritten in place when attached to a TTY.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let mode = if out.is_terminal() {
            TerminalMode::Inline
        } else {
            TerminalMode::Lines
        };
        Self::new(out, mode)
    }
}

impl<W: Write + Send> TerminalDisplay<W> {
    pub fn new(out: W, mode: TerminalMode) -> Self {
        Self {
            out,
            mode,
            dirty: false,
            closed: false,
        }
    }

    pub fn mode(&self) -> TerminalMode {
        self.mode
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, text: &str) -> io::Result<()> {
        match self.mode {
            TerminalMode::Inline => {
                write!(self.out, "{REWRITE_LINE}{text}")?;
                self.dirty = true;
            }
            TerminalMode::Lines => writeln!(self.out, "{text}")?,
        }
        self.out.flush()
    }

    /// A broken pipe means the reader is gone for good.
    fn classify(&mut self, error: io::Error) -> DisplayError {
        if error.kind() == io::ErrorKind::BrokenPipe {
            self.closed = true;
            self.closed_error()
        } else {
            error.into()
        }
    }

    fn closed_error(&self) -> DisplayError {
        DisplayError::TargetClosed {
            target: "terminal".to_string(),
        }
    }
}

impl<W: Write + Send> DisplayWriter for TerminalDisplay<W> {
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        if self.closed {
            return Err(self.closed_error());
        }
        self.write_frame(text).map_err(|e| self.classify(e))
    }

    /// Leaves the cursor on a fresh line after inline output.
    fn finish(&mut self) -> Result<(), DisplayError> {
        if self.dirty && !self.closed {
            writeln!(self.out)
                .and_then(|()| self.out.flush())
                .map_err(|e| self.classify(e))?;
            self.dirty = false;
        }
        Ok(())
    }
}
