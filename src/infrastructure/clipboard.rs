//! Clipboard sinks for copy actions

use std::io::{self, Write};
use std::sync::Mutex;

use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

use crate::domain::widget::Clipboard;
use crate::domain::DomainError;

/// Writes to the system clipboard through the OSC 52 terminal escape.
///
/// Supported by most modern terminal emulators and forwarded over SSH. The
/// sequence is written to the wrapped sink, stderr by default, so that
/// command output on stdout can be piped untouched.
#[derive(Debug)]
pub struct TerminalClipboard<W: Write + Send = io::Stderr> {
    out: Mutex<W>,
}

impl TerminalClipboard<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W, DomainError> {
        self.out
            .into_inner()
            .map_err(|_| DomainError::clipboard("Clipboard sink poisoned"))
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write + Send> Clipboard for TerminalClipboard<W> {
    fn write_text(&self, text: &str) -> Result<(), DomainError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| DomainError::clipboard("Clipboard sink poisoned"))?;

        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| DomainError::clipboard(e.to_string()))?;

        debug!(bytes = text.len(), "Copied to terminal clipboard");
        Ok(())
    }
}

/// Keeps the last copied text in memory
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for InMemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), DomainError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| DomainError::clipboard("Clipboard poisoned"))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
