//! One-shot sinks for the rendered output: a text file or the terminal clipboard.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

/// File name used when exporting the rendered prompt.
pub const DEFAULT_FILE_NAME: &str = "prompt-complexo.txt";

/// Content type of the exported file.
pub const CONTENT_TYPE: &str = "text/plain";

/// Error type for output delivery.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(#[source] std::io::Error),
}

/// A destination for the rendered output.
pub trait OutputSink {
    /// Hand the text over. Only success or failure is reported back.
    fn deliver(&self, text: &str) -> Result<(), ExportError>;

    /// Human-readable destination, for status messages.
    fn describe(&self) -> String;
}

/// Writes the output to a plain text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExport {
    dir: PathBuf,
    file_name: String,
}

impl Default for FileExport {
    fn default() -> Self {
        Self::new()
    }
}

impl FileExport {
    /// Export to `prompt-complexo.txt` in the current directory.
    pub fn new() -> Self {
        Self {
            dir: PathBuf::from("."),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Set the target directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set the file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Get the target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the exported file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl OutputSink for FileExport {
    fn deliver(&self, text: &str) -> Result<(), ExportError> {
        let path = self.path();
        match fs::write(&path, text) {
            Ok(()) => {
                info!("exported {} bytes to {}", text.len(), path.display());
                Ok(())
            }
            Err(source) => {
                warn!("export to {} failed: {source}", path.display());
                Err(ExportError::Write { path, source })
            }
        }
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

/// Copies the output to the system clipboard through the terminal (OSC 52).
///
/// Works in terminals that honour the escape sequence, including over SSH.
#[cfg(feature = "clipboard")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Clipboard;

#[cfg(feature = "clipboard")]
impl Clipboard {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "clipboard")]
impl OutputSink for Clipboard {
    fn deliver(&self, text: &str) -> Result<(), ExportError> {
        use crossterm::clipboard::CopyToClipboard;

        let mut stdout = std::io::stdout();
        crossterm::execute!(stdout, CopyToClipboard::to_clipboard_from(text)).map_err(|err| {
            warn!("clipboard copy failed: {err}");
            ExportError::Clipboard(err)
        })?;
        info!("copied {} bytes to clipboard", text.len());
        Ok(())
    }

    fn describe(&self) -> String {
        "clipboard".to_string()
    }
}
