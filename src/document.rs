//! The loaded specification text.
//!
//! A `Document` is read once and never mutated. `\r\n`, lone `\r` and `\n` all end a line, so
//! a file ending in a newline carries a trailing empty line and line numbers match what an
//! editor shows.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
/// Ordered lines of the source text (0-indexed storage).
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Read a UTF-8 markdown document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Load`] if the file is missing, unreadable, or not valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded specification");
        Ok(Self::from_text(text))
    }

    #[must_use]
    /// Build a document from text already in memory.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = regex!(r"\r\n|\r|\n")
            .split(&text)
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    #[must_use]
    /// All lines in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    /// A single line, if `index` is in range.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    #[must_use]
    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// Whether the document holds no text at all.
    ///
    /// An empty source still splits into one empty line, so `len()` is 1 when this is true.
    pub fn is_empty(&self) -> bool {
        matches!(self.lines.as_slice(), [only] if only.is_empty())
    }

    #[must_use]
    /// Clean the half-open line range `[start, end)`, clamped to the document.
    ///
    /// Returns `None` when no start is given, mirroring a section that was not found.
    pub fn extract(&self, start: Option<usize>, end: usize) -> Option<String> {
        let start = start?;
        let end = end.min(self.lines.len());
        let start = start.min(end);
        Some(crate::section::clean(&self.lines[start..end]))
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
