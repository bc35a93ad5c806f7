//! Section location and cleanup over a loaded document.
//!
//! A section represents everything nested under one heading: it begins at the heading line and
//! runs up to, but not including, the next heading of equal or shallower depth. Sections are
//! computed per query and never stored.

use crate::document::Document;
use crate::heading::{heading_depth, parse_heading};
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Half-open line range `[line_start, line_end)` rooted at a heading.
pub struct Section {
    /// Heading line text without markup symbols.
    pub title: String,
    /// Nesting depth of the heading (marker count).
    pub level: usize,
    /// Index of the heading line.
    pub line_start: usize,
    /// Index of the next heading at the same or shallower depth, or the document length.
    pub line_end: usize,
}

impl Section {
    #[must_use]
    /// Number of lines covered, heading included.
    pub fn len(&self) -> usize {
        self.line_end - self.line_start
    }

    #[must_use]
    /// Whether the range is empty.
    pub fn is_empty(&self) -> bool {
        self.line_end == self.line_start
    }
}

#[must_use]
/// Find the first line at or after `start` matching `pattern` and return its section.
///
/// Returns `None` when nothing matches; absence is never an error.
pub fn locate(document: &Document, pattern: &Regex, start: usize) -> Option<Section> {
    let index = document
        .lines()
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, line)| pattern.is_match(line))
        .map(|(i, _)| i)?;
    locate_at(document, index)
}

#[must_use]
/// Section whose heading sits exactly at line `index`.
pub fn locate_at(document: &Document, index: usize) -> Option<Section> {
    let lines = document.lines();
    let heading = lines.get(index)?;
    let level = heading_depth(heading);

    let line_end = lines
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, line)| parse_heading(line).is_some_and(|h| h.depth <= level))
        .map_or(lines.len(), |(i, _)| i);

    let title = parse_heading(heading).map_or_else(|| heading.trim().to_string(), |h| h.title);

    Some(Section {
        title,
        level,
        line_start: index,
        line_end,
    })
}

fn is_boilerplate(line: &str) -> bool {
    let trimmed = line.trim();
    regex!(r"^\d+\s*$").is_match(trimmed)
        || line.contains("Copyright ©")
        || line.contains("Copyright Â©")
        || regex!(r"^\d+\.\s+Apple-defined\s+(Services|Characteristics)\s*$").is_match(trimmed)
}

#[must_use]
/// Strip page numbers, copyright lines and repeated chapter banners, collapse blank runs to a
/// single blank line, and trim the joined block.
pub fn clean<S: AsRef<str>>(lines: &[S]) -> String {
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    let mut prev_blank = false;

    for line in lines.iter().map(AsRef::as_ref) {
        if is_boilerplate(line) {
            continue;
        }
        let is_blank = line.trim().is_empty();
        if is_blank && prev_blank {
            continue;
        }
        kept.push(line);
        prev_blank = is_blank;
    }

    kept.join("\n").trim().to_string()
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
