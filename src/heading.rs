//! Heading recognition for ATX-style markdown headings (# syntax).
//!
//! Marker counting lives here and nowhere else: the locator, the listings and the search all
//! ask this module for a line's depth or its numbered title.

use std::fmt;

/// Depth assumed for a located line that carries no `#` markers.
pub const DEFAULT_DEPTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A markdown heading line split into marker depth and title text.
pub struct Heading {
    /// Count of leading `#` characters.
    pub depth: usize,
    /// Remaining text after the markers, trimmed.
    pub title: String,
}

#[must_use]
/// Parse a line as a heading: one or more `#` followed by whitespace.
pub fn parse_heading(line: &str) -> Option<Heading> {
    let caps = regex!(r"^(#+)\s(.*)").captures(line)?;
    Some(Heading {
        depth: caps[1].len(),
        title: caps[2].trim().to_string(),
    })
}

#[must_use]
/// Depth of a line that was matched as a section start.
///
/// Lines without leading markers fall back to [`DEFAULT_DEPTH`].
pub fn heading_depth(line: &str) -> usize {
    regex!(r"^(#+)")
        .find(line)
        .map_or(DEFAULT_DEPTH, |m| m.as_str().len())
}

#[must_use]
/// Whether a line is an entity-definition heading in any chapter, e.g. `##### 8.3 Lightbulb`.
pub fn is_entity_heading(line: &str) -> bool {
    regex!(r"^#####\s+\d+\.\d+\s+").is_match(line)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The two numbered chapters holding entity definitions.
pub enum Namespace {
    /// Chapter 8, `8.N` headings.
    Service,
    /// Chapter 9, `9.N` headings.
    Characteristic,
}

impl Namespace {
    #[must_use]
    /// Chapter number prefixing every heading in this namespace.
    pub fn chapter(self) -> u32 {
        match self {
            Self::Service => 8,
            Self::Characteristic => 9,
        }
    }

    fn heading_regex(self) -> &'static regex::Regex {
        match self {
            Self::Service => regex!(r"^#####\s+(8\.([0-9]+))\s+(.+)$"),
            Self::Characteristic => regex!(r"^#####\s+(9\.([0-9]+))\s+(.+)$"),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service => f.write_str("Service"),
            Self::Characteristic => f.write_str("Characteristic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An entity heading such as `##### 8.10 Fan` broken into its parts.
pub struct NumberedHeading {
    /// Full section number, e.g. `"8.10"`.
    pub number: String,
    /// Numeric suffix used for ordering, e.g. `10`.
    pub sort_key: u32,
    /// Entity name with surrounding whitespace removed.
    pub name: String,
}

impl NumberedHeading {
    #[must_use]
    /// Parse `line` as a heading in `namespace`.
    pub fn parse(line: &str, namespace: Namespace) -> Option<Self> {
        let caps = namespace.heading_regex().captures(line)?;
        let sort_key = caps[2].parse().ok()?;
        Some(Self {
            number: caps[1].to_string(),
            sort_key,
            name: caps[3].trim().to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
