//! Query engine composing location, cleaning, matching and reference resolution.
//!
//! `HapSpec` owns one loaded [`Document`] for its lifetime. Every query is a pure scan over the
//! document's lines, so the engine can be shared freely between readers.

use crate::document::Document;
use crate::error::Result;
use crate::heading::{is_entity_heading, Namespace, NumberedHeading};
use crate::matcher::match_strategy;
use crate::references::{extract_references, References, DEFAULT_EXCERPT_LINES};
use crate::section::{locate, locate_at, Section};
use regex::Regex;
use serde::Serialize;
use std::path::Path;

/// Lines of context shown before a search hit.
pub const CONTEXT_BEFORE: usize = 5;
/// Lines of context shown from a search hit onward (exclusive end).
pub const CONTEXT_AFTER: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tunables for query output.
pub struct Options {
    /// Maximum lines per reference excerpt.
    pub excerpt_lines: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            excerpt_lines: DEFAULT_EXCERPT_LINES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A found service or characteristic with its resolved citations.
pub struct Lookup {
    /// Cleaned section text.
    pub content: String,
    /// Citations found in `content`, resolved to excerpts.
    pub references: References,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One row of a service or characteristic listing.
pub struct Entry {
    /// Section number, e.g. `"8.10"`.
    pub number: String,
    /// Numeric suffix the listing is ordered by.
    #[serde(skip)]
    pub sort_key: u32,
    /// Entity name.
    pub name: String,
}

impl From<NumberedHeading> for Entry {
    fn from(heading: NumberedHeading) -> Self {
        Self {
            number: heading.number,
            sort_key: heading.sort_key,
            name: heading.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A free-text search hit with its surrounding lines.
pub struct SearchHit {
    /// 1-based line number of the hit.
    pub line: usize,
    /// Enclosing entity heading, or empty if the hit is the heading itself or has none.
    pub header: String,
    /// The matching line, trimmed.
    #[serde(rename = "match")]
    pub matched: String,
    /// Raw lines around the hit, joined with newlines.
    pub context: String,
}

/// Read-only query interface over one specification document.
pub struct HapSpec {
    document: Document,
    options: Options,
}

impl HapSpec {
    #[must_use]
    /// Wrap an already loaded document.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            options: Options::default(),
        }
    }

    /// Load the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Load`] if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Document::load(path).map(Self::new)
    }

    #[must_use]
    /// Replace the query options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    /// Look up a chapter 8 service by approximate name.
    pub fn get_service(&self, name: &str) -> Option<Lookup> {
        self.lookup(Namespace::Service, name)
    }

    #[must_use]
    /// Look up a chapter 9 characteristic by approximate name.
    pub fn get_characteristic(&self, name: &str) -> Option<Lookup> {
        self.lookup(Namespace::Characteristic, name)
    }

    #[must_use]
    /// Look up an entity in `namespace`: exact heading first, then the first fuzzy match.
    pub fn lookup(&self, namespace: Namespace, name: &str) -> Option<Lookup> {
        let section = self
            .find_exact(namespace, name)
            .or_else(|| self.find_fuzzy(namespace, name))?;

        let content = self
            .document
            .extract(Some(section.line_start), section.line_end)?;
        let references = extract_references(&self.document, &content, self.options.excerpt_lines);

        Some(Lookup {
            content,
            references,
        })
    }

    fn find_exact(&self, namespace: Namespace, name: &str) -> Option<Section> {
        let pattern = format!(
            r"^#####\s+{}\.\d+\s+{}\s*$",
            namespace.chapter(),
            regex::escape(name)
        );
        let pattern = Regex::new(&pattern).ok()?;
        let section = locate(&self.document, &pattern, 0)?;
        tracing::debug!(
            %namespace,
            query = name,
            line = section.line_start + 1,
            "exact heading match"
        );
        Some(section)
    }

    fn find_fuzzy(&self, namespace: Namespace, name: &str) -> Option<Section> {
        self.document
            .lines()
            .iter()
            .enumerate()
            .find_map(|(i, line)| {
                let heading = NumberedHeading::parse(line, namespace)?;
                let strategy = match_strategy(name, &heading.name)?;
                tracing::debug!(
                    %namespace,
                    query = name,
                    heading = %heading.name,
                    ?strategy,
                    "fuzzy heading match"
                );
                locate_at(&self.document, i)
            })
    }

    #[must_use]
    /// All chapter 8 services ordered by section number.
    pub fn list_services(&self) -> Vec<Entry> {
        self.list(Namespace::Service)
    }

    #[must_use]
    /// All chapter 9 characteristics ordered by section number, without the `9.1 Overview`.
    pub fn list_characteristics(&self) -> Vec<Entry> {
        self.list(Namespace::Characteristic)
    }

    #[must_use]
    /// Every entity heading in `namespace`, sorted numerically by suffix.
    pub fn list(&self, namespace: Namespace) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .document
            .lines()
            .iter()
            .filter_map(|line| NumberedHeading::parse(line, namespace))
            .filter(|heading| !is_front_matter(namespace, heading))
            .map(Entry::from)
            .collect();
        entries.sort_by_key(|entry| entry.sort_key);
        entries
    }

    #[must_use]
    /// Entries in `namespace` whose name contains `name`, ignoring case.
    pub fn suggest(&self, namespace: Namespace, name: &str) -> Vec<Entry> {
        let needle = name.to_lowercase();
        self.list(namespace)
            .into_iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    #[must_use]
    /// Case-insensitive substring search over every line.
    ///
    /// After a hit the scan resumes at the end of its context window, so nearby occurrences
    /// inside that window are folded into the one hit and never reported separately.
    pub fn search(&self, term: &str) -> Vec<SearchHit> {
        let lines = self.document.lines();
        let term = term.to_lowercase();
        let mut hits = Vec::new();

        let mut i = 0;
        while i < lines.len() {
            if !lines[i].to_lowercase().contains(&term) {
                i += 1;
                continue;
            }

            let section_start = (0..=i)
                .rev()
                .find(|&j| is_entity_heading(&lines[j]))
                .unwrap_or(i);

            let context_start = section_start.max(i.saturating_sub(CONTEXT_BEFORE));
            let context_end = lines.len().min(i + CONTEXT_AFTER);

            let header = if section_start == i {
                String::new()
            } else {
                lines[section_start].clone()
            };

            hits.push(SearchHit {
                line: i + 1,
                header,
                matched: lines[i].trim().to_string(),
                context: lines[context_start..context_end].join("\n"),
            });

            i = context_end;
        }

        tracing::debug!(hits = hits.len(), "search finished");
        hits
    }
}

fn is_front_matter(namespace: Namespace, heading: &NumberedHeading) -> bool {
    namespace == Namespace::Characteristic
        && heading.sort_key == 1
        && heading.name.contains("Overview")
}

#[cfg(test)]
#[path = "tests/engine.rs"]
mod tests;
