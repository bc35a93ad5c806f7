//! Cross-reference resolution for quoted section citations.
//!
//! Prose cites other sections as `"9.3 Active"`, with straight or curly quotes in any
//! combination. Each distinct citation is resolved one hop deep to a short excerpt of the cited
//! section. Excerpts are not scanned again, so reference chains cannot recurse.

use crate::document::Document;
use crate::section::locate;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;

/// Lines of a cited section included in its excerpt, heading included.
pub const DEFAULT_EXCERPT_LINES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A resolved citation.
pub struct Reference {
    /// Literal `"<number> <name>"` text of the citation.
    pub key: String,
    /// Cited section number, e.g. `"9.3"`.
    pub number: String,
    /// Cited name as written in the prose.
    pub name: String,
    /// Cleaned opening lines of the cited section.
    pub excerpt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolved citations in first-seen order, unique by key.
pub struct References(Vec<Reference>);

impl References {
    #[must_use]
    /// Excerpt for a citation key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.excerpt.as_str())
    }

    #[must_use]
    /// Number of resolved citations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    /// Whether nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Citations in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Reference> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a References {
    type Item = &'a Reference;
    type IntoIter = std::slice::Iter<'a, Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for References {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for reference in &self.0 {
            map.serialize_entry(&reference.key, &reference.excerpt)?;
        }
        map.end()
    }
}

#[must_use]
/// Find quoted citations in `text` and resolve each to an excerpt of at most `excerpt_lines`
/// lines. Citations with no matching heading are dropped.
pub fn extract_references(document: &Document, text: &str, excerpt_lines: usize) -> References {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    let citation = regex!(
        r#"["\x{201C}\x{201D}](\d+\.\d+)\s+([^"\x{201C}\x{201D}]+)["\x{201C}\x{201D}]"#
    );

    for caps in citation.captures_iter(text) {
        let (number, name) = (&caps[1], &caps[2]);
        let key = format!("{number} {name}");
        if !seen.insert(key.clone()) {
            continue;
        }

        let Some(excerpt) = resolve(document, number, excerpt_lines) else {
            tracing::trace!(%key, "dropping unresolved citation");
            continue;
        };

        tracing::debug!(%key, "resolved citation");
        resolved.push(Reference {
            key,
            number: number.to_string(),
            name: name.to_string(),
            excerpt,
        });
    }

    References(resolved)
}

fn resolve(document: &Document, number: &str, excerpt_lines: usize) -> Option<String> {
    let pattern = Regex::new(&format!(r"^#####\s+{}\s+", regex::escape(number))).ok()?;
    let section = locate(document, &pattern, 0)?;
    let excerpt_end = section
        .line_end
        .min(section.line_start.saturating_add(excerpt_lines));
    document.extract(Some(section.line_start), excerpt_end)
}

#[cfg(test)]
#[path = "tests/references.rs"]
mod tests;
