//! Plain-text presentation of query results for the command line.

use crate::engine::{Entry, Lookup, SearchHit};
use crate::error::Result;
use crate::heading::Namespace;
use serde::Serialize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Print a found service or characteristic followed by its referenced sections.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_lookup(
    out: &mut impl Write,
    namespace: Namespace,
    name: &str,
    lookup: &Lookup,
) -> io::Result<()> {
    writeln!(out, "\n### {namespace}: {name}")?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "{}", lookup.content)?;

    if !lookup.references.is_empty() {
        writeln!(out, "\n{}", rule())?;
        writeln!(out, "### Referenced sections")?;
        writeln!(out, "{}", rule())?;
        for reference in &lookup.references {
            writeln!(out, "\n--- {} ---", reference.key)?;
            writeln!(out, "{}", reference.excerpt)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print a failed lookup and any entries whose names contain the requested one.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_not_found(
    out: &mut impl Write,
    namespace: Namespace,
    name: &str,
    suggestions: &[Entry],
) -> io::Result<()> {
    writeln!(out, "{namespace} '{name}' not found")?;
    match namespace {
        Namespace::Service => writeln!(out, "\nAvailable services:")?,
        Namespace::Characteristic => writeln!(out, "\nSimilar characteristics:")?,
    }
    for entry in suggestions {
        writeln!(out, "  {}: {}", entry.number, entry.name)?;
    }
    Ok(())
}

/// Print every entry of a listing.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_listing(
    out: &mut impl Write,
    namespace: Namespace,
    entries: &[Entry],
) -> io::Result<()> {
    let noun = match namespace {
        Namespace::Service => "services",
        Namespace::Characteristic => "characteristics",
    };
    writeln!(out, "Found {} {noun}:\n", entries.len())?;
    for entry in entries {
        writeln!(out, "  {}: {}", entry.number, entry.name)?;
    }
    Ok(())
}

/// Print at most `max_results` search hits with their context.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_search(
    out: &mut impl Write,
    term: &str,
    hits: &[SearchHit],
    max_results: usize,
) -> io::Result<()> {
    writeln!(out, "Searching for: {term}\n")?;
    writeln!(out, "{}", rule())?;

    if hits.is_empty() {
        writeln!(out, "No results found for '{term}'")?;
        return Ok(());
    }

    writeln!(out, "Found {} matches:\n", hits.len())?;
    for (i, hit) in hits.iter().take(max_results).enumerate() {
        writeln!(out, "\n--- Match {} (line {}) ---", i + 1, hit.line)?;
        if !hit.header.is_empty() {
            writeln!(out, "Section: {}", hit.header)?;
        }
        writeln!(out, "{}", hit.context)?;
    }

    if hits.len() > max_results {
        writeln!(out, "\n... and {} more matches", hits.len() - max_results)?;
    }
    Ok(())
}

/// Write any result as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialisation or writing fails.
pub fn render_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
