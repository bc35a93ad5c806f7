//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a hapspec.toml, and if present we load settings from there.
//! This provides the document location and output limits.

use crate::engine::Options;
use crate::references::DEFAULT_EXCERPT_LINES;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "hapspec.toml";
/// Document queried when no path is configured.
pub const DEFAULT_SPEC_FILE: &str = "homekit-spec.md";
/// Search hits printed when no limit is configured.
pub const DEFAULT_MAX_RESULTS: usize = 10;

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from hapspec.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_SPEC_FILE.to_string())]
    /// Path of the markdown specification to query.
    pub spec_file: String,
    #[facet(default = DEFAULT_MAX_RESULTS)]
    /// Search hits printed before the remainder is summarised.
    pub max_results: usize,
    #[facet(default = DEFAULT_EXCERPT_LINES)]
    /// Lines shown for each referenced section.
    pub excerpt_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spec_file: DEFAULT_SPEC_FILE.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            excerpt_lines: DEFAULT_EXCERPT_LINES,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from hapspec.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
            return config;
        }
        tracing::warn!(path = %path.display(), "ignoring invalid config");
        Self::default()
    }

    #[must_use]
    /// Engine options derived from this configuration.
    pub fn options(&self) -> Options {
        Options {
            excerpt_lines: self.excerpt_lines,
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
