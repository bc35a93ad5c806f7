//! hapspec: a query engine over a numbered markdown protocol specification.
//!
//! The document is loaded once and every query is a pure scan over its lines. Headings are
//! discovered on demand, so nothing is indexed or cached between queries.

#[macro_use]
mod macros;

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod heading;
pub mod matcher;
pub mod references;
pub mod render;
pub mod section;

pub use document::Document;
pub use engine::{Entry, HapSpec, Lookup, Options, SearchHit};
pub use error::{Error, Result};
pub use heading::Namespace;
pub use references::{Reference, References};
