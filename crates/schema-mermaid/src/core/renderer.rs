//! Core renderer trait for schema output
//!
//! A renderer turns a schema description into some textual representation.
//! Each output notation implements this with its own diagram model.

use anyhow::Result;

use crate::schema::SchemaDescription;

/// Core trait for schema renderers
///
/// Implementations are pure functions of the schema: no I/O and no shared
/// mutable state, so a single renderer may be used from several threads.
pub trait SchemaRenderer: Send + Sync {
    /// Render the whole schema description to text
    fn render(&self, schema: &SchemaDescription) -> Result<String>;

    /// Name of the output notation (e.g. "mermaid")
    fn name(&self) -> &'static str;
}
