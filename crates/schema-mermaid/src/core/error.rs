//! Core error types for schema rendering
//!
//! Rendering has exactly one failure of its own: a relation whose kind is
//! outside the recognized set. Everything else that looks irregular in a
//! schema description is skipped, not reported.

use thiserror::Error;

/// Core error types for schema rendering
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Unknown relation kind: {kind}")]
    UnknownRelationKind { kind: String },

    #[error("Schema format error: {source}")]
    SchemaFormat {
        #[from]
        source: serde_json::Error,
    },
}

impl DiagramError {
    /// Create a new unknown relation kind error
    pub fn unknown_relation_kind(kind: impl Into<String>) -> Self {
        Self::UnknownRelationKind { kind: kind.into() }
    }
}
