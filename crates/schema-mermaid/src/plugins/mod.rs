//! Renderer implementations for different output notations
//!
//! Each plugin implements [`SchemaRenderer`](crate::core::SchemaRenderer)
//! with its own diagram model.

pub mod mermaid;

pub use mermaid::*;
