//! Schema Mermaid - Render ORM schemas as Mermaid.js class diagrams
//!
//! Takes a normalized schema description (entities, columns, typecasts,
//! relations, inheritance links) and emits `classDiagram` text for a Mermaid
//! renderer. Output order follows the schema's declaration order, so the same
//! input always yields byte-identical text.
//!
//! # Quick Start
//!
//! ```rust
//! use schema_mermaid::render_json;
//!
//! let schema = r#"{
//!     "user": {
//!         "columns": ["id", "name"],
//!         "relations": {
//!             "profile": { "type": "hasOne", "target": "profile", "schema": { "nullable": true } }
//!         }
//!     }
//! }"#;
//!
//! let text = render_json(schema).unwrap();
//! assert!(text.starts_with("classDiagram\n"));
//! assert!(text.contains("user --> profile : profile"));
//! ```
//!
//! # Advanced Usage
//!
//! Build the schema in code and configure the renderer:
//!
//! ```rust
//! use schema_mermaid::prelude::*;
//!
//! let schema = SchemaDescription::new().with_entity(
//!     "App\\Entity\\Tag",
//!     EntityDescriptor::new(["id", "name"])
//!         .with_typecast("id", "int")
//!         .with_relation(
//!             "posts",
//!             RelationDescriptor::new("manyToMany", "post").through("App\\Entity\\PostTag"),
//!         ),
//! );
//!
//! let renderer = MermaidRenderer::new()
//!     .with_resolver(
//!         TypeRegistry::new()
//!             .with_type("App\\Entity\\Tag")
//!             .with_type("App\\Entity\\PostTag"),
//!     )
//!     .with_config(DiagramConfig::default().with_direction(Direction::LeftRight));
//!
//! let diagram = renderer.build_diagram(&schema).unwrap();
//! assert_eq!(diagram.table_count(), 1);
//! assert_eq!(diagram.arrow_count(), 3);
//!
//! let text = diagram.serialize();
//! assert!(text.contains("postTag ..> tag : tag.posts"));
//! ```

pub mod core;
pub mod plugins;
pub mod schema;

pub use crate::core::*;
pub use crate::schema::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        ArrowStyle, Cardinality, DiagramConfig, DiagramError, Direction, SchemaRenderer,
    };
    pub use crate::plugins::mermaid::{
        ClassDiagram, EntityArrow, EntityTable, MermaidRenderer, RelationMapper,
    };
    pub use crate::schema::{
        EntityDescriptor, NameResolver, PlainNames, RelationDescriptor, RelationKind,
        SchemaDescription, TypeRegistry,
    };
}

/// Render a schema description as Mermaid class diagram text
///
/// Uses plain-name resolution and the default configuration.
///
/// # Returns
/// * `Ok(String)` - The diagram text
/// * `Err` - A [`DiagramError::UnknownRelationKind`] if any relation has an
///   unrecognized kind
///
/// # Example
/// ```rust
/// use schema_mermaid::{render, EntityDescriptor, SchemaDescription};
///
/// let schema = SchemaDescription::new().with_entity("user", EntityDescriptor::new(["id"]));
/// let text = render(&schema).unwrap();
/// assert_eq!(text, "classDiagram\nclass user {\n    id : string\n}\n");
/// ```
pub fn render(schema: &SchemaDescription) -> anyhow::Result<String> {
    use crate::core::SchemaRenderer as _;
    use crate::plugins::mermaid::MermaidRenderer;

    MermaidRenderer::new().render(schema)
}

/// Render a schema description with a specific configuration
pub fn render_with_config(
    schema: &SchemaDescription,
    config: DiagramConfig,
) -> anyhow::Result<String> {
    use crate::core::SchemaRenderer as _;
    use crate::plugins::mermaid::MermaidRenderer;

    MermaidRenderer::new().with_config(config).render(schema)
}

/// Parse an exported JSON schema and render it
///
/// # Example
/// ```rust
/// use schema_mermaid::{render_json, DiagramError};
///
/// let err = render_json(r#"{"post": {"columns": [], "relations": {
///     "author": {"type": "ownedBy", "target": "user", "schema": {}}
/// }}}"#)
/// .unwrap_err();
/// assert!(matches!(
///     err.downcast_ref::<DiagramError>(),
///     Some(DiagramError::UnknownRelationKind { .. })
/// ));
/// ```
pub fn render_json(input: &str) -> anyhow::Result<String> {
    let schema = SchemaDescription::from_json(input)?;
    render(&schema)
}
