//! Mermaid class diagram plugin
//!
//! Implements schema rendering into Mermaid.js `classDiagram` text.

mod class_diagram;
mod entity_arrow;
mod entity_table;
mod relation_mapper;
mod renderer;

pub use class_diagram::{ClassDiagram, DiagramElement, HEADER};
pub use entity_arrow::{Arrow, EntityArrow};
pub use entity_table::{EntityTable, TableBlock, TableMethod, TableRow};
pub use relation_mapper::{MappedRelation, RelationMapper};
pub use renderer::{MermaidRenderer, JTI_LABEL, STI_LABEL};
