//! Schema description boundary
//!
//! Input model for the renderers: entity descriptors as exported by the ORM
//! schema compiler, typed relations, and display-name resolution.

mod description;
mod relation;
mod resolver;

pub use description::{EntityDescriptor, RelationDescriptor, RelationSchema, SchemaDescription};
pub use relation::{CompoundIdentity, Relation, RelationKind};
pub use resolver::{simple_name, NameResolver, PlainNames, TypeRegistry};
