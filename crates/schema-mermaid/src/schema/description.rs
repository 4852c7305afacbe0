//! Schema description input model
//!
//! Mirrors the normalized schema an ORM compiles: a mapping from entity key
//! to entity descriptor, iterated in insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DiagramError;

/// Nested schema section of a relation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(
        default,
        alias = "through_entity",
        skip_serializing_if = "Option::is_none"
    )]
    pub through_entity: Option<String>,
}

/// A relation as declared by the schema
///
/// `kind` stays a raw string at this boundary; it is validated when the
/// relation is lifted into a [`Relation`](super::Relation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<RelationSchema>,
}

impl RelationDescriptor {
    pub fn new(kind: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            target: Some(target.into()),
            schema: Some(RelationSchema::default()),
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.schema.get_or_insert_with(RelationSchema::default).nullable = Some(nullable);
        self
    }

    pub fn through(mut self, entity: impl Into<String>) -> Self {
        self.schema.get_or_insert_with(RelationSchema::default).through_entity =
            Some(entity.into());
        self
    }

    /// Nullability flag, `false` when unspecified
    pub fn is_nullable(&self) -> bool {
        self.schema
            .as_ref()
            .and_then(|s| s.nullable)
            .unwrap_or(false)
    }

    pub fn through_entity(&self) -> Option<&str> {
        self.schema.as_ref()?.through_entity.as_deref()
    }
}

/// One entity's record in the schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// `None` marks a schema fragment that is not an entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(default, alias = "typecast", skip_serializing_if = "IndexMap::is_empty")]
    pub typecasts: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub relations: IndexMap<String, RelationDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl EntityDescriptor {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: Some(columns.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// A descriptor without columns
    pub fn fragment() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_typecast(mut self, column: impl Into<String>, label: impl Into<String>) -> Self {
        self.typecasts.insert(column.into(), label.into());
        self
    }

    pub fn with_relation(mut self, key: impl Into<String>, relation: RelationDescriptor) -> Self {
        self.relations.insert(key.into(), relation);
        self
    }

    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn typecast(&self, column: &str) -> Option<&str> {
        self.typecasts.get(column).map(String::as_str)
    }
}

/// Mapping from entity key to descriptor, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDescription {
    entities: IndexMap<String, EntityDescriptor>,
}

impl SchemaDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an exported schema from JSON, keeping key order
    pub fn from_json(input: &str) -> Result<Self, DiagramError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn with_entity(mut self, key: impl Into<String>, entity: EntityDescriptor) -> Self {
        self.insert(key, entity);
        self
    }

    /// Insert or replace an entity; a replaced key keeps its position
    pub fn insert(&mut self, key: impl Into<String>, entity: EntityDescriptor) {
        self.entities.insert(key.into(), entity);
    }

    pub fn get(&self, key: &str) -> Option<&EntityDescriptor> {
        self.entities.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &EntityDescriptor)> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, EntityDescriptor)> for SchemaDescription {
    fn from_iter<T: IntoIterator<Item = (K, EntityDescriptor)>>(iter: T) -> Self {
        Self {
            entities: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
