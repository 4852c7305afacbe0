//! Relation kind to cardinality/arrow mapping

use crate::core::{ArrowStyle, Cardinality, DiagramError};
use crate::schema::RelationKind;

/// Cardinality label and arrow style chosen for one relation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedRelation {
    pub cardinality: Cardinality,
    pub style: ArrowStyle,
}

/// Pure lookup from relation kind and nullability to diagram notation
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationMapper;

impl RelationMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map(&self, kind: RelationKind, nullable: bool) -> MappedRelation {
        let style = match kind {
            RelationKind::HasOne
            | RelationKind::HasMany
            | RelationKind::BelongsTo
            | RelationKind::RefersTo
            | RelationKind::BelongsToMorphed
            | RelationKind::MorphedHasOne
            | RelationKind::MorphedHasMany => ArrowStyle::Association,
            RelationKind::ManyToMany => ArrowStyle::Composition,
            RelationKind::Embedded => ArrowStyle::Dependency,
        };

        MappedRelation {
            cardinality: Cardinality::of(kind.is_single_valued(), nullable),
            style,
        }
    }

    /// Map a raw kind name, failing on names outside the known set
    pub fn map_with_node(&self, kind: &str, nullable: bool) -> Result<MappedRelation, DiagramError> {
        Ok(self.map(kind.parse()?, nullable))
    }
}
