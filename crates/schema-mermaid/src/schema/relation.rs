//! Typed relations
//!
//! Relations arrive as loosely-typed descriptors. Before rendering they are
//! lifted into [`Relation`], whose variants carry exactly the payload their
//! kind needs.

use std::fmt;
use std::str::FromStr;

use super::RelationDescriptor;
use crate::core::{DiagramError, ESCAPED_SEPARATOR, IDENTITY_SEPARATOR};

/// Relation categories known to the schema contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    HasOne,
    HasMany,
    BelongsTo,
    RefersTo,
    ManyToMany,
    Embedded,
    BelongsToMorphed,
    MorphedHasOne,
    MorphedHasMany,
}

impl RelationKind {
    pub const ALL: [RelationKind; 9] = [
        RelationKind::HasOne,
        RelationKind::HasMany,
        RelationKind::BelongsTo,
        RelationKind::RefersTo,
        RelationKind::ManyToMany,
        RelationKind::Embedded,
        RelationKind::BelongsToMorphed,
        RelationKind::MorphedHasOne,
        RelationKind::MorphedHasMany,
    ];

    /// Name as emitted by the schema compiler
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::HasOne => "hasOne",
            RelationKind::HasMany => "hasMany",
            RelationKind::BelongsTo => "belongsTo",
            RelationKind::RefersTo => "refersTo",
            RelationKind::ManyToMany => "manyToMany",
            RelationKind::Embedded => "embedded",
            RelationKind::BelongsToMorphed => "belongsToMorphed",
            RelationKind::MorphedHasOne => "morphedHasOne",
            RelationKind::MorphedHasMany => "morphedHasMany",
        }
    }

    /// Returns true if the relation points at no more than one entity
    pub fn is_single_valued(&self) -> bool {
        !matches!(
            self,
            RelationKind::HasMany | RelationKind::ManyToMany | RelationKind::MorphedHasMany
        )
    }
}

impl FromStr for RelationKind {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hasOne" | "has_one" => Ok(RelationKind::HasOne),
            "hasMany" | "has_many" => Ok(RelationKind::HasMany),
            "belongsTo" | "belongs_to" => Ok(RelationKind::BelongsTo),
            "refersTo" | "refers_to" => Ok(RelationKind::RefersTo),
            "manyToMany" | "many_to_many" => Ok(RelationKind::ManyToMany),
            "embedded" => Ok(RelationKind::Embedded),
            "belongsToMorphed" | "belongs_to_morphed" => Ok(RelationKind::BelongsToMorphed),
            "morphedHasOne" | "morphed_has_one" => Ok(RelationKind::MorphedHasOne),
            "morphedHasMany" | "morphed_has_many" => Ok(RelationKind::MorphedHasMany),
            other => Err(DiagramError::unknown_relation_kind(other)),
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `owner:alias` identity used by embedded relation targets
///
/// Only the first two segments are meaningful; any further segments are
/// kept in the raw text and show up in [`CompoundIdentity::escaped`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundIdentity {
    raw: String,
}

impl CompoundIdentity {
    pub fn parse(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn owner(&self) -> &str {
        self.raw
            .split(IDENTITY_SEPARATOR)
            .next()
            .unwrap_or(&self.raw)
    }

    /// Segment between the first and second separator
    pub fn alias(&self) -> Option<&str> {
        self.raw.split(IDENTITY_SEPARATOR).nth(1)
    }

    /// The part an embedded method is attached under
    pub fn member(&self) -> &str {
        self.alias().unwrap_or(&self.raw)
    }

    /// Label form with every separator escaped
    pub fn escaped(&self) -> String {
        self.raw.replace(IDENTITY_SEPARATOR, ESCAPED_SEPARATOR)
    }
}

impl fmt::Display for CompoundIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A validated relation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    ManyToMany {
        target: String,
        through: Option<String>,
        nullable: bool,
    },
    /// Target kept raw; it is split into a [`CompoundIdentity`] only after
    /// display-name resolution.
    Embedded {
        target: String,
        nullable: bool,
    },
    Direct {
        kind: RelationKind,
        target: String,
        nullable: bool,
    },
}

impl Relation {
    /// Lift a descriptor into a typed relation
    ///
    /// Returns `Ok(None)` when the target or the nested schema section is
    /// missing. The kind is only checked for descriptors that pass that test.
    pub fn from_descriptor(descriptor: &RelationDescriptor) -> Result<Option<Self>, DiagramError> {
        let (Some(target), Some(_)) = (&descriptor.target, &descriptor.schema) else {
            return Ok(None);
        };

        let nullable = descriptor.is_nullable();
        let relation = match descriptor.kind.parse::<RelationKind>()? {
            RelationKind::ManyToMany => Relation::ManyToMany {
                target: target.clone(),
                through: descriptor.through_entity().map(str::to_string),
                nullable,
            },
            RelationKind::Embedded => Relation::Embedded {
                target: target.clone(),
                nullable,
            },
            kind => Relation::Direct {
                kind,
                target: target.clone(),
                nullable,
            },
        };
        Ok(Some(relation))
    }

    pub fn kind(&self) -> RelationKind {
        match self {
            Relation::ManyToMany { .. } => RelationKind::ManyToMany,
            Relation::Embedded { .. } => RelationKind::Embedded,
            Relation::Direct { kind, .. } => *kind,
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Relation::ManyToMany { nullable, .. }
            | Relation::Embedded { nullable, .. }
            | Relation::Direct { nullable, .. } => *nullable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RelationSchema;

    #[test]
    fn test_kind_round_trips_names() {
        for kind in RelationKind::ALL {
            assert_eq!(kind.as_str().parse::<RelationKind>().unwrap(), kind);
        }
        assert_eq!(
            "many_to_many".parse::<RelationKind>().unwrap(),
            RelationKind::ManyToMany
        );
    }

    #[test]
    fn test_unknown_kind() {
        let err = "hasSome".parse::<RelationKind>().unwrap_err();
        assert!(matches!(err, DiagramError::UnknownRelationKind { ref kind } if kind == "hasSome"));
    }

    #[test]
    fn test_single_valued() {
        assert!(RelationKind::HasOne.is_single_valued());
        assert!(RelationKind::Embedded.is_single_valued());
        assert!(!RelationKind::HasMany.is_single_valued());
        assert!(!RelationKind::ManyToMany.is_single_valued());
        assert!(!RelationKind::MorphedHasMany.is_single_valued());
    }

    #[test]
    fn test_compound_identity() {
        let id = CompoundIdentity::parse("user:credentials");
        assert_eq!(id.owner(), "user");
        assert_eq!(id.alias(), Some("credentials"));
        assert_eq!(id.member(), "credentials");
        assert_eq!(id.to_string(), "user:credentials");
        assert_eq!(id.escaped(), "user&#58credentials");

        let plain = CompoundIdentity::parse("address");
        assert_eq!(plain.member(), "address");
        assert_eq!(plain.alias(), None);
        assert_eq!(plain.escaped(), "address");
    }

    #[test]
    fn test_compound_identity_extra_segments() {
        let id = CompoundIdentity::parse("user:credentials:extra");
        assert_eq!(id.owner(), "user");
        assert_eq!(id.alias(), Some("credentials"));
        assert_eq!(id.member(), "credentials");
        assert_eq!(id.to_string(), "user:credentials:extra");
        assert_eq!(id.escaped(), "user&#58credentials&#58extra");
    }

    #[test]
    fn test_from_descriptor_skips_incomplete() {
        let no_target = RelationDescriptor {
            kind: "hasOne".to_string(),
            target: None,
            schema: Some(RelationSchema::default()),
        };
        assert_eq!(Relation::from_descriptor(&no_target).unwrap(), None);

        let no_schema = RelationDescriptor {
            kind: "bogus".to_string(),
            target: Some("profile".to_string()),
            schema: None,
        };
        assert_eq!(Relation::from_descriptor(&no_schema).unwrap(), None);
    }

    #[test]
    fn test_from_descriptor_variants() {
        let m2m = RelationDescriptor::new("manyToMany", "post").through("postTag");
        assert_eq!(
            Relation::from_descriptor(&m2m).unwrap(),
            Some(Relation::ManyToMany {
                target: "post".to_string(),
                through: Some("postTag".to_string()),
                nullable: false,
            })
        );

        let embedded = RelationDescriptor::new("embedded", "user:credentials").nullable(true);
        assert_eq!(
            Relation::from_descriptor(&embedded).unwrap(),
            Some(Relation::Embedded {
                target: "user:credentials".to_string(),
                nullable: true,
            })
        );

        let direct = RelationDescriptor::new("belongsTo", "user");
        let relation = Relation::from_descriptor(&direct).unwrap().unwrap();
        assert_eq!(relation.kind(), RelationKind::BelongsTo);
    }

    #[test]
    fn test_from_descriptor_unknown_kind() {
        let descriptor = RelationDescriptor::new("hasSome", "post");
        assert!(Relation::from_descriptor(&descriptor).is_err());
    }
}
