//! Schema to Mermaid class diagram transformer
//!
//! Walks the schema description in order and builds one table block and one
//! arrow block per entity:
//!
//! ```text
//! SchemaDescription → (EntityTable, EntityArrow)* → ClassDiagram → text
//! ```

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use super::class_diagram::ClassDiagram;
use super::entity_arrow::EntityArrow;
use super::entity_table::EntityTable;
use super::relation_mapper::RelationMapper;
use crate::core::{ArrowStyle, DiagramConfig, DiagramError, SchemaRenderer, IDENTITY_SEPARATOR};
use crate::schema::{
    CompoundIdentity, EntityDescriptor, NameResolver, PlainNames, Relation, SchemaDescription,
};

/// Label on single-table inheritance arrows
pub const STI_LABEL: &str = "STI";
/// Label on joined-table inheritance arrows
pub const JTI_LABEL: &str = "JTI";

/// Renders a schema description as Mermaid class diagram text
pub struct MermaidRenderer {
    mapper: RelationMapper,
    resolver: Box<dyn NameResolver>,
    config: DiagramConfig,
}

impl MermaidRenderer {
    /// Renderer with plain-name resolution and default configuration
    pub fn new() -> Self {
        Self {
            mapper: RelationMapper::new(),
            resolver: Box::new(PlainNames),
            config: DiagramConfig::default(),
        }
    }

    pub fn with_resolver(mut self, resolver: impl NameResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_config(mut self, config: DiagramConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Render to text, failing on the first unknown relation kind
    pub fn render_schema(&self, schema: &SchemaDescription) -> Result<String, DiagramError> {
        Ok(self.build_diagram(schema)?.serialize())
    }

    /// Build the diagram model without serializing it
    pub fn build_diagram(&self, schema: &SchemaDescription) -> Result<ClassDiagram, DiagramError> {
        let render_span = span!(Level::INFO, "render_schema", entities = schema.len());
        let _enter = render_span.enter();

        let mut diagram = ClassDiagram::with_config(self.config.clone());

        for (key, entity) in schema.iter() {
            let Some(columns) = &entity.columns else {
                debug!(key = %key, "Skipping schema entry without columns");
                continue;
            };

            let role = self.display_role(key, entity);
            trace!(key = %key, role = %role, "Rendering entity");

            let mut table = EntityTable::new(role.as_str());
            let mut arrows = EntityArrow::new();

            for column in columns {
                let type_label = entity
                    .typecast(column)
                    .unwrap_or(&self.config.default_typecast);
                table.add_row(type_label, column.as_str());
            }

            for (relation_key, descriptor) in &entity.relations {
                let Some(relation) = Relation::from_descriptor(descriptor)? else {
                    debug!(
                        entity = %role,
                        relation = %relation_key,
                        "Skipping relation without target or schema"
                    );
                    continue;
                };
                self.add_relation(&mut table, &mut arrows, &role, relation_key, &relation);
            }

            for child in &entity.children {
                arrows.add_arrow(role.as_str(), child.as_str(), STI_LABEL, ArrowStyle::Inheritance);
            }

            if let Some(parent) = &entity.parent {
                arrows.add_arrow(parent.as_str(), role.as_str(), JTI_LABEL, ArrowStyle::Inheritance);
            }

            debug!(
                entity = %role,
                rows = table.rows().len(),
                methods = table.methods().len(),
                arrows = arrows.len(),
                "Built entity"
            );
            diagram.add_entity(table);
            diagram.add_entity(arrows);
        }

        info!(
            tables = diagram.table_count(),
            arrows = diagram.arrow_count(),
            "Schema rendered"
        );
        Ok(diagram)
    }

    /// Role shown for an entity
    ///
    /// Falls back to the entity key when the resolved role still contains
    /// the compound-identity separator.
    fn display_role(&self, key: &str, entity: &EntityDescriptor) -> String {
        let role = entity.role.as_deref().unwrap_or(key);
        let role = self.resolver.display_name(role);
        if role.contains(IDENTITY_SEPARATOR) {
            key.to_string()
        } else {
            role
        }
    }

    fn add_relation(
        &self,
        table: &mut EntityTable,
        arrows: &mut EntityArrow,
        role: &str,
        relation_key: &str,
        relation: &Relation,
    ) {
        let mapped = self.mapper.map(relation.kind(), relation.is_nullable());
        trace!(
            relation = %relation_key,
            kind = %relation.kind(),
            cardinality = %mapped.cardinality,
            style = %mapped.style,
            "Mapped relation"
        );

        match relation {
            Relation::ManyToMany {
                through: None,
                ..
            } => {
                debug!(relation = %relation_key, "Many-to-many without through entity");
            }
            Relation::ManyToMany {
                target,
                through: Some(through),
                ..
            } => {
                let target = self.resolver.display_name(target);
                let through = self.resolver.display_name(through);
                let label = format!("{}.{}", role, relation_key);

                table.add_method(relation_key, format!("{} {}", mapped.cardinality, target));
                arrows.add_arrow(role, target.as_str(), relation_key, mapped.style);
                arrows.add_arrow(through.as_str(), role, label.as_str(), ArrowStyle::Dependency);
                arrows.add_arrow(through.as_str(), target.as_str(), label, ArrowStyle::Dependency);
            }
            Relation::Embedded { target, .. } => {
                let target = CompoundIdentity::parse(self.resolver.display_name(target));
                table.add_method(
                    target.member(),
                    format!("{} {}", mapped.cardinality, relation_key),
                );
                arrows.add_arrow(role, relation_key, target.escaped(), mapped.style);
            }
            Relation::Direct { target, .. } => {
                let target = self.resolver.display_name(target);
                table.add_method(relation_key, format!("{} {}", mapped.cardinality, target));
                arrows.add_arrow(role, target, relation_key, mapped.style);
            }
        }
    }
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaRenderer for MermaidRenderer {
    fn render(&self, schema: &SchemaDescription) -> Result<String> {
        Ok(self.render_schema(schema)?)
    }

    fn name(&self) -> &'static str {
        "mermaid"
    }
}
