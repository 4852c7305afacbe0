//! Ordered class diagram model
//!
//! Holds table blocks and arrow blocks in the order they were appended and
//! serializes them behind the `classDiagram` header.

use std::fmt;

use super::entity_arrow::EntityArrow;
use super::entity_table::EntityTable;
use crate::core::DiagramConfig;

/// Header line identifying a Mermaid class diagram
pub const HEADER: &str = "classDiagram";

/// A block of the diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramElement {
    Table(EntityTable),
    Arrows(EntityArrow),
}

impl From<EntityTable> for DiagramElement {
    fn from(table: EntityTable) -> Self {
        DiagramElement::Table(table)
    }
}

impl From<EntityArrow> for DiagramElement {
    fn from(arrows: EntityArrow) -> Self {
        DiagramElement::Arrows(arrows)
    }
}

/// Class diagram document
#[derive(Debug, Clone, Default)]
pub struct ClassDiagram {
    config: DiagramConfig,
    elements: Vec<DiagramElement>,
}

impl ClassDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagramConfig) -> Self {
        Self {
            config,
            elements: Vec::new(),
        }
    }

    pub fn add_entity(&mut self, element: impl Into<DiagramElement>) {
        self.elements.push(element.into());
    }

    pub fn elements(&self) -> &[DiagramElement] {
        &self.elements
    }

    pub fn tables(&self) -> impl Iterator<Item = &EntityTable> {
        self.elements.iter().filter_map(|e| match e {
            DiagramElement::Table(table) => Some(table),
            DiagramElement::Arrows(_) => None,
        })
    }

    pub fn table_count(&self) -> usize {
        self.tables().count()
    }

    /// Total number of arrows across all arrow blocks
    pub fn arrow_count(&self) -> usize {
        self.elements
            .iter()
            .map(|e| match e {
                DiagramElement::Arrows(arrows) => arrows.len(),
                DiagramElement::Table(_) => 0,
            })
            .sum()
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClassDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADER)?;
        if let Some(direction) = self.config.direction {
            writeln!(f, "direction {}", direction)?;
        }
        for element in &self.elements {
            match element {
                DiagramElement::Table(table) => write!(f, "{}", table.display(&self.config))?,
                DiagramElement::Arrows(arrows) => write!(f, "{}", arrows)?,
            }
        }
        Ok(())
    }
}
