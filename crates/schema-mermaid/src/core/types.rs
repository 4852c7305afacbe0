//! Core type definitions for class diagram output
//!
//! This module contains the vocabulary shared by the diagram model and the
//! transformer: arrow styles, cardinality labels, diagram direction and the
//! rendering configuration.

use std::fmt;

/// Separator used by the schema to encode compound identities (`owner:alias`)
pub const IDENTITY_SEPARATOR: char = ':';

/// Escaped literal form of [`IDENTITY_SEPARATOR`] for use inside labels
pub const ESCAPED_SEPARATOR: &str = "&#58";

/// Arrow styles matching Mermaid.js class diagram syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ArrowStyle {
    /// Plain association: `-->`
    #[default]
    Association,
    /// Composition, used for many-to-many: `--*`
    Composition,
    /// Dotted dependency, used for through-entities and embedded: `..>`
    Dependency,
    /// Inheritance, used for single/joined table inheritance: `--|>`
    Inheritance,
}

impl ArrowStyle {
    /// The literal operator sequence for this style
    pub fn token(&self) -> &'static str {
        match self {
            ArrowStyle::Association => "-->",
            ArrowStyle::Composition => "--*",
            ArrowStyle::Dependency => "..>",
            ArrowStyle::Inheritance => "--|>",
        }
    }
}

impl fmt::Display for ArrowStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Cardinality label shown in a relation's method signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Exactly one: `1`
    One,
    /// Optional single value: `0..1`
    ZeroOrOne,
    /// Many: `*`
    Many,
    /// Optional many: `0..*`
    ZeroOrMany,
}

impl Cardinality {
    /// Pick the label for a single- or many-valued relation
    pub fn of(single_valued: bool, nullable: bool) -> Self {
        match (single_valued, nullable) {
            (true, false) => Cardinality::One,
            (true, true) => Cardinality::ZeroOrOne,
            (false, false) => Cardinality::Many,
            (false, true) => Cardinality::ZeroOrMany,
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::One => write!(f, "1"),
            Cardinality::ZeroOrOne => write!(f, "0..1"),
            Cardinality::Many => write!(f, "*"),
            Cardinality::ZeroOrMany => write!(f, "0..*"),
        }
    }
}

/// Layout direction hint emitted after the diagram header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Top to bottom (TB)
    #[default]
    TopBottom,
    /// Bottom to top (BT)
    BottomTop,
    /// Left to right (LR)
    LeftRight,
    /// Right to left (RL)
    RightLeft,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::TopBottom => write!(f, "TB"),
            Direction::BottomTop => write!(f, "BT"),
            Direction::LeftRight => write!(f, "LR"),
            Direction::RightLeft => write!(f, "RL"),
        }
    }
}

/// Rendering configuration for class diagram text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramConfig {
    /// Number of spaces used to indent rows inside a table block
    pub indent: usize,
    /// Type label used for columns without a typecast
    pub default_typecast: String,
    /// Optional `direction` line after the header
    pub direction: Option<Direction>,
}

impl DiagramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_default_typecast(mut self, typecast: impl Into<String>) -> Self {
        self.default_typecast = typecast.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Indentation prefix for table rows
    pub fn indentation(&self) -> String {
        " ".repeat(self.indent)
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            default_typecast: "string".to_string(),
            direction: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_style_display() {
        assert_eq!(ArrowStyle::Association.to_string(), "-->");
        assert_eq!(ArrowStyle::Composition.to_string(), "--*");
        assert_eq!(ArrowStyle::Dependency.to_string(), "..>");
        assert_eq!(ArrowStyle::Inheritance.to_string(), "--|>");
    }

    #[test]
    fn test_arrow_style_default() {
        assert_eq!(ArrowStyle::default(), ArrowStyle::Association);
    }

    #[test]
    fn test_cardinality_of() {
        assert_eq!(Cardinality::of(true, false), Cardinality::One);
        assert_eq!(Cardinality::of(true, true), Cardinality::ZeroOrOne);
        assert_eq!(Cardinality::of(false, false), Cardinality::Many);
        assert_eq!(Cardinality::of(false, true), Cardinality::ZeroOrMany);
    }

    #[test]
    fn test_cardinality_display() {
        assert_eq!(Cardinality::One.to_string(), "1");
        assert_eq!(Cardinality::ZeroOrOne.to_string(), "0..1");
        assert_eq!(Cardinality::Many.to_string(), "*");
        assert_eq!(Cardinality::ZeroOrMany.to_string(), "0..*");
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::TopBottom.to_string(), "TB");
        assert_eq!(Direction::BottomTop.to_string(), "BT");
        assert_eq!(Direction::LeftRight.to_string(), "LR");
        assert_eq!(Direction::RightLeft.to_string(), "RL");
    }

    #[test]
    fn test_config_defaults() {
        let config = DiagramConfig::default();
        assert_eq!(config.indent, 4);
        assert_eq!(config.default_typecast, "string");
        assert_eq!(config.direction, None);
        assert_eq!(config.indentation(), "    ");
    }

    #[test]
    fn test_config_builder() {
        let config = DiagramConfig::new()
            .with_indent(2)
            .with_default_typecast("mixed")
            .with_direction(Direction::LeftRight);
        assert_eq!(config.indentation(), "  ");
        assert_eq!(config.default_typecast, "mixed");
        assert_eq!(config.direction, Some(Direction::LeftRight));
    }
}
