//! Class block for a single entity

use std::fmt;

use crate::core::DiagramConfig;

/// A displayed field: `<field> : <type>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub type_label: String,
    pub field: String,
}

/// A pseudo-accessor standing in for a relation: `<name>(): <signature>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMethod {
    pub name: String,
    pub signature: String,
}

/// One entity's fields and relation methods, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTable {
    name: String,
    rows: Vec<TableRow>,
    methods: Vec<TableMethod>,
}

impl EntityTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn add_row(&mut self, type_label: impl Into<String>, field: impl Into<String>) {
        self.rows.push(TableRow {
            type_label: type_label.into(),
            field: field.into(),
        });
    }

    pub fn add_method(&mut self, name: impl Into<String>, signature: impl Into<String>) {
        self.methods.push(TableMethod {
            name: name.into(),
            signature: signature.into(),
        });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn methods(&self) -> &[TableMethod] {
        &self.methods
    }

    /// Emit the `class <name> { ... }` block
    pub fn serialize(&self, config: &DiagramConfig) -> String {
        self.display(config).to_string()
    }

    /// Displayable block using the indentation from `config`
    pub fn display<'a>(&'a self, config: &'a DiagramConfig) -> TableBlock<'a> {
        TableBlock {
            table: self,
            config,
        }
    }
}

/// [`EntityTable`] paired with the configuration it is written with
pub struct TableBlock<'a> {
    table: &'a EntityTable,
    config: &'a DiagramConfig,
}

impl fmt::Display for TableBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = self.config.indentation();

        writeln!(f, "class {} {{", self.table.name)?;
        for row in &self.table.rows {
            writeln!(f, "{}{} : {}", indent, row.field, row.type_label)?;
        }
        for method in &self.table.methods {
            writeln!(f, "{}{}(): {}", indent, method.name, method.signature)?;
        }
        writeln!(f, "}}")
    }
}
