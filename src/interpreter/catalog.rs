use std::fmt;
use linked_hash_map::LinkedHashMap;
use crate::compiler::token::Token;
use crate::types::{DbError, DbResult};

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Int,
    Text,
}

impl ColumnType {
    /// Resolve the keyword a CREATE TABLE column was declared with
    pub fn from_datatype(datatype: &Token) -> DbResult<Self> {
        match datatype.value.as_str() {
            "int" => Ok(ColumnType::Int),
            "text" => Ok(ColumnType::Text),
            other => Err(DbError::InvalidDataType(other.to_string())),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Int => f.write_str("INT"),
            ColumnType::Text => f.write_str("TEXT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

/// A stored value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Int(i32),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Text(v) => f.write_str(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }
}

/// Tables of the in-memory backend, kept in creation order
#[derive(Debug, Default)]
pub struct Catalog {
    tables: LinkedHashMap<String, Table>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn add_table(&mut self, table: Table) -> DbResult<()> {
        if self.has_table(&table.name) {
            return Err(DbError::TableAlreadyExists(table.name));
        }
        self.tables.insert(table.name.clone(), table);
        Ok(())
    }

    pub fn get_table(&self, name: &str) -> DbResult<&Table> {
        self.tables.get(name)
            .ok_or_else(|| DbError::TableNotExist(name.to_string()))
    }

    pub fn get_table_mut(&mut self, name: &str) -> DbResult<&mut Table> {
        self.tables.get_mut(name)
            .ok_or_else(|| DbError::TableNotExist(name.to_string()))
    }

    pub fn list_tables(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }
}
