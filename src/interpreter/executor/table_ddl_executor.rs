use std::collections::HashSet;
use tracing::info;
use crate::compiler::ast::{CreateTableStatement, Expression, InsertStatement};
use crate::compiler::token::TokenKind;
use crate::interpreter::catalog::{Cell, Column, ColumnType, Table};
use crate::interpreter::executor::MemoryBackend;
use crate::types::{DbError, DbResult};

impl MemoryBackend {

    pub fn execute_create_table(&mut self, stmt: &CreateTableStatement) -> DbResult<()> {
        let name = &stmt.name.value;

        // resolve column types and check for duplicate column names
        let mut existing = HashSet::new();
        let mut columns = Vec::with_capacity(stmt.columns.len());
        for column in &stmt.columns {
            if !existing.insert(column.name.value.as_str()) {
                return Err(DbError::DuplicateColumn(column.name.value.clone()));
            }
            columns.push(Column {
                name: column.name.value.clone(),
                column_type: ColumnType::from_datatype(&column.datatype)?,
            });
        }

        self.catalog.add_table(Table {
            name: name.clone(),
            columns,
            rows: vec![],
        })?;

        info!(table = %name, columns = stmt.columns.len(), "created table");
        Ok(())
    }

    pub fn execute_insert(&mut self, stmt: &InsertStatement) -> DbResult<usize> {
        let table = self.catalog.get_table_mut(&stmt.table.value)?;

        // check number of values
        if stmt.values.len() != table.columns.len() {
            return Err(DbError::MissingValues {
                table: table.name.clone(),
                expected: table.columns.len(),
                found: stmt.values.len(),
            });
        }

        let row = table.columns.iter()
            .zip(&stmt.values)
            .map(|(column, value)| to_cell(column, value))
            .collect::<DbResult<Vec<_>>>()?;
        table.rows.push(row);

        info!(table = %table.name, rows = table.rows.len(), "inserted row");
        Ok(1)
    }
}

/// Convert a literal to the stored form of its column
fn to_cell(column: &Column, value: &Expression) -> DbResult<Cell> {
    let token = value.literal();
    let invalid = || DbError::InvalidValue {
        column: column.name.clone(),
        value: token.value.clone(),
    };

    match (column.column_type, token.kind) {
        (ColumnType::Int, TokenKind::Numeric) => token.value.parse::<i32>()
            .map(Cell::Int)
            .map_err(|_| invalid()),
        // double-quoted text lexes as an identifier
        (ColumnType::Text, TokenKind::String | TokenKind::Identifier | TokenKind::Numeric) => {
            Ok(Cell::Text(token.value.clone()))
        }
        _ => Err(invalid()),
    }
}
