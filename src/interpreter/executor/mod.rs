mod table_ddl_executor;
mod select_executor;

use crate::compiler::ast::{CreateTableStatement, InsertStatement, SelectStatement};
use crate::interpreter::catalog::Catalog;
use crate::interpreter::{Backend, ResultSet};
use crate::types::DbResult;

/// Backend keeping every table in memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    pub catalog: Catalog,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn create_table(&mut self, stmt: &CreateTableStatement) -> DbResult<()> {
        self.execute_create_table(stmt)
    }

    fn insert(&mut self, stmt: &InsertStatement) -> DbResult<usize> {
        self.execute_insert(stmt)
    }

    fn select(&self, stmt: &SelectStatement) -> DbResult<ResultSet> {
        self.execute_select(stmt)
    }
}
