pub mod catalog;
pub mod executor;

use tracing::debug;
use catalog::{Cell, Column};
use executor::MemoryBackend;
use crate::compiler::ast::{CreateTableStatement, InsertStatement, SelectStatement, Statement};
use crate::compiler::parser::parse;
use crate::types::DbResult;

/// Execution side of the AST: table creation, row insertion, projection
pub trait Backend {
    fn create_table(&mut self, stmt: &CreateTableStatement) -> DbResult<()>;
    fn insert(&mut self, stmt: &InsertStatement) -> DbResult<usize>;
    fn select(&self, stmt: &SelectStatement) -> DbResult<ResultSet>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecResult {
    Success(String),
    AffectedRows(usize, String),
    QueryResult(ResultSet),
}

pub struct Interpreter<B: Backend = MemoryBackend> {
    backend: B,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_backend(MemoryBackend::new())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> Interpreter<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Entry point for a single parsed statement
    pub fn execute(&mut self, stmt: Statement) -> DbResult<ExecResult> {
        match stmt {
            Statement::CreateTable(stmt) => {
                self.backend.create_table(&stmt)?;
                Ok(ExecResult::Success(format!("Table '{}' created successfully", stmt.name.value)))
            }
            Statement::Insert(stmt) => {
                let count = self.backend.insert(&stmt)?;
                Ok(ExecResult::AffectedRows(count, format!("Inserted into '{}'", stmt.table.value)))
            }
            Statement::Select(stmt) => {
                Ok(ExecResult::QueryResult(self.backend.select(&stmt)?))
            }
        }
    }

    /// Parse all of `source`, then execute its statements in order. Nothing
    /// runs if any part of the input fails to parse.
    pub fn run(&mut self, source: &str) -> DbResult<Vec<ExecResult>> {
        let ast = parse(source)?;
        debug!(statements = ast.statements.len(), "executing input");

        let mut results = Vec::with_capacity(ast.statements.len());
        for stmt in ast.statements {
            results.push(self.execute(stmt)?);
        }
        Ok(results)
    }
}
