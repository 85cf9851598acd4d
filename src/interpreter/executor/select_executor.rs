use crate::compiler::ast::SelectStatement;
use crate::interpreter::executor::MemoryBackend;
use crate::interpreter::ResultSet;
use crate::types::{DbError, DbResult};

impl MemoryBackend {

    pub fn execute_select(&self, stmt: &SelectStatement) -> DbResult<ResultSet> {
        let from = stmt.from.as_ref().ok_or(DbError::MissingFrom)?;
        let table = self.catalog.get_table(&from.value)?;

        // resolve every projected item to a column index
        let mut indexes = Vec::with_capacity(stmt.items.len());
        for item in &stmt.items {
            let name = &item.literal().value;
            let index = table.column_index(name)
                .filter(|_| item.is_identifier())
                .ok_or_else(|| DbError::ColumnNotExist(name.clone()))?;
            indexes.push(index);
        }

        let columns = indexes.iter()
            .map(|&i| table.columns[i].clone())
            .collect();
        let rows = table.rows.iter()
            .map(|row| indexes.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(ResultSet { columns, rows })
    }
}
