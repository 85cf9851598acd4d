use thiserror::Error;
use crate::compiler::error::{LexError, ParseError};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Error, Debug)]
pub enum DbError {
    // front end errors
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    // backend errors
    #[error("Table does not exist: {0}")]
    TableNotExist(String),

    #[error("Table already exists: {0}")]
    TableAlreadyExists(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Column does not exist: {0}")]
    ColumnNotExist(String),

    #[error("Invalid data type: {0}")]
    InvalidDataType(String),

    #[error("Missing values: table '{table}' has {expected} columns, got {found} values")]
    MissingValues { table: String, expected: usize, found: usize },

    #[error("Invalid value '{value}' for column '{column}'")]
    InvalidValue { column: String, value: String },

    #[error("SELECT without FROM is not supported")]
    MissingFrom,

    // shell errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
