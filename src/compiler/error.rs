use std::fmt;
use thiserror::Error;
use crate::compiler::token::{Keyword, Location, Symbol, Token};

/// No sub-scanner recognized the input at `offset`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to lex tokens at offset {offset} ({location})")]
pub struct LexError {
    pub offset: usize,
    pub location: Location,
}

/// What the parser was looking for when it gave up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Statement,
    Semicolon,
    Keyword(Keyword),
    Symbol(Symbol),
    TableName,
    ColumnName,
    ColumnType,
    Expression,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Statement => f.write_str("statement"),
            Expected::Semicolon => f.write_str("';' after statement (missing semicolon)"),
            Expected::Keyword(keyword) => write!(f, "{}", keyword.as_str().to_uppercase()),
            Expected::Symbol(symbol) => write!(f, "'{}'", symbol.as_str()),
            Expected::TableName => f.write_str("table name"),
            Expected::ColumnName => f.write_str("column name"),
            Expected::ColumnType => f.write_str("column type"),
            Expected::Expression => f.write_str("expression"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub expected: Expected,
    /// Offending token, `None` when the input ended early
    pub found: Option<Token>,
    /// Offending token's location, or the last token's at end of input
    pub location: Location,
    /// Hard error of the statement grammar that committed before dispatch gave up
    pub cause: Option<Box<ParseError>>,
}

impl ParseError {
    pub fn is_missing_semicolon(&self) -> bool {
        self.expected == Expected::Semicolon
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(token) => write!(f, "[{}]: expected {}, got {}", self.location, self.expected, token)?,
            None => write!(f, "[{}]: expected {}, got end of input", self.location, self.expected)?,
        }
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
