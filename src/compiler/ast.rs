use crate::compiler::token::{Token, TokenKind};

/// Statements recognized by one call to `parse`, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    CreateTable(CreateTableStatement),
    Insert(InsertStatement),
    Select(SelectStatement),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableStatement {
    pub name: Token,
    pub columns: Vec<ColumnDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    pub table: Token,
    pub values: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    pub items: Vec<Expression>,
    pub from: Option<Token>, // absent when there is no FROM clause
}

/// Column Definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: Token,
    pub datatype: Token,
}

/// Expression, only single-token literals for now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Token),
}

impl Expression {
    pub fn literal(&self) -> &Token {
        match self {
            Expression::Literal(token) => token,
        }
    }

    pub fn is_identifier(&self) -> bool {
        self.literal().kind == TokenKind::Identifier
    }
}
