#![allow(dead_code)]

use minisql::compiler::scanner::lex;
use minisql::compiler::token::TokenKind;
use minisql::interpreter::{ExecResult, Interpreter};
use minisql::types::DbResult;

pub fn collect_tokens(sql: &str) -> Vec<(TokenKind, String)> {
    lex(sql).unwrap()
        .into_iter()
        .map(|token| (token.kind, token.value))
        .collect()
}

pub fn kw(value: &str) -> (TokenKind, String) {
    (TokenKind::Keyword, value.to_string())
}

pub fn sym(value: &str) -> (TokenKind, String) {
    (TokenKind::Symbol, value.to_string())
}

pub fn ident(value: &str) -> (TokenKind, String) {
    (TokenKind::Identifier, value.to_string())
}

pub fn num(value: &str) -> (TokenKind, String) {
    (TokenKind::Numeric, value.to_string())
}

pub fn string(value: &str) -> (TokenKind, String) {
    (TokenKind::String, value.to_string())
}

pub fn test_sql(sql: &str, interpreter: &mut Interpreter) -> DbResult<Vec<ExecResult>> {
    interpreter.run(sql)
}
