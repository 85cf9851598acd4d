use minisql::compiler::ast::*;
use minisql::compiler::error::{Expected, ParseError};
use minisql::compiler::parser::{parse, Parser};
use minisql::compiler::scanner::lex;
use minisql::compiler::token::{Keyword, Location, Symbol, TokenKind};
use minisql::types::DbError;

fn parse_sql(sql: &str) -> Vec<Statement> {
    parse(sql).unwrap().statements
}

fn parse_error(sql: &str) -> ParseError {
    match parse(sql) {
        Err(DbError::Parse(err)) => err,
        other => panic!("Expected parse error for {sql:?}, got {other:?}"),
    }
}

/// The hard error of the statement grammar that committed
fn committed_error(sql: &str) -> ParseError {
    let err = parse_error(sql);
    assert_eq!(err.expected, Expected::Statement);
    *err.cause.expect("a statement grammar should have committed")
}

fn values(expressions: &[Expression]) -> Vec<(TokenKind, &str)> {
    expressions.iter()
        .map(|e| (e.literal().kind, e.literal().value.as_str()))
        .collect()
}

#[test]
fn test_create_table() {
    let stmts = parse_sql("CREATE TABLE users (id INT, name TEXT);");

    assert_eq!(stmts.len(), 1);
    match &stmts[0] {
        Statement::CreateTable(CreateTableStatement { name, columns }) => {
            assert_eq!(name.value, "users");
            assert_eq!(columns.len(), 2);
            assert_eq!(columns[0].name.value, "id");
            assert_eq!(columns[0].datatype.value, "int");
            assert_eq!(columns[1].name.value, "name");
            assert_eq!(columns[1].datatype.value, "text");
            assert_eq!(columns[1].datatype.kind, TokenKind::Keyword);
        }
        _ => panic!("Expected CreateTable"),
    }
}

#[test]
fn test_create_table_without_columns() {
    let stmts = parse_sql("CREATE TABLE t ();");
    match &stmts[0] {
        Statement::CreateTable(stmt) => {
            assert_eq!(stmt.name.value, "t");
            assert!(stmt.columns.is_empty());
        }
        _ => panic!("Expected CreateTable"),
    }
}

#[test]
fn test_create_table_column_type_is_any_keyword() {
    // type names are the backend's concern
    let stmts = parse_sql("CREATE TABLE t (a select);");
    match &stmts[0] {
        Statement::CreateTable(stmt) => assert_eq!(stmt.columns[0].datatype.value, "select"),
        _ => panic!("Expected CreateTable"),
    }
}

#[test]
fn test_insert() {
    let stmts = parse_sql("INSERT INTO users VALUES (1, 'Alice', \"Phil\", 2.5e3);");

    match &stmts[0] {
        Statement::Insert(InsertStatement { table, values: exprs }) => {
            assert_eq!(table.value, "users");
            assert_eq!(
                values(exprs),
                vec![
                    (TokenKind::Numeric, "1"),
                    (TokenKind::String, "Alice"),
                    (TokenKind::Identifier, "Phil"),
                    (TokenKind::Numeric, "2.5e3"),
                ]
            );
        }
        _ => panic!("Expected Insert statement"),
    }
}

#[test]
fn test_select() {
    let stmts = parse_sql("SELECT name, age FROM users;");

    match &stmts[0] {
        Statement::Select(SelectStatement { items, from }) => {
            assert_eq!(
                values(items),
                vec![(TokenKind::Identifier, "name"), (TokenKind::Identifier, "age")]
            );
            assert_eq!(from.as_ref().map(|t| t.value.as_str()), Some("users"));
        }
        _ => panic!("Expected Select statement"),
    }
}

#[test]
fn test_select_without_from() {
    let stmts = parse_sql("SELECT 1, 'a';");

    match &stmts[0] {
        Statement::Select(SelectStatement { items, from }) => {
            assert_eq!(values(items), vec![(TokenKind::Numeric, "1"), (TokenKind::String, "a")]);
            assert!(from.is_none());
        }
        _ => panic!("Expected Select statement"),
    }
}

#[test]
fn test_multiple_statements() {
    let sql = "
            CREATE TABLE t1 (id INT);;
            INSERT INTO t1 VALUES (1);
            SELECT id FROM t1;;;
        ";
    let stmts = parse_sql(sql);
    assert_eq!(stmts.len(), 3);
    assert!(matches!(stmts[0], Statement::CreateTable(_)));
    assert!(matches!(stmts[1], Statement::Insert(_)));
    assert!(matches!(stmts[2], Statement::Select(_)));
}

#[test]
fn test_empty_input() {
    assert!(parse_sql("").is_empty());
    assert!(parse_sql(" \n\t").is_empty());
}

#[test]
fn test_parse_error_missing_semicolon() {
    let err = parse_error("SELECT id FROM users");
    assert!(err.is_missing_semicolon());
    assert!(err.found.is_none());
    // nothing left to point at, so the last token is reported
    assert_eq!(err.location, Location::new(0, 15));
    assert!(err.to_string().contains("missing semicolon"), "got: {err}");
}

#[test]
fn test_missing_semicolon_between_statements() {
    let err = parse_error("SELECT a FROM t SELECT b FROM t;");
    assert!(err.is_missing_semicolon());
    assert_eq!(err.found.as_ref().map(|t| t.value.as_str()), Some("select"));
    assert_eq!(err.location, Location::new(0, 16));
}

#[test]
fn test_no_statement_matches() {
    let err = parse_error("UPDATE t;");
    assert_eq!(err.expected, Expected::Statement);
    assert!(err.cause.is_none());
    assert_eq!(err.location, Location::new(0, 0));

    let err = parse_error("SELECT a FROM t; 42;");
    assert_eq!(err.expected, Expected::Statement);
    assert_eq!(err.location, Location::new(0, 17));
}

#[test]
fn test_insert_bogus_reports_expected_statement() {
    let err = parse_error("INSERT BOGUS");
    assert_eq!(err.expected, Expected::Statement);
    assert_eq!(err.location, Location::new(0, 0));

    let cause = err.cause.as_deref().unwrap();
    assert_eq!(cause.expected, Expected::Keyword(Keyword::Into));
    assert_eq!(cause.found.as_ref().map(|t| t.value.as_str()), Some("bogus"));
    assert_eq!(cause.location, Location::new(0, 7));

    let message = err.to_string();
    assert!(message.contains("expected statement"), "got: {message}");
    assert!(message.contains("expected INTO, got bogus"), "got: {message}");
}

#[test]
fn test_failed_attempt_does_not_move_cursor() {
    let tokens = lex("INSERT BOGUS; SELECT a FROM t;").unwrap();
    let parser = Parser::new(&tokens);

    let first = parser.parse_statement(0).unwrap_err();
    let second = parser.parse_statement(0).unwrap_err();
    assert_eq!(first, second);

    let (stmt, next) = parser.parse_statement(3).unwrap();
    assert!(matches!(stmt, Statement::Select(_)));
    assert_eq!(next, 7);
}

#[test]
fn test_select_hard_errors() {
    let err = committed_error("SELECT a b FROM t;");
    assert_eq!(err.expected, Expected::Symbol(Symbol::Comma));
    assert_eq!(err.location, Location::new(0, 9));

    let err = committed_error("SELECT FROM t;");
    assert_eq!(err.expected, Expected::Expression);

    let err = committed_error("SELECT a, FROM t;");
    assert_eq!(err.expected, Expected::Expression);

    let err = committed_error("SELECT a FROM;");
    assert_eq!(err.expected, Expected::TableName);

    // '*' is a symbol, not an expression
    let err = committed_error("SELECT * FROM t;");
    assert_eq!(err.expected, Expected::Expression);
}

#[test]
fn test_insert_hard_errors() {
    assert_eq!(committed_error("INSERT INTO VALUES (1);").expected, Expected::TableName);
    assert_eq!(
        committed_error("INSERT INTO t (1);").expected,
        Expected::Keyword(Keyword::Values)
    );
    assert_eq!(
        committed_error("INSERT INTO t VALUES 1;").expected,
        Expected::Symbol(Symbol::LParen)
    );
    assert_eq!(committed_error("INSERT INTO t VALUES ();").expected, Expected::Expression);

    let err = committed_error("INSERT INTO t VALUES (1, 2");
    assert_eq!(err.expected, Expected::Symbol(Symbol::RParen));
    assert!(err.found.is_none());
    assert_eq!(err.location, Location::new(0, 25));
}

#[test]
fn test_create_table_hard_errors() {
    assert_eq!(
        committed_error("CREATE t (a INT);").expected,
        Expected::Keyword(Keyword::Table)
    );
    assert_eq!(committed_error("CREATE TABLE (a INT);").expected, Expected::TableName);
    assert_eq!(
        committed_error("CREATE TABLE t a INT;").expected,
        Expected::Symbol(Symbol::LParen)
    );
    assert_eq!(committed_error("CREATE TABLE t (a INT, b);").expected, Expected::ColumnType);
    assert_eq!(committed_error("CREATE TABLE t (INT);").expected, Expected::ColumnName);
    assert_eq!(
        committed_error("CREATE TABLE t (a INT b TEXT);").expected,
        Expected::Symbol(Symbol::Comma)
    );

    let err = committed_error("CREATE TABLE t (a INT");
    assert_eq!(err.expected, Expected::Symbol(Symbol::RParen));
    assert_eq!(err.location, Location::new(0, 18));
}

#[test]
fn test_lex_error_propagates() {
    match parse("SELECT #;") {
        Err(DbError::Lex(err)) => assert_eq!(err.offset, 7),
        other => panic!("Expected lex error, got {other:?}"),
    }
}
