use tracing::debug;
use crate::compiler::ast::*;
use crate::compiler::error::{Expected, ParseError};
use crate::compiler::scanner::lex;
use crate::compiler::token::{Keyword, Symbol, Token, TokenKind};
use crate::types::DbResult;

type ParseResult<T> = Result<T, ParseError>;

/// Outcome of trying one grammar rule at a token index:
/// `Ok(None)` when its leading keyword is absent, `Ok(Some((node, next)))` on
/// success, `Err` once the rule has committed and then failed.
type Attempt<T> = ParseResult<Option<(T, usize)>>;

type StatementRule<'a> = fn(&Parser<'a>, usize) -> Attempt<Statement>;

/// Lex and parse `source` into an AST
pub fn parse(source: &str) -> DbResult<Ast> {
    let tokens = lex(source)?;
    let ast = Parser::new(&tokens).parse()?;
    debug!(tokens = tokens.len(), statements = ast.statements.len(), "parsed input");
    Ok(ast)
}

/// Recursive-descent parser over a borrowed token slice. Every rule takes the
/// index to start from and returns the index after what it consumed, so a
/// failed attempt leaves nothing to restore.
pub struct Parser<'a> {
    tokens: &'a [Token],
}

impl<'a> Parser<'a> {

    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens }
    }

    /**
    program := ( statement ;+ )*
     */
    pub fn parse(&self) -> ParseResult<Ast> {
        let mut statements = vec![];
        let mut cursor = 0;

        while cursor < self.tokens.len() {
            let (statement, next) = self.parse_statement(cursor)?;
            statements.push(statement);
            cursor = next;

            let mut found_semicolon = false;
            while self.expect_symbol(cursor, Symbol::Semicolon) {
                cursor += 1;
                found_semicolon = true;
            }
            if !found_semicolon {
                return Err(self.error_at(cursor, Expected::Semicolon));
            }
        }

        Ok(Ast { statements })
    }

    /**
    statement := select_stmt
    | insert_stmt
    | create_table_stmt
     */
    pub fn parse_statement(&self, cursor: usize) -> ParseResult<(Statement, usize)> {
        let rules: [(&str, StatementRule<'a>); 3] = [
            ("select", Parser::parse_select),
            ("insert", Parser::parse_insert),
            ("create table", Parser::parse_create_table),
        ];

        // every rule starts from the same index
        let mut cause = None;
        for (name, rule) in rules {
            match rule(self, cursor) {
                Ok(Some(parsed)) => return Ok(parsed),
                Ok(None) => {}
                Err(err) => {
                    debug!(rule = name, %err, "statement attempt failed");
                    cause.get_or_insert(err);
                }
            }
        }

        let mut err = self.error_at(cursor, Expected::Statement);
        err.cause = cause.map(Box::new);
        Err(err)
    }

    /**
    select_stmt := SELECT expression (, expression)* ( FROM identifier )?
     */
    fn parse_select(&self, cursor: usize) -> Attempt<Statement> {
        if !self.expect_keyword(cursor, Keyword::Select) {
            return Ok(None);
        }

        let terminators = [
            Token::from_keyword(Keyword::From),
            Token::from_symbol(Symbol::Semicolon),
        ];
        let (items, mut cursor) = self.parse_expressions(cursor + 1, &terminators)?;
        if items.is_empty() {
            return Err(self.error_at(cursor, Expected::Expression));
        }

        let mut from = None;
        if self.expect_keyword(cursor, Keyword::From) {
            let (table, next) = self.consume_kind(cursor + 1, TokenKind::Identifier, Expected::TableName)?;
            from = Some(table);
            cursor = next;
        }

        Ok(Some((Statement::Select(SelectStatement { items, from }), cursor)))
    }

    /**
    insert_stmt := INSERT INTO identifier VALUES ( expression (, expression)* )
     */
    fn parse_insert(&self, cursor: usize) -> Attempt<Statement> {
        if !self.expect_keyword(cursor, Keyword::Insert) {
            return Ok(None);
        }

        let cursor = self.consume_keyword(cursor + 1, Keyword::Into)?;
        let (table, cursor) = self.consume_kind(cursor, TokenKind::Identifier, Expected::TableName)?;
        let cursor = self.consume_keyword(cursor, Keyword::Values)?;
        let cursor = self.consume_symbol(cursor, Symbol::LParen)?;

        let (values, cursor) = self.parse_expressions(cursor, &[Token::from_symbol(Symbol::RParen)])?;
        if values.is_empty() {
            return Err(self.error_at(cursor, Expected::Expression));
        }
        let cursor = self.consume_symbol(cursor, Symbol::RParen)?;

        Ok(Some((Statement::Insert(InsertStatement { table, values }), cursor)))
    }

    /**
    create_table_stmt := CREATE TABLE identifier ( ( column_def (, column_def)* )? )
     */
    fn parse_create_table(&self, cursor: usize) -> Attempt<Statement> {
        if !self.expect_keyword(cursor, Keyword::Create) {
            return Ok(None);
        }

        let cursor = self.consume_keyword(cursor + 1, Keyword::Table)?;
        let (name, cursor) = self.consume_kind(cursor, TokenKind::Identifier, Expected::TableName)?;
        let cursor = self.consume_symbol(cursor, Symbol::LParen)?;
        let (columns, cursor) = self.parse_column_definitions(cursor, Symbol::RParen)?;
        let cursor = self.consume_symbol(cursor, Symbol::RParen)?;

        Ok(Some((Statement::CreateTable(CreateTableStatement { name, columns }), cursor)))
    }

    /**
    expressions := ( expression (, expression)* )?

    Stops in front of any of `terminators` (or at end of input) without
    consuming it.
     */
    fn parse_expressions(&self, cursor: usize, terminators: &[Token]) -> ParseResult<(Vec<Expression>, usize)> {
        let mut cursor = cursor;
        let mut expressions = vec![];

        while let Some(current) = self.tokens.get(cursor) {
            if terminators.contains(current) {
                break;
            }

            if !expressions.is_empty() {
                cursor = self.consume_symbol(cursor, Symbol::Comma)?;
            }

            let (expression, next) = self.parse_expression(cursor)
                .ok_or_else(|| self.error_at(cursor, Expected::Expression))?;
            expressions.push(expression);
            cursor = next;
        }

        Ok((expressions, cursor))
    }

    /**
    expression := identifier | numeric | string
     */
    fn parse_expression(&self, cursor: usize) -> Option<(Expression, usize)> {
        [TokenKind::Identifier, TokenKind::Numeric, TokenKind::String]
            .into_iter()
            .find_map(|kind| self.parse_token(cursor, kind))
            .map(|(token, next)| (Expression::Literal(token), next))
    }

    /**
    column_defs := ( column_def (, column_def)* )?
    column_def := identifier keyword
     */
    fn parse_column_definitions(&self, cursor: usize, terminator: Symbol) -> ParseResult<(Vec<ColumnDefinition>, usize)> {
        let mut cursor = cursor;
        let mut columns = vec![];

        loop {
            let current = self.tokens.get(cursor)
                .ok_or_else(|| self.error_at(cursor, Expected::Symbol(terminator)))?;
            if current.is_symbol(terminator) {
                break;
            }

            if !columns.is_empty() {
                cursor = self.consume_symbol(cursor, Symbol::Comma)?;
            }

            let (name, next) = self.consume_kind(cursor, TokenKind::Identifier, Expected::ColumnName)?;
            // type names are checked by the backend
            let (datatype, next) = self.consume_kind(next, TokenKind::Keyword, Expected::ColumnType)?;
            columns.push(ColumnDefinition { name, datatype });
            cursor = next;
        }

        Ok((columns, cursor))
    }

    // helper functions
    fn parse_token(&self, cursor: usize, kind: TokenKind) -> Option<(Token, usize)> {
        self.tokens.get(cursor)
            .filter(|token| token.kind == kind)
            .map(|token| (token.clone(), cursor + 1))
    }

    fn expect_token(&self, cursor: usize, template: &Token) -> bool {
        self.tokens.get(cursor).is_some_and(|token| token == template)
    }

    fn expect_keyword(&self, cursor: usize, keyword: Keyword) -> bool {
        self.expect_token(cursor, &Token::from_keyword(keyword))
    }

    fn expect_symbol(&self, cursor: usize, symbol: Symbol) -> bool {
        self.expect_token(cursor, &Token::from_symbol(symbol))
    }

    fn consume_keyword(&self, cursor: usize, keyword: Keyword) -> ParseResult<usize> {
        if self.expect_keyword(cursor, keyword) {
            Ok(cursor + 1)
        } else {
            Err(self.error_at(cursor, Expected::Keyword(keyword)))
        }
    }

    fn consume_symbol(&self, cursor: usize, symbol: Symbol) -> ParseResult<usize> {
        if self.expect_symbol(cursor, symbol) {
            Ok(cursor + 1)
        } else {
            Err(self.error_at(cursor, Expected::Symbol(symbol)))
        }
    }

    fn consume_kind(&self, cursor: usize, kind: TokenKind, expected: Expected) -> ParseResult<(Token, usize)> {
        self.parse_token(cursor, kind)
            .ok_or_else(|| self.error_at(cursor, expected))
    }

    /// Error pointing at the token under `cursor`, or at the last token once
    /// the input is exhausted
    fn error_at(&self, cursor: usize, expected: Expected) -> ParseError {
        let found = self.tokens.get(cursor).cloned();
        let location = match &found {
            Some(token) => token.location,
            None => cursor.checked_sub(1)
                .and_then(|previous| self.tokens.get(previous))
                .map(|token| token.location)
                .unwrap_or_default(),
        };

        ParseError { expected, found, location, cause: None }
    }
}
