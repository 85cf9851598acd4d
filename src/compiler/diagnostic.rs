//! Human-readable rendering of lexer and parser errors. The grammar code only
//! produces structured errors; turning them into text happens here.

use crate::compiler::error::{LexError, ParseError};
use crate::compiler::token::Location;
use crate::types::DbError;

/// Source line at `location` with a caret under its column
pub fn caret_hint(source: &str, location: Location) -> String {
    let line = source.lines().nth(location.row).unwrap_or_default();
    format!("{}\n{}^\nat: {}", line, " ".repeat(location.col), location)
}

pub fn render_lex_error(source: &str, err: &LexError) -> String {
    format!(
        "unable to lex tokens at offset {}:\n{}",
        err.offset,
        caret_hint(source, err.location)
    )
}

/// The caret goes under the committed grammar's error when there is one
pub fn render_parse_error(source: &str, err: &ParseError) -> String {
    let location = err.cause.as_deref().map_or(err.location, |cause| cause.location);
    format!("failed to parse {}\n{}", err, caret_hint(source, location))
}

/// Render any error, with a caret hint when it came from the front end
pub fn render_error(source: &str, err: &DbError) -> String {
    match err {
        DbError::Lex(err) => render_lex_error(source, err),
        DbError::Parse(err) => render_parse_error(source, err),
        other => other.to_string(),
    }
}
