use tracing::trace;
use crate::compiler::error::LexError;
use crate::compiler::token::{Cursor, Keyword, Symbol, Token, TokenKind};

/// Result of one sub-scanner: `None` when it does not match at the cursor,
/// otherwise the token (absent for whitespace) and the advanced cursor
pub type ScanResult = Option<(Option<Token>, Cursor)>;

type SubScanner = fn(&str, Cursor) -> ScanResult;

// tried in order at every position, first match wins
const SCANNERS: [SubScanner; 5] = [
    scan_keyword,
    scan_symbol,
    scan_identifier,
    scan_string,
    scan_numeric,
];

/// Split `source` into tokens. Fails on the first offset no scanner accepts.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).scan_tokens()
}

pub struct Scanner<'a> {
    source: &'a str,
    cursor: Cursor,
}

impl<'a> Scanner<'a> {

    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: Cursor::default(),
        }
    }

    /// Checking reaching end of input
    fn is_at_end(&self) -> bool {
        self.cursor.pointer >= self.source.len()
    }

    /// Scan the next token, skipping whitespace. `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        while !self.is_at_end() {
            let (token, cursor) = self.scan_one()?;
            self.cursor = cursor;
            if let Some(token) = token {
                trace!(kind = %token.kind, value = %token.value, location = %token.location, "scanned token");
                return Ok(Some(token));
            }
        }
        Ok(None)
    }

    /// Scan every token from text
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = vec![];
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn scan_one(&self) -> Result<(Option<Token>, Cursor), LexError> {
        SCANNERS.iter()
            .find_map(|scan| scan(self.source, self.cursor))
            .ok_or(LexError {
                offset: self.cursor.pointer,
                location: self.cursor.location,
            })
    }
}

/// Keywords, matched case-insensitively and emitted in lower case
pub fn scan_keyword(source: &str, ic: Cursor) -> ScanResult {
    let options = Keyword::ALL.map(|keyword| keyword.as_str());
    let matched = longest_match(source, ic, &options);
    if matched.is_empty() {
        return None;
    }

    let mut cur = ic;
    cur.pointer += matched.len();
    cur.location.col += matched.len();

    Some((Some(Token::new(matched, TokenKind::Keyword, ic.location)), cur))
}

/// Whitespace (no token) and punctuation symbols
pub fn scan_symbol(source: &str, ic: Cursor) -> ScanResult {
    let c = *source.as_bytes().get(ic.pointer)?;
    let mut cur = ic;

    match c {
        b'\n' => {
            // enter new line
            cur.pointer += 1;
            cur.location.row += 1;
            cur.location.col = 0;
            return Some((None, cur));
        }
        b' ' | b'\t' => {
            cur.pointer += 1;
            cur.location.col += 1;
            return Some((None, cur));
        }
        _ => {}
    }

    let options = Symbol::ALL.map(|symbol| symbol.as_str());
    let matched = longest_match(source, ic, &options);
    if matched.is_empty() {
        return None;
    }

    cur.pointer += matched.len();
    cur.location.col += matched.len();

    Some((Some(Token::new(matched, TokenKind::Symbol, ic.location)), cur))
}

/// Double-quoted identifiers keep their case, bare ones are lower-cased
pub fn scan_identifier(source: &str, ic: Cursor) -> ScanResult {
    if let Some((token, cur)) = scan_delimited(source, ic, b'"') {
        let token = Token { kind: TokenKind::Identifier, ..token };
        return Some((Some(token), cur));
    }

    let bytes = source.as_bytes();
    // identifier should start with a letter
    if !bytes.get(ic.pointer)?.is_ascii_alphabetic() {
        return None;
    }

    let mut cur = ic;
    let mut value = String::new();
    while let Some(&c) = bytes.get(cur.pointer) {
        if !(c.is_ascii_alphanumeric() || c == b'$' || c == b'_') {
            break;
        }
        value.push(c.to_ascii_lowercase() as char);
        cur.pointer += 1;
        cur.location.col += 1;
    }

    if value.is_empty() {
        return None;
    }

    Some((Some(Token::new(value, TokenKind::Identifier, ic.location)), cur))
}

/// Single-quoted string literal
pub fn scan_string(source: &str, ic: Cursor) -> ScanResult {
    scan_delimited(source, ic, b'\'')
        .map(|(token, cur)| (Some(token), cur))
}

/// Integers, decimals and exponents: `12`, `4.`, `.5`, `1.2e10`, `3E-4`
pub fn scan_numeric(source: &str, ic: Cursor) -> ScanResult {
    let bytes = source.as_bytes();
    let mut cur = ic;
    let mut period_found = false;
    let mut exp_marker_found = false;

    while let Some(&c) = bytes.get(cur.pointer) {
        let is_digit = c.is_ascii_digit();
        let is_period = c == b'.';
        let is_exp_marker = c == b'e' || c == b'E';

        // must start with a digit or period
        if cur.pointer == ic.pointer && !is_digit && !is_period {
            return None;
        }

        if is_period {
            if period_found {
                return None;
            }
            period_found = true;
        } else if is_exp_marker {
            if exp_marker_found {
                return None;
            }
            // no period allowed after the exponent marker
            period_found = true;
            exp_marker_found = true;

            if cur.pointer + 1 == bytes.len() {
                return None;
            }
            if matches!(bytes[cur.pointer + 1], b'+' | b'-') {
                cur.pointer += 1;
                cur.location.col += 1;
            }
        } else if !is_digit {
            break;
        }

        cur.pointer += 1;
        cur.location.col += 1;
    }

    if cur.pointer == ic.pointer {
        return None;
    }

    let value = &source[ic.pointer..cur.pointer];
    Some((Some(Token::new(value, TokenKind::Numeric, ic.location)), cur))
}

/// Text between two `delimiter`s. A doubled delimiter stands for one literal
/// delimiter; there is no backslash escaping. The token is located just past
/// the opening delimiter. Unterminated input does not match.
pub fn scan_delimited(source: &str, ic: Cursor, delimiter: u8) -> Option<(Token, Cursor)> {
    let bytes = source.as_bytes();
    if *bytes.get(ic.pointer)? != delimiter {
        return None;
    }

    // opening delimiter
    let mut cur = ic;
    cur.pointer += 1;
    cur.location.col += 1;
    let start = cur.location;

    let mut value = Vec::new();
    while let Some(&c) = bytes.get(cur.pointer) {
        if c == delimiter {
            if bytes.get(cur.pointer + 1) == Some(&delimiter) {
                value.push(delimiter);
                cur.pointer += 2;
                cur.location.col += 2;
                continue;
            }

            // closing delimiter
            cur.pointer += 1;
            cur.location.col += 1;
            let value = String::from_utf8_lossy(&value).into_owned();
            return Some((Token::new(value, TokenKind::String, start), cur));
        }

        value.push(c);
        cur.pointer += 1;
        cur.location.col += 1;
    }

    None
}

/// Longest option that exactly matches the input at `ic`, compared in lower
/// case. Returns an empty string when no option matches.
pub fn longest_match<'o>(source: &str, ic: Cursor, options: &[&'o str]) -> &'o str {
    let bytes = source.as_bytes();
    let mut value = Vec::new();
    let mut matched = "";
    let mut skipped = vec![false; options.len()];

    for &c in &bytes[ic.pointer.min(bytes.len())..] {
        value.push(c.to_ascii_lowercase());

        for (i, option) in options.iter().enumerate() {
            if skipped[i] {
                continue;
            }

            let option_bytes = option.as_bytes();
            if value == option_bytes {
                skipped[i] = true;
                if option.len() > matched.len() {
                    matched = option;
                }
                continue;
            }

            let too_long = value.len() > option_bytes.len();
            if too_long || !option_bytes.starts_with(&value) {
                skipped[i] = true;
            }
        }

        if skipped.iter().all(|&s| s) {
            break;
        }
    }

    matched
}
