use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select, From, Where, As,
    Create, Table,
    Insert, Into, Values,
    Update, Delete,

    // data types
    Int, Text,
}

impl Keyword {
    pub const ALL: [Keyword; 13] = [
        Keyword::Select, Keyword::From, Keyword::Where, Keyword::As,
        Keyword::Table, Keyword::Create,
        Keyword::Insert, Keyword::Into, Keyword::Values,
        Keyword::Update, Keyword::Delete,
        Keyword::Int, Keyword::Text,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Keyword::Select => "select",
            Keyword::From => "from",
            Keyword::Where => "where",
            Keyword::As => "as",
            Keyword::Create => "create",
            Keyword::Table => "table",
            Keyword::Insert => "insert",
            Keyword::Into => "into",
            Keyword::Values => "values",
            Keyword::Update => "update",
            Keyword::Delete => "delete",
            Keyword::Int => "int",
            Keyword::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Semicolon,  // ;
    Comma,      // ,
    Asterisk,   // *
    LParen,     // (
    RParen,     // )
    Plus,       // +
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Semicolon,
        Symbol::Comma,
        Symbol::Asterisk,
        Symbol::LParen,
        Symbol::RParen,
        Symbol::Plus,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Symbol::Semicolon => ";",
            Symbol::Comma => ",",
            Symbol::Asterisk => "*",
            Symbol::LParen => "(",
            Symbol::RParen => ")",
            Symbol::Plus => "+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Symbol,
    Identifier,
    String,
    Numeric,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Numeric => "numeric",
        };
        f.write_str(name)
    }
}

/// Row and column of a token in the source, both starting at 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Scanning position: byte offset into the source plus its location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub pointer: usize,
    pub location: Location,
}

impl Cursor {
    pub const fn new(pointer: usize, row: usize, col: usize) -> Self {
        Self { pointer, location: Location::new(row, col) }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub location: Location, // position of the first character, for error reporting
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, location: Location) -> Self {
        Self { value: value.into(), kind, location }
    }

    /// Template token used by the parser to match a keyword
    pub fn from_keyword(keyword: Keyword) -> Self {
        Self::new(keyword.as_str(), TokenKind::Keyword, Location::default())
    }

    /// Template token used by the parser to match a symbol
    pub fn from_symbol(symbol: Symbol) -> Self {
        Self::new(symbol.as_str(), TokenKind::Symbol, Location::default())
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword && self.value == keyword.as_str()
    }

    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.kind == TokenKind::Symbol && self.value == symbol.as_str()
    }
}

// location is left out so template tokens match scanned ones
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "'{}'", self.value),
            _ => f.write_str(&self.value),
        }
    }
}
