use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }

    /// Returns true for the end-of-input marker
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// All possible token types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Signed 64-bit integer literal
    Integer(i64),
    /// Symbol, including the booleans `#t` and `#f`
    Symbol(String),

    // Delimiters
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Quote mark (')
    Quote,
    /// Dot separating the tail of an improper list
    Dot,

    // Special
    /// End of input; produced once the source is exhausted and never
    /// surfaced as a symbol
    Eof,
}

impl TokenKind {
    /// Returns true if this token opens or closes a list
    pub fn is_bracket(&self) -> bool {
        matches!(self, TokenKind::LeftParen | TokenKind::RightParen)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Integer(n) => write!(f, "{}", n),
            TokenKind::Symbol(name) => write!(f, "{}", name),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Quote => write!(f, "'"),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
