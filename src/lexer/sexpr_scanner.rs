use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Returns true for characters that may appear inside a symbol
pub fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '*' | '?' | '!' | '<' | '>' | '=' | '#' | '/')
}

/// Scanner for S-expression syntax
///
/// Tokens are produced lazily: the reader pulls one token at a time and may
/// look one token ahead. Once the source is exhausted every further request
/// yields [`TokenKind::Eof`].
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Column where the current token started
    start_column: usize,
    /// One-token lookahead
    peeked: Option<Token>,
}

impl SExprScanner {
    /// Creates a new S-expression scanner from source code
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_column: 1,
            peeked: None,
        }
    }

    /// Returns the next token without consuming it
    pub fn peek_token(&mut self) -> Result<&Token> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan_token()?,
        };
        Ok(&*self.peeked.insert(token))
    }

    /// Consumes and returns the next token
    pub fn next_token(&mut self) -> Result<Token> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.scan_token(),
        }
    }

    /// Returns true once only the end-of-input marker remains
    pub fn is_at_end(&mut self) -> Result<bool> {
        Ok(self.peek_token()?.is_eof())
    }

    /// Scans all remaining tokens, ending with a single `Eof`
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn scan_token(&mut self) -> Result<Token> {
        self.skip_ignored();
        self.start = self.current;
        self.start_column = self.column;

        if self.is_at_source_end() {
            return Ok(Token::new(
                TokenKind::Eof,
                String::new(),
                self.line,
                self.column,
            ));
        }

        let c = self.advance();
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '\'' => TokenKind::Quote,
            '.' => TokenKind::Dot,

            c if c.is_ascii_digit() => self.scan_number()?,

            '+' | '-' => {
                if self.peek().is_ascii_digit() {
                    self.scan_number()?
                } else {
                    TokenKind::Symbol(c.to_string())
                }
            }

            '<' | '>' => {
                self.match_char('=');
                TokenKind::Symbol(self.lexeme())
            }

            '#' => {
                if self.match_char('t') || self.match_char('f') {
                    TokenKind::Symbol(self.lexeme())
                } else {
                    return Err(Error::syntax(format!(
                        "expected #t or #f at line {}, column {}",
                        self.line, self.start_column
                    )));
                }
            }

            '*' | '/' | '=' => TokenKind::Symbol(c.to_string()),

            // Letters, `?` and `!` open a symbol that runs over every constituent
            _ => {
                while is_symbol_char(self.peek()) {
                    self.advance();
                }
                TokenKind::Symbol(self.lexeme())
            }
        };

        Ok(Token::new(kind, self.lexeme(), self.line, self.start_column))
    }

    /// Skips whitespace and every character that cannot start a token
    fn skip_ignored(&mut self) {
        while !self.is_at_source_end() {
            let c = self.peek();
            if matches!(c, '(' | ')' | '.' | '\'') || is_symbol_char(c) {
                break;
            }
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            }
            self.advance();
        }
    }

    fn scan_number(&mut self) -> Result<TokenKind> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let text = self.lexeme();
        let value: i64 = text.parse().map_err(|_| {
            Error::syntax(format!(
                "integer literal {} out of range at line {}, column {}",
                text, self.line, self.start_column
            ))
        })?;
        Ok(TokenKind::Integer(value))
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn is_at_source_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_source_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_source_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            self.column += 1;
            true
        }
    }
}
