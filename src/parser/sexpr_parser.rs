use crate::error::{Error, Result};
use crate::lexer::{SExprScanner, TokenKind};
use crate::runtime::Value;

/// S-expression reader
///
/// Pulls tokens from a scanner one at a time and builds values directly: an
/// integer or symbol token becomes an atom, a bracketed sequence becomes a
/// pair chain, and `'x` becomes the two-element list `(quote x)`.
pub struct SExprParser {
    scanner: SExprScanner,
}

impl SExprParser {
    /// Creates a reader over a token stream
    pub fn new(scanner: SExprScanner) -> Self {
        SExprParser { scanner }
    }

    /// Creates a reader over source text
    pub fn from_source(source: &str) -> Self {
        Self::new(SExprScanner::new(source))
    }

    /// Reads one expression
    ///
    /// Returns [`Value::Nil`] when the source is exhausted, which is
    /// indistinguishable from reading `()`.
    pub fn read(&mut self) -> Result<Value> {
        let token = self.scanner.next_token()?;
        match token.kind {
            TokenKind::Eof => Ok(Value::Nil),
            TokenKind::Integer(n) => Ok(Value::Int(n)),
            TokenKind::Symbol(name) => Ok(Value::symbol(&name)),
            TokenKind::LeftParen => self.read_list(),
            TokenKind::Quote => {
                let next = self.scanner.peek_token()?;
                if matches!(next.kind, TokenKind::Eof | TokenKind::RightParen) {
                    return Err(Error::syntax(format!(
                        "quote must be followed by an expression at line {}, column {}",
                        next.line, next.column
                    )));
                }
                let quoted = self.read()?;
                Ok(Value::list(vec![Value::symbol("quote"), quoted]))
            }
            TokenKind::RightParen | TokenKind::Dot => Err(Error::syntax(format!(
                "unexpected '{}' at line {}, column {}",
                token.kind, token.line, token.column
            ))),
        }
    }

    /// Reads the rest of a list whose opening bracket was already consumed
    pub fn read_list(&mut self) -> Result<Value> {
        let mut elements = Vec::new();
        let mut tail = Value::Nil;

        loop {
            let token = self.scanner.peek_token()?.clone();
            match token.kind {
                TokenKind::RightParen => {
                    self.scanner.next_token()?;
                    break;
                }
                TokenKind::Dot => {
                    if elements.is_empty() {
                        return Err(Error::syntax(format!(
                            "dot cannot start a list at line {}, column {}",
                            token.line, token.column
                        )));
                    }
                    self.scanner.next_token()?;
                    tail = self.read_element()?;

                    let close = self.scanner.next_token()?;
                    if close.kind != TokenKind::RightParen {
                        return Err(Error::syntax(
                            "dot must be followed by exactly one element and a closing bracket",
                        ));
                    }
                    break;
                }
                _ => elements.push(self.read_element()?),
            }
        }

        Ok(Value::list_with_tail(elements, tail))
    }

    /// Returns true once every token has been consumed
    pub fn is_at_end(&mut self) -> Result<bool> {
        self.scanner.is_at_end()
    }

    /// Reads an expression inside a list, where running out of input is an
    /// error
    fn read_element(&mut self) -> Result<Value> {
        if self.scanner.is_at_end()? {
            return Err(Error::syntax("unterminated list"));
        }
        self.read()
    }
}
