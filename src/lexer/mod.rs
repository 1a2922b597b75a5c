//! Lexical analysis
//!
//! Converts source text into a lazy stream of S-expression tokens.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::{is_symbol_char, SExprScanner};
pub use token::{Token, TokenKind};
