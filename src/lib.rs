//! # Schemelet - A Small Scheme Interpreter
//!
//! An interpreter for a small Lisp/Scheme-family language over 64-bit
//! integers, symbols and mutable pairs.
//!
//! ## Quick Start
//!
//! Add Schemelet to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! schemelet = "0.1.0"
//! ```
//!
//! ### Basic Usage
//!
//! The evaluator owns one root environment and takes one top-level
//! expression per call:
//!
//! ```rust
//! use schemelet::Evaluator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut evaluator = Evaluator::new();
//!
//! evaluator.interpret("(define (fact n) (if (< n 1) 1 (* n (fact (- n 1)))))")?;
//! assert_eq!(evaluator.interpret("(fact 5)")?, "120");
//!
//! assert_eq!(evaluator.interpret("(cons 1 '(2 3))")?, "(1 2 3)");
//! assert_eq!(evaluator.interpret("(cons 1 2)")?, "(1 . 2)");
//! # Ok(())
//! # }
//! ```
//!
//! ### Reading Without Evaluating
//!
//! ```rust
//! use schemelet::{Parser, Scanner};
//!
//! # fn main() -> schemelet::Result<()> {
//! let mut parser = Parser::new(Scanner::new("(a . (b c))"));
//! let expr = parser.read()?;
//! assert_eq!(expr.to_string(), "(a b c)");
//! assert!(parser.is_at_end()?);
//!
//! let mut scanner = Scanner::new("'x");
//! assert_eq!(scanner.scan_tokens()?.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Language Overview
//!
//! - **Atoms**: integers (`42`, `-7`), symbols (`foo`, `set-car!`), the
//!   booleans `#t` and `#f`
//! - **Pairs**: `(1 2 3)`, `(1 . 2)`, quoted with `'`
//! - **Special forms**: `quote`, `if`, `define`, `lambda`, `set!`, `and`, `or`
//! - **Procedures**: `+ - * / max min abs`, `< <= > >= =`, `not`,
//!   `null? pair? list? boolean? symbol? number?`,
//!   `cons list car cdr set-car! set-cdr! list-ref list-tail`
//!
//! Only `#f` is false. `if` insists on a boolean condition.
//!
//! Closures capture a *copy* of the environment they are created in, so later
//! changes to outer bindings are not visible inside them:
//!
//! ```rust
//! # use schemelet::Evaluator;
//! # fn main() -> schemelet::Result<()> {
//! let mut evaluator = Evaluator::new();
//! evaluator.interpret("(define x 1)")?;
//! evaluator.interpret("(define (f) x)")?;
//! evaluator.interpret("(set! x 2)")?;
//! assert_eq!(evaluator.interpret("(f)")?, "1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → Value → Evaluator → Printer
//! ```
//!
//! - [`Scanner`] - Lazily tokenizes source text
//! - [`Parser`] - Reads one expression at a time into a [`Value`]
//! - [`Evaluator`] - Evaluates against a long-lived [`Environment`]
//! - [`ToolRegistry`] - Builtin procedures and special forms
//!
//! ## Error Handling
//!
//! ```rust
//! use schemelet::{Evaluator, ErrorKind};
//!
//! let mut evaluator = Evaluator::new();
//! assert_eq!(evaluator.interpret("(car '())").unwrap_err().kind(), ErrorKind::Runtime);
//! assert_eq!(evaluator.interpret("(foo)").unwrap_err().kind(), ErrorKind::Name);
//! assert_eq!(evaluator.interpret("(if 1 2 3)").unwrap_err().kind(), ErrorKind::Syntax);
//! ```

/// Version of the Schemelet interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod tools;

// Re-export main types
pub use error::{Error, ErrorKind, Result};
pub use lexer::{SExprScanner, Token, TokenKind};
pub use parser::SExprParser;
pub use runtime::{EnvRef, Environment, LispEvaluator, Value};
pub use tools::{Tool, ToolKind, ToolRegistry};

/// Type alias for the S-expression scanner (lexer).
pub type Scanner = SExprScanner;

/// Type alias for the S-expression reader.
pub type Parser = SExprParser;

/// Type alias for the evaluator driver.
pub type Evaluator = LispEvaluator;
