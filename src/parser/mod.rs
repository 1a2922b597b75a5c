//! Reader
//!
//! Turns a token stream into values, one top-level expression at a time.

mod sexpr_parser;

pub use sexpr_parser::SExprParser;
