//! Runtime execution: value model, environments, evaluation and printing

mod environment;
mod lisp_evaluator;
pub mod printer;
mod value;

pub use environment::{EnvRef, Environment};
pub use lisp_evaluator::{apply, apply_closure, eval, extract_args, LispEvaluator};
pub use printer::print;
pub use value::{Closure, List, Pair, Value, FALSE, QUOTE_PREFIX, TRUE};
