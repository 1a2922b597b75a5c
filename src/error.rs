//! Error types for the Schemelet interpreter

use thiserror::Error;

/// Interpreter errors
///
/// Every failure aborts evaluation of the current top-level expression;
/// nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed program text or malformed argument shape
    ///
    /// **Triggered by:** unterminated lists, a misplaced dot, `#` not followed by
    /// `t`/`f`, wrong arity for a special form, a non-boolean `if` condition
    /// **Example:** `(1 . 2 3)`, `(if 1 2 3)`
    #[error("Syntax error: {0}")]
    SyntaxError(String),

    /// Reference to, or mutation of, an unbound identifier
    ///
    /// **Triggered by:** looking up a symbol that was never defined, or `set!`
    /// on a name that is not bound yet
    /// **Example:** `(foo)` when `foo` was never defined
    /// **Prevention:** bind the name with `(define name value)` first
    #[error("Name error: undefined variable '{name}'")]
    NameError {
        /// Identifier that failed to resolve
        name: String,
    },

    /// A value has the wrong kind for the operation applied to it
    ///
    /// **Triggered by:** non-numeric arithmetic operands, applying a
    /// non-callable head, `car` of a non-list, out-of-range list indices
    /// **Example:** `(+ 1 #t)`, `(car '())`, `(list-ref (list 1 2) 5)`
    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

/// Error classification, one per [`Error`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed source or argument shape
    Syntax,
    /// Unbound identifier
    Name,
    /// Wrong kind of value at evaluation time
    Runtime,
}

impl Error {
    /// Create a syntax error with a message
    pub fn syntax(msg: impl Into<String>) -> Self {
        Error::SyntaxError(msg.into())
    }

    /// Create a runtime error with a message
    pub fn runtime(msg: impl Into<String>) -> Self {
        Error::RuntimeError(msg.into())
    }

    /// Create a name error for an unbound identifier
    pub fn name(name: impl Into<String>) -> Self {
        Error::NameError { name: name.into() }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SyntaxError(_) => ErrorKind::Syntax,
            Error::NameError { .. } => ErrorKind::Name,
            Error::RuntimeError(_) => ErrorKind::Runtime,
        }
    }
}

/// Result type for Schemelet operations
pub type Result<T> = std::result::Result<T, Error>;
