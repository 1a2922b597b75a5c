//! Builtin callables
//!
//! Provides the framework for builtin procedures and special forms, and the
//! registry the root environment is populated from.

pub mod stdlib;

use crate::error::{Error, Result};
use crate::runtime::{EnvRef, Value};
use std::collections::hash_map;
use std::collections::HashMap;
use std::rc::Rc;

/// How a builtin receives its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Arguments are evaluated left to right before the call
    Procedure,
    /// Arguments are handed over as raw expressions
    SpecialForm,
}

/// Tool trait - every builtin implements this
pub trait Tool {
    /// Name the builtin is bound under in the root environment
    fn name(&self) -> &str;

    /// Tool description
    fn description(&self) -> &str;

    /// Argument-passing contract
    fn kind(&self) -> ToolKind {
        ToolKind::Procedure
    }

    /// Execute the tool
    ///
    /// `args` are values for a procedure and unevaluated expressions for a
    /// special form; `env` is the environment of the call site.
    fn execute(&self, args: &[Value], env: &EnvRef) -> Result<Value>;
}

/// Fails with a syntax error unless exactly `expected` arguments were given
pub(crate) fn check_arity_syntax(tool: &str, args: &[Value], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::syntax(arity_message(tool, expected, args.len())));
    }
    Ok(())
}

/// Fails with a runtime error unless exactly `expected` arguments were given
pub(crate) fn check_arity_runtime(tool: &str, args: &[Value], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::runtime(arity_message(tool, expected, args.len())));
    }
    Ok(())
}

fn arity_message(tool: &str, expected: usize, got: usize) -> String {
    format!(
        "{} expects {} argument{}, got {}",
        tool,
        expected,
        if expected == 1 { "" } else { "s" },
        got
    )
}

/// Tool registry
pub struct ToolRegistry {
    tools: HashMap<String, Rc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create new registry with standard library
    pub fn new() -> Self {
        let mut registry = ToolRegistry::empty();

        // Register all standard library tools
        stdlib::register_all(&mut registry);

        registry
    }

    /// Create empty registry
    pub fn empty() -> Self {
        ToolRegistry {
            tools: HashMap::new(),
        }
    }

    /// Register a tool, replacing any tool of the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Rc::new(tool));
    }

    /// Get tool by name
    pub fn get(&self, name: &str) -> Result<Rc<dyn Tool>> {
        self.tools.get(name).cloned().ok_or_else(|| Error::name(name))
    }

    /// Check if tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// List all tool names
    pub fn list_tools(&self) -> Vec<String> {
        let mut names: Vec<_> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get tool count
    pub fn count(&self) -> usize {
        self.tools.len()
    }

    /// Iterate over every registered tool
    pub fn iter(&self) -> hash_map::Iter<'_, String, Rc<dyn Tool>> {
        self.tools.iter()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
