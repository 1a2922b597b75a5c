use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::runtime::value::{release_closures, Value};
use crate::tools::ToolRegistry;

/// Shared, mutable handle to an environment
pub type EnvRef = Rc<RefCell<Environment>>;

/// Flat name-to-value mapping
///
/// There is no parent chain: closures capture a full copy of the
/// environment they were created in, so every lookup is a single map probe.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Creates an environment holding every standard builtin
    pub fn standard() -> Self {
        Self::with_registry(&ToolRegistry::new())
    }

    /// Creates an environment holding every tool of `registry`
    pub fn with_registry(registry: &ToolRegistry) -> Self {
        let mut env = Environment::new();
        for (name, tool) in registry.iter() {
            env.define(name.clone(), Value::Builtin(Rc::clone(tool)));
        }
        env
    }

    /// Wraps the environment in a shared handle
    pub fn into_ref(self) -> EnvRef {
        Rc::new(RefCell::new(self))
    }

    /// Gets the value bound to `name`
    pub fn get(&self, name: &str) -> Result<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| Error::name(name))
    }

    /// Binds `name`, replacing any existing binding
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Rebinds an existing name
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::name(name)),
        }
    }

    /// Checks if a name is bound
    pub fn exists(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Copies every binding into a fresh environment
    ///
    /// Values are shared, not deep-copied: pairs and closures in the copy are
    /// the same cells as in `self`.
    pub fn snapshot(&self) -> Environment {
        self.clone()
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if nothing is bound
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Bound names in sorted order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.variables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Removes every binding and breaks closure cycles reachable from them
    pub fn clear(&mut self) {
        let values: Vec<Value> = self.variables.drain().map(|(_, value)| value).collect();
        release_closures(values);
    }

    pub(crate) fn into_values(self) -> impl Iterator<Item = Value> {
        self.variables.into_values()
    }
}
