//! Type predicates

use crate::error::Result;
use crate::runtime::{EnvRef, List, Value};
use crate::tools::{check_arity_syntax, Tool, ToolRegistry};

/// Register type predicate tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(TypePredicate::new("null?", "Empty list", Value::is_nil));
    registry.register(TypePredicate::new("pair?", "Dotted pair or two-element list", |v| {
        List::view(v).is_some_and(|list| list.is_pair())
    }));
    registry.register(TypePredicate::new("list?", "Proper list", |v| {
        List::view(v).is_some_and(|list| list.is_proper())
    }));
    registry.register(TypePredicate::new("boolean?", "#t or #f", Value::is_boolean));
    registry.register(TypePredicate::new("symbol?", "Symbol", |v| {
        matches!(v, Value::Symbol(_))
    }));
    registry.register(TypePredicate::new("number?", "Integer", |v| {
        matches!(v, Value::Int(_))
    }));
}

/// One-argument predicate over a value
///
/// Usage: `(null? x)`, `(pair? x)`, ...
pub struct TypePredicate {
    name: &'static str,
    description: &'static str,
    test: fn(&Value) -> bool,
}

impl TypePredicate {
    /// Creates a predicate tool
    pub fn new(name: &'static str, description: &'static str, test: fn(&Value) -> bool) -> Self {
        TypePredicate {
            name,
            description,
            test,
        }
    }
}

impl Tool for TypePredicate {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        check_arity_syntax(self.name, args, 1)?;
        Ok(Value::boolean((self.test)(&args[0])))
    }
}
