//! Boolean connectives
//!
//! `and` and `or` short-circuit, so they take their arguments raw. Only `#f`
//! counts as false.

use crate::error::Result;
use crate::runtime::{eval, EnvRef, Value};
use crate::tools::{check_arity_runtime, Tool, ToolKind, ToolRegistry};

/// Register logic tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(AndTool);
    registry.register(OrTool);
    registry.register(NotTool);
}

/// Returns the first false value, otherwise the last value
///
/// Usage: `(and expr...)`
/// Example: `(and 1 2)` returns `2`, `(and)` returns `#t`
pub struct AndTool;

impl Tool for AndTool {
    fn name(&self) -> &str {
        "and"
    }

    fn description(&self) -> &str {
        "Short-circuit conjunction"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::SpecialForm
    }

    fn execute(&self, args: &[Value], env: &EnvRef) -> Result<Value> {
        let mut result = Value::boolean(true);
        for arg in args {
            result = eval(arg, env)?;
            if result.is_false() {
                break;
            }
        }
        Ok(result)
    }
}

/// Returns the first value that is not `#f`, otherwise the last value
///
/// Usage: `(or expr...)`
/// Example: `(or #f 3)` returns `3`, `(or)` returns `#f`
pub struct OrTool;

impl Tool for OrTool {
    fn name(&self) -> &str {
        "or"
    }

    fn description(&self) -> &str {
        "Short-circuit disjunction"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::SpecialForm
    }

    fn execute(&self, args: &[Value], env: &EnvRef) -> Result<Value> {
        let mut result = Value::boolean(false);
        for arg in args {
            result = eval(arg, env)?;
            if !result.is_false() {
                break;
            }
        }
        Ok(result)
    }
}

/// Logical negation
///
/// Usage: `(not x)`
/// Example: `(not #f)` returns `#t`, `(not '())` returns `#f`
pub struct NotTool;

impl Tool for NotTool {
    fn name(&self) -> &str {
        "not"
    }

    fn description(&self) -> &str {
        "#t if the argument is #f"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        check_arity_runtime("not", args, 1)?;
        Ok(Value::boolean(args[0].is_false()))
    }
}
