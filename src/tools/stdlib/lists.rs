//! Pair and list tools
//!
//! Every accessor goes through the [`List`] view, so bare pairs and list
//! literals are handled alike. Mutators change the shared cell in place.

use crate::error::{Error, Result};
use crate::runtime::{EnvRef, List, Value};
use crate::tools::{check_arity_runtime, check_arity_syntax, Tool, ToolRegistry};

/// Register list tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(ConsTool);
    registry.register(ListTool);
    registry.register(CarTool);
    registry.register(CdrTool);
    registry.register(SetCarTool);
    registry.register(SetCdrTool);
    registry.register(ListRefTool);
    registry.register(ListTailTool);
}

fn list_arg(tool: &str, value: &Value) -> Result<List> {
    List::view(value).ok_or_else(|| {
        Error::runtime(format!(
            "{} expects a list or pair, got {}",
            tool,
            value.type_name()
        ))
    })
}

/// Follows `index` links from `list`
fn nth_tail(tool: &str, list: &Value, index: &Value) -> Result<Value> {
    let n = index.as_int()?;
    if n < 0 {
        return Err(Error::runtime(format!("{} index {} is negative", tool, n)));
    }

    let mut cursor = list_arg(tool, list)?.head().clone();
    for _ in 0..n {
        cursor = match cursor.as_pair() {
            Some(cell) => cell.rest(),
            None => {
                return Err(Error::runtime(format!(
                    "{} index {} out of range",
                    tool, n
                )))
            }
        };
    }
    Ok(cursor)
}

/// Creates a new pair
///
/// Usage: `(cons first rest)`
/// Example: `(cons 1 '(2))` returns `(1 2)`, `(cons 1 2)` returns `(1 . 2)`
pub struct ConsTool;

impl Tool for ConsTool {
    fn name(&self) -> &str {
        "cons"
    }

    fn description(&self) -> &str {
        "Construct a new pair"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        check_arity_syntax("cons", args, 2)?;
        Ok(Value::cons(args[0].clone(), args[1].clone()))
    }
}

/// Builds a proper list from its arguments
///
/// Usage: `(list x...)`
/// Example: `(list 1 2 3)` returns `(1 2 3)`, `(list)` returns `()`
pub struct ListTool;

impl Tool for ListTool {
    fn name(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "Build a proper list"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        Ok(Value::list(args.to_vec()))
    }
}

/// First element of a list or pair
///
/// Usage: `(car list)`
pub struct CarTool;

impl Tool for CarTool {
    fn name(&self) -> &str {
        "car"
    }

    fn description(&self) -> &str {
        "First element of a pair"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        check_arity_syntax("car", args, 1)?;
        list_arg("car", &args[0])?.car()
    }
}

/// Everything after the first element
///
/// Usage: `(cdr list)`
pub struct CdrTool;

impl Tool for CdrTool {
    fn name(&self) -> &str {
        "cdr"
    }

    fn description(&self) -> &str {
        "Rest of a pair"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        check_arity_syntax("cdr", args, 1)?;
        list_arg("cdr", &args[0])?.cdr()
    }
}

/// Replaces the first slot of a pair in place
///
/// Usage: `(set-car! pair value)`
pub struct SetCarTool;

impl Tool for SetCarTool {
    fn name(&self) -> &str {
        "set-car!"
    }

    fn description(&self) -> &str {
        "Overwrite the first slot of a pair"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        check_arity_syntax("set-car!", args, 2)?;
        list_arg("set-car!", &args[0])?.set_car(args[1].clone())?;
        Ok(Value::Nil)
    }
}

/// Replaces the rest slot of a pair in place
///
/// Usage: `(set-cdr! pair value)`
pub struct SetCdrTool;

impl Tool for SetCdrTool {
    fn name(&self) -> &str {
        "set-cdr!"
    }

    fn description(&self) -> &str {
        "Overwrite the rest slot of a pair"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        check_arity_syntax("set-cdr!", args, 2)?;
        list_arg("set-cdr!", &args[0])?.set_cdr(args[1].clone())?;
        Ok(Value::Nil)
    }
}

/// Element at a zero-based index
///
/// Usage: `(list-ref list index)`
/// Example: `(list-ref (list 1 2 3) 1)` returns `2`
pub struct ListRefTool;

impl Tool for ListRefTool {
    fn name(&self) -> &str {
        "list-ref"
    }

    fn description(&self) -> &str {
        "Element at an index"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        check_arity_runtime("list-ref", args, 2)?;
        let tail = nth_tail("list-ref", &args[0], &args[1])?;
        match tail.as_pair() {
            Some(cell) => Ok(cell.first()),
            None => Err(Error::runtime(format!(
                "list-ref index {} out of range",
                args[1]
            ))),
        }
    }
}

/// The chain remaining after dropping `index` elements
///
/// Usage: `(list-tail list index)`
/// Example: `(list-tail (list 1 2 3) 1)` returns `(2 3)`
pub struct ListTailTool;

impl Tool for ListTailTool {
    fn name(&self) -> &str {
        "list-tail"
    }

    fn description(&self) -> &str {
        "Sublist after an index"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        check_arity_runtime("list-tail", args, 2)?;
        nth_tail("list-tail", &args[0], &args[1])
    }
}
