//! Integer arithmetic tools
//!
//! All arithmetic is on signed 64-bit integers and wraps on overflow.

use crate::error::{Error, Result};
use crate::runtime::{EnvRef, Value};
use crate::tools::{Tool, ToolRegistry};

/// Register arithmetic tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(AddTool);
    registry.register(SubtractTool);
    registry.register(MultiplyTool);
    registry.register(DivideTool);
    registry.register(MaxTool);
    registry.register(MinTool);
    registry.register(AbsTool);
}

fn integers(args: &[Value]) -> Result<Vec<i64>> {
    args.iter().map(Value::as_int).collect()
}

fn require_at_least(tool: &str, args: &[Value], min: usize) -> Result<()> {
    if args.len() < min {
        return Err(Error::runtime(format!(
            "{} expects at least {} argument{}, got {}",
            tool,
            min,
            if min == 1 { "" } else { "s" },
            args.len()
        )));
    }
    Ok(())
}

/// Sum of all arguments
///
/// Usage: `(+ n...)`
/// Example: `(+ 1 2 3)` returns `6`, `(+)` returns `0`
pub struct AddTool;

impl Tool for AddTool {
    fn name(&self) -> &str {
        "+"
    }

    fn description(&self) -> &str {
        "Sum of all arguments"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        let sum = integers(args)?
            .into_iter()
            .fold(0i64, |acc, n| acc.wrapping_add(n));
        Ok(Value::Int(sum))
    }
}

/// First argument minus each of the rest
///
/// Usage: `(- n m...)`
/// Example: `(- 10 3 2)` returns `5`
pub struct SubtractTool;

impl Tool for SubtractTool {
    fn name(&self) -> &str {
        "-"
    }

    fn description(&self) -> &str {
        "Subtract the remaining arguments from the first"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        require_at_least("-", args, 2)?;
        let nums = integers(args)?;
        let difference = nums[1..]
            .iter()
            .fold(nums[0], |acc, n| acc.wrapping_sub(*n));
        Ok(Value::Int(difference))
    }
}

/// Product of all arguments
///
/// Usage: `(* n...)`
/// Example: `(* 2 3 4)` returns `24`, `(*)` returns `1`
pub struct MultiplyTool;

impl Tool for MultiplyTool {
    fn name(&self) -> &str {
        "*"
    }

    fn description(&self) -> &str {
        "Product of all arguments"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        let product = integers(args)?
            .into_iter()
            .fold(1i64, |acc, n| acc.wrapping_mul(n));
        Ok(Value::Int(product))
    }
}

/// First argument divided by each of the rest, truncating toward zero
///
/// Usage: `(/ n m...)`
/// Example: `(/ 20 2 5)` returns `2`
pub struct DivideTool;

impl Tool for DivideTool {
    fn name(&self) -> &str {
        "/"
    }

    fn description(&self) -> &str {
        "Integer division of the first argument by the rest"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        require_at_least("/", args, 2)?;
        let nums = integers(args)?;
        let mut quotient = nums[0];
        for divisor in &nums[1..] {
            if *divisor == 0 {
                return Err(Error::runtime("division by zero"));
            }
            quotient = quotient.wrapping_div(*divisor);
        }
        Ok(Value::Int(quotient))
    }
}

/// Largest argument
///
/// Usage: `(max n m...)`
pub struct MaxTool;

impl Tool for MaxTool {
    fn name(&self) -> &str {
        "max"
    }

    fn description(&self) -> &str {
        "Largest of the arguments"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        require_at_least("max", args, 1)?;
        let nums = integers(args)?;
        Ok(Value::Int(nums.into_iter().max().unwrap_or_default()))
    }
}

/// Smallest argument
///
/// Usage: `(min n m...)`
pub struct MinTool;

impl Tool for MinTool {
    fn name(&self) -> &str {
        "min"
    }

    fn description(&self) -> &str {
        "Smallest of the arguments"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        require_at_least("min", args, 1)?;
        let nums = integers(args)?;
        Ok(Value::Int(nums.into_iter().min().unwrap_or_default()))
    }
}

/// Absolute value
///
/// Usage: `(abs n)`
/// Example: `(abs -5)` returns `5`
pub struct AbsTool;

impl Tool for AbsTool {
    fn name(&self) -> &str {
        "abs"
    }

    fn description(&self) -> &str {
        "Absolute value"
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        if args.len() != 1 {
            return Err(Error::runtime(format!(
                "abs expects 1 argument, got {}",
                args.len()
            )));
        }
        Ok(Value::Int(args[0].as_int()?.wrapping_abs()))
    }
}
