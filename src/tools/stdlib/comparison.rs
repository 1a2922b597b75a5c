//! Chained integer comparisons

use crate::error::Result;
use crate::runtime::{EnvRef, Value};
use crate::tools::{Tool, ToolRegistry};

/// Register comparison tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(ChainComparison::new("<", "Strictly increasing", |a, b| a < b));
    registry.register(ChainComparison::new("<=", "Non-decreasing", |a, b| a <= b));
    registry.register(ChainComparison::new(">", "Strictly decreasing", |a, b| a > b));
    registry.register(ChainComparison::new(">=", "Non-increasing", |a, b| a >= b));
    registry.register(ChainComparison::new("=", "All equal", |a, b| a == b));
}

/// Comparison that holds only if it holds for every adjacent pair
///
/// Usage: `(< a b c...)`
/// Example: `(< 1 2 3)` returns `#t`, `(< 1 3 2)` returns `#f`, `(<)` returns `#t`
pub struct ChainComparison {
    name: &'static str,
    description: &'static str,
    holds: fn(i64, i64) -> bool,
}

impl ChainComparison {
    /// Creates a comparison from a pairwise predicate
    pub fn new(name: &'static str, description: &'static str, holds: fn(i64, i64) -> bool) -> Self {
        ChainComparison {
            name,
            description,
            holds,
        }
    }
}

impl Tool for ChainComparison {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        let nums = args
            .iter()
            .map(Value::as_int)
            .collect::<Result<Vec<i64>>>()?;
        let holds = nums.windows(2).all(|pair| (self.holds)(pair[0], pair[1]));
        Ok(Value::boolean(holds))
    }
}
