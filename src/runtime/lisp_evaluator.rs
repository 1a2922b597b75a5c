use std::rc::Rc;

use crate::error::{Error, Result};
use crate::parser::SExprParser;
use crate::runtime::environment::{EnvRef, Environment};
use crate::runtime::value::{Closure, List, Value, FALSE, QUOTE_PREFIX, TRUE};
use crate::tools::{ToolKind, ToolRegistry};

/// Evaluates an expression against an environment
///
/// Integers and callables evaluate to themselves, `#t`/`#f` and pre-quoted
/// symbols are literals, other symbols are looked up. A pair is a call: its
/// head must evaluate to something callable, and its tail is turned into an
/// argument vector by [`extract_args`].
pub fn eval(expr: &Value, env: &EnvRef) -> Result<Value> {
    match expr {
        Value::Nil => Err(Error::runtime("cannot evaluate the empty list")),
        Value::Int(_) | Value::Builtin(_) | Value::Closure(_) => Ok(expr.clone()),
        Value::List(list) => Ok(list.head().clone()),
        Value::Symbol(name) => {
            if &**name == TRUE || &**name == FALSE {
                return Ok(expr.clone());
            }
            if let Some(literal) = name.strip_prefix(QUOTE_PREFIX) {
                return Ok(Value::symbol(literal));
            }
            env.borrow().get(name)
        }
        Value::Pair(cell) => {
            let head = eval(&cell.first(), env)?;
            if !matches!(head, Value::Builtin(_) | Value::Closure(_)) {
                return Err(Error::runtime(format!(
                    "{} is not callable",
                    head.type_name()
                )));
            }
            let args = extract_args(&cell.rest())?;
            apply(&head, &args, env)
        }
    }
}

/// Converts the tail of a call into an argument vector
///
/// Any argument written as `(quote x)` is folded on the spot: a symbol payload
/// becomes a pre-quoted symbol, a pair or empty payload becomes a list
/// literal. Other payloads cannot be quoted in argument position.
pub fn extract_args(rest: &Value) -> Result<Vec<Value>> {
    let mut args = Vec::new();
    let mut cursor = rest.clone();
    while let Some(cell) = cursor.as_pair().cloned() {
        let arg = cell.first();
        args.push(match quoted_payload(&arg) {
            Some(payload) => fold_quote(payload)?,
            None => arg,
        });
        cursor = cell.rest();
    }
    if !cursor.is_nil() {
        return Err(Error::syntax("improper argument list"));
    }
    Ok(args)
}

/// Returns `x` if `expr` is exactly `(quote x)`
fn quoted_payload(expr: &Value) -> Option<Value> {
    let Value::Pair(cell) = expr else {
        return None;
    };
    if cell.first().as_symbol() != Some("quote") {
        return None;
    }
    let rest = cell.rest();
    let second = rest.as_pair()?;
    if !second.rest().is_nil() {
        return None;
    }
    Some(second.first())
}

fn fold_quote(payload: Value) -> Result<Value> {
    match payload {
        Value::Symbol(name) => Ok(Value::quoted_symbol(&name)),
        Value::Nil | Value::Pair(_) => Ok(Value::List(List::new(payload)?)),
        Value::List(_) => Ok(payload),
        other => Err(Error::syntax(format!(
            "cannot quote {} in argument position",
            other.type_name()
        ))),
    }
}

/// Applies a callable to an argument vector
///
/// Builtin procedures get their arguments evaluated in `env` first; special
/// forms get them raw. Closures are applied by [`apply_closure`].
pub fn apply(callable: &Value, args: &[Value], env: &EnvRef) -> Result<Value> {
    match callable {
        Value::Builtin(tool) => match tool.kind() {
            ToolKind::Procedure => {
                let values = eval_all(args, env)?;
                tool.execute(&values, env)
            }
            ToolKind::SpecialForm => tool.execute(args, env),
        },
        Value::Closure(closure) => apply_closure(closure, args, env),
        other => Err(Error::runtime(format!(
            "{} is not callable",
            other.type_name()
        ))),
    }
}

/// Calls a closure
///
/// Arguments are evaluated in the caller's environment and then bound into
/// the closure's captured environment, overwriting the previous call's
/// bindings. The body runs in that captured environment.
pub fn apply_closure(closure: &Rc<Closure>, args: &[Value], env: &EnvRef) -> Result<Value> {
    let params = closure.params();
    if args.len() != params.len() {
        return Err(Error::syntax(format!(
            "closure expects {} arguments, got {}",
            params.len(),
            args.len()
        )));
    }

    let values = eval_all(args, env)?;
    tracing::trace!(params = params.len(), "applying closure");

    {
        let mut scope = closure.env().borrow_mut();
        for (param, value) in params.iter().zip(values) {
            scope.define(param.clone(), value);
        }
    }

    let scope = Rc::clone(closure.env());
    let mut result = Value::Nil;
    for expr in closure.body() {
        result = eval(expr, &scope)?;
    }
    Ok(result)
}

fn eval_all(args: &[Value], env: &EnvRef) -> Result<Vec<Value>> {
    args.iter().map(|arg| eval(arg, env)).collect()
}

/// Read-eval driver over one long-lived root environment
///
/// Each call consumes exactly one top-level expression.
pub struct LispEvaluator {
    /// Root environment
    env: EnvRef,
    /// Builtins the root environment is populated from
    registry: Rc<ToolRegistry>,
}

impl LispEvaluator {
    /// Creates an evaluator with the standard builtin library
    pub fn new() -> Self {
        Self::with_registry(ToolRegistry::new())
    }

    /// Creates an evaluator with a custom tool registry
    pub fn with_registry(registry: ToolRegistry) -> Self {
        let env = Environment::with_registry(&registry).into_ref();
        LispEvaluator {
            env,
            registry: Rc::new(registry),
        }
    }

    /// Root environment
    pub fn env(&self) -> &EnvRef {
        &self.env
    }

    /// Builtins available to this evaluator
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Reads and evaluates one expression, returning its value
    pub fn evaluate(&mut self, source: &str) -> Result<Value> {
        let mut parser = SExprParser::from_source(source);
        let expr = parser.read()?;
        if expr.is_nil() {
            return Err(Error::runtime("no expression to evaluate"));
        }
        if !parser.is_at_end()? {
            return Err(Error::syntax("expected end of input after expression"));
        }

        tracing::debug!(expr = %expr, "evaluating");
        eval(&expr, &self.env)
    }

    /// Reads and evaluates one expression, returning its printed form
    pub fn interpret(&mut self, source: &str) -> Result<String> {
        self.evaluate(source).map(|value| value.to_string())
    }

    /// Drops every user binding and reinstalls the builtins
    ///
    /// Closures captured by the old bindings are emptied so that
    /// self-referencing closures can be reclaimed.
    pub fn reset(&mut self) {
        let mut env = self.env.borrow_mut();
        env.clear();
        *env = Environment::with_registry(&self.registry);
    }
}

impl Default for LispEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
