//! Special forms
//!
//! Every tool here receives its arguments unevaluated and evaluates only what
//! it needs.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::runtime::{eval, Closure, EnvRef, Value, FALSE, QUOTE_PREFIX, TRUE};
use crate::tools::{check_arity_syntax, Tool, ToolKind, ToolRegistry};

/// Register special forms
pub fn register(registry: &mut ToolRegistry) {
    registry.register(QuoteTool);
    registry.register(IfTool);
    registry.register(DefineTool);
    registry.register(LambdaTool);
    registry.register(SetTool);
}

/// Returns the name of a plain, bindable symbol
fn binding_name<'a>(form: &str, value: &'a Value) -> Result<&'a str> {
    match value.as_symbol() {
        Some(name) if !name.starts_with(QUOTE_PREFIX) => Ok(name),
        _ => Err(Error::syntax(format!(
            "{} expects a symbol, got {}",
            form, value
        ))),
    }
}

/// Parses a parameter list: the empty list or a proper list of symbols
fn parameter_names(form: &str, value: &Value) -> Result<Vec<String>> {
    let params = value
        .to_vec()
        .ok_or_else(|| Error::syntax(format!("{} expects a parameter list, got {}", form, value)))?;
    params
        .iter()
        .map(|param| binding_name(form, param).map(str::to_string))
        .collect()
}

fn make_closure(params: Vec<String>, body: &[Value], env: &EnvRef) -> Rc<Closure> {
    Rc::new(Closure::new(params, body.to_vec(), env))
}

/// Returns its argument unevaluated
///
/// Usage: `(quote x)`
/// Example: `(quote (1 2 3))` returns `(1 2 3)`
pub struct QuoteTool;

impl Tool for QuoteTool {
    fn name(&self) -> &str {
        "quote"
    }

    fn description(&self) -> &str {
        "Return the argument unevaluated"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::SpecialForm
    }

    fn execute(&self, args: &[Value], _env: &EnvRef) -> Result<Value> {
        check_arity_syntax("quote", args, 1)?;
        match &args[0] {
            Value::Nil | Value::Symbol(_) | Value::Pair(_) | Value::List(_) => Ok(args[0].clone()),
            other => Err(Error::syntax(format!(
                "cannot quote {}",
                other.type_name()
            ))),
        }
    }
}

/// Two- or three-way conditional on a boolean
///
/// Usage: `(if condition then [else])`
/// Example: `(if (< 1 2) 10 20)` returns `10`
pub struct IfTool;

impl Tool for IfTool {
    fn name(&self) -> &str {
        "if"
    }

    fn description(&self) -> &str {
        "Conditional evaluation"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::SpecialForm
    }

    fn execute(&self, args: &[Value], env: &EnvRef) -> Result<Value> {
        if args.len() != 2 && args.len() != 3 {
            return Err(Error::syntax(format!(
                "if expects 2 or 3 arguments, got {}",
                args.len()
            )));
        }

        let condition = eval(&args[0], env)?;
        match condition.as_symbol() {
            Some(TRUE) => eval(&args[1], env),
            Some(FALSE) => match args.get(2) {
                Some(alternative) => eval(alternative, env),
                None => Ok(Value::Nil),
            },
            _ => Err(Error::syntax(format!(
                "if condition must be #t or #f, got {}",
                condition
            ))),
        }
    }
}

/// Binds a name in the current environment
///
/// Usage: `(define name expr)` or `(define (name params...) body...)`
/// Example: `(define (square x) (* x x))`
pub struct DefineTool;

impl Tool for DefineTool {
    fn name(&self) -> &str {
        "define"
    }

    fn description(&self) -> &str {
        "Bind a name to a value or procedure"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::SpecialForm
    }

    fn execute(&self, args: &[Value], env: &EnvRef) -> Result<Value> {
        if args.len() < 2 {
            return Err(Error::syntax(format!(
                "define expects at least 2 arguments, got {}",
                args.len()
            )));
        }

        let (name, value) = match &args[0] {
            Value::Pair(_) => {
                let mut signature = parameter_names("define", &args[0])?.into_iter();
                let Some(name) = signature.next() else {
                    return Err(Error::syntax("define expects a procedure name"));
                };
                let closure = make_closure(signature.collect(), &args[1..], env);
                closure.insert_self(&name);
                (name, Value::Closure(closure))
            }
            target => {
                check_arity_syntax("define", args, 2)?;
                let name = binding_name("define", target)?.to_string();
                let value = eval(&args[1], env)?;
                if let Value::Closure(closure) = &value {
                    closure.insert_self(&name);
                }
                (name, value)
            }
        };

        tracing::debug!(name = %name, "define");
        env.borrow_mut().define(name, value);
        Ok(Value::Nil)
    }
}

/// Creates a closure over a copy of the current environment
///
/// Usage: `(lambda (params...) body...)`
/// Example: `((lambda (x) (* x 2)) 21)` returns `42`
pub struct LambdaTool;

impl Tool for LambdaTool {
    fn name(&self) -> &str {
        "lambda"
    }

    fn description(&self) -> &str {
        "Create a procedure"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::SpecialForm
    }

    fn execute(&self, args: &[Value], env: &EnvRef) -> Result<Value> {
        if args.len() < 2 {
            return Err(Error::syntax(format!(
                "lambda expects a parameter list and a body, got {} arguments",
                args.len()
            )));
        }
        let params = parameter_names("lambda", &args[0])?;
        Ok(Value::Closure(make_closure(params, &args[1..], env)))
    }
}

/// Rebinds an existing name
///
/// Usage: `(set! name expr)`
pub struct SetTool;

impl Tool for SetTool {
    fn name(&self) -> &str {
        "set!"
    }

    fn description(&self) -> &str {
        "Assign to an existing binding"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::SpecialForm
    }

    fn execute(&self, args: &[Value], env: &EnvRef) -> Result<Value> {
        check_arity_syntax("set!", args, 2)?;
        let name = binding_name("set!", &args[0])?;
        let value = eval(&args[1], env)?;

        tracing::debug!(name = %name, "set!");
        env.borrow_mut().set(name, value)?;
        Ok(Value::Nil)
    }
}
