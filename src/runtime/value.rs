use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::runtime::environment::{EnvRef, Environment};
use crate::tools::{Tool, ToolKind};

/// The true boolean
pub const TRUE: &str = "#t";
/// The false boolean, and the only false value
pub const FALSE: &str = "#f";
/// Marks a symbol already folded out of a `(quote sym)` argument
pub const QUOTE_PREFIX: char = '\'';

/// Runtime value representation
///
/// Values double as program text: the reader produces them and the
/// evaluator walks them.
#[derive(Clone)]
pub enum Value {
    /// The empty list
    Nil,
    /// 64-bit integer value
    Int(i64),
    /// Identifier, including the booleans `#t` and `#f`
    Symbol(Rc<str>),
    /// Mutable cons cell, shared by reference
    Pair(Rc<Pair>),
    /// Quoted list literal folded out of an argument position
    List(List),
    /// Builtin procedure or special form
    Builtin(Rc<dyn Tool>),
    /// User-defined procedure
    Closure(Rc<Closure>),
}

impl Value {
    /// Creates a symbol
    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Rc::from(name))
    }

    /// Creates a pre-quoted symbol that evaluates to `name`
    pub fn quoted_symbol(name: &str) -> Self {
        Value::Symbol(Rc::from(format!("{}{}", QUOTE_PREFIX, name)))
    }

    /// Creates `#t` or `#f`
    pub fn boolean(b: bool) -> Self {
        Value::symbol(if b { TRUE } else { FALSE })
    }

    /// Creates a fresh pair cell
    pub fn cons(first: Value, rest: Value) -> Self {
        Value::Pair(Rc::new(Pair::new(first, rest)))
    }

    /// Builds a proper list from the given elements
    pub fn list(elements: Vec<Value>) -> Self {
        Value::list_with_tail(elements, Value::Nil)
    }

    /// Builds a chain of pairs ending in `tail`
    pub fn list_with_tail(elements: Vec<Value>, tail: Value) -> Self {
        elements
            .into_iter()
            .rev()
            .fold(tail, |rest, first| Value::cons(first, rest))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> String {
        match self {
            Value::Nil => "empty list".to_string(),
            Value::Int(_) => "integer".to_string(),
            Value::Symbol(_) => "symbol".to_string(),
            Value::Pair(_) => "pair".to_string(),
            Value::List(_) => "list".to_string(),
            Value::Builtin(tool) => match tool.kind() {
                ToolKind::Procedure => "procedure".to_string(),
                ToolKind::SpecialForm => "special form".to_string(),
            },
            Value::Closure(_) => "closure".to_string(),
        }
    }

    /// Boolean test: only `#f` is false, everything else is true
    pub fn is_false(&self) -> bool {
        matches!(self, Value::Symbol(name) if &**name == FALSE)
    }

    /// Returns true for `#t` and `#f`
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Symbol(name) if &**name == TRUE || &**name == FALSE)
    }

    /// Returns true for the empty list, bare or wrapped
    pub fn is_nil(&self) -> bool {
        match self {
            Value::Nil => true,
            Value::List(list) => list.is_empty(),
            _ => false,
        }
    }

    /// Returns the first cell of a chain, looking through a list wrapper
    pub fn as_pair(&self) -> Option<&Rc<Pair>> {
        match self {
            Value::Pair(cell) => Some(cell),
            Value::List(list) => list.head().as_pair(),
            _ => None,
        }
    }

    /// Returns the symbol name
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Converts value to a 64-bit integer
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            _ => Err(Error::runtime(format!(
                "expected integer, got {}",
                self.type_name()
            ))),
        }
    }

    /// Collects the elements of a proper list
    ///
    /// Returns `None` for anything that is not an empty-terminated chain.
    pub fn to_vec(&self) -> Option<Vec<Value>> {
        let list = List::view(self)?;
        if !list.is_proper() {
            return None;
        }
        let mut elements = Vec::new();
        let mut cursor = list.head().as_pair().cloned();
        while let Some(cell) = cursor {
            elements.push(cell.first());
            cursor = cell.rest().as_pair().cloned();
        }
        Some(elements)
    }
}

/// Mutable two-slot cell
///
/// Cells are shared through `Rc`, so a mutation through one alias is seen
/// through every other. Mutation can close a chain into a cycle; such cycles
/// are never reclaimed by reference counting.
pub struct Pair {
    first: RefCell<Value>,
    rest: RefCell<Value>,
}

impl Pair {
    /// Creates a cell
    pub fn new(first: Value, rest: Value) -> Self {
        Pair {
            first: RefCell::new(first),
            rest: RefCell::new(rest),
        }
    }

    /// Returns the `first` slot
    pub fn first(&self) -> Value {
        self.first.borrow().clone()
    }

    /// Returns the `rest` slot
    pub fn rest(&self) -> Value {
        self.rest.borrow().clone()
    }

    /// Overwrites the `first` slot
    pub fn set_first(&self, value: Value) {
        *self.first.borrow_mut() = value;
    }

    /// Overwrites the `rest` slot
    pub fn set_rest(&self, value: Value) {
        *self.rest.borrow_mut() = value;
    }
}

// Unlinks the spine one cell at a time so long chains drop without deep
// recursion
impl Drop for Pair {
    fn drop(&mut self) {
        let mut next = std::mem::replace(self.rest.get_mut(), Value::Nil);
        loop {
            let cell = match next {
                Value::Pair(cell) => cell,
                Value::List(list) => {
                    next = *list.head;
                    continue;
                }
                _ => break,
            };
            match Rc::try_unwrap(cell) {
                Ok(mut pair) => next = std::mem::replace(pair.rest.get_mut(), Value::Nil),
                Err(_) => break,
            }
        }
    }
}

/// List view over a pair chain or the empty list
///
/// The view never copies: it holds the head of the chain and reads or writes
/// through it.
#[derive(Clone)]
pub struct List {
    head: Box<Value>,
}

impl List {
    /// Wraps a chain head; anything other than a pair or the empty list is
    /// rejected
    pub fn new(head: Value) -> Result<Self> {
        List::view(&head).ok_or_else(|| {
            Error::runtime(format!("expected list or pair, got {}", head.type_name()))
        })
    }

    /// Views a bare pair, the empty list, or an existing wrapper
    pub fn view(value: &Value) -> Option<List> {
        match value {
            Value::Nil | Value::Pair(_) => Some(List {
                head: Box::new(value.clone()),
            }),
            Value::List(list) => Some(list.clone()),
            _ => None,
        }
    }

    /// Returns the underlying chain
    pub fn head(&self) -> &Value {
        &self.head
    }

    /// Returns true for the empty list
    pub fn is_empty(&self) -> bool {
        matches!(*self.head, Value::Nil)
    }

    /// Returns true if the chain ends in the empty list
    ///
    /// Cyclic chains are not proper lists.
    pub fn is_proper(&self) -> bool {
        let mut slow = self.head().clone();
        let mut fast = self.head().clone();
        loop {
            for _ in 0..2 {
                fast = match fast.as_pair() {
                    Some(cell) => cell.rest(),
                    None => return fast.is_nil(),
                };
            }
            slow = match slow.as_pair() {
                Some(cell) => cell.rest(),
                None => return slow.is_nil(),
            };
            if let (Some(a), Some(b)) = (slow.as_pair(), fast.as_pair()) {
                if Rc::ptr_eq(a, b) {
                    return false;
                }
            }
        }
    }

    /// Returns true for a dotted pair or a proper list of exactly two elements
    pub fn is_pair(&self) -> bool {
        let Some(cell) = self.head.as_pair() else {
            return false;
        };
        match cell.rest().as_pair() {
            Some(second) => second.rest().is_nil(),
            None => !cell.rest().is_nil(),
        }
    }

    /// Returns the first element
    pub fn car(&self) -> Result<Value> {
        Ok(self.cell("car")?.first())
    }

    /// Returns everything after the first element
    pub fn cdr(&self) -> Result<Value> {
        Ok(self.cell("cdr")?.rest())
    }

    /// Replaces the first element in place
    pub fn set_car(&self, value: Value) -> Result<()> {
        self.cell("set-car!")?.set_first(value);
        Ok(())
    }

    /// Replaces the tail in place
    pub fn set_cdr(&self, value: Value) -> Result<()> {
        self.cell("set-cdr!")?.set_rest(value);
        Ok(())
    }

    fn cell(&self, operation: &str) -> Result<&Rc<Pair>> {
        self.head
            .as_pair()
            .ok_or_else(|| Error::runtime(format!("{} of empty list", operation)))
    }
}

/// User-defined procedure
///
/// The captured environment is a snapshot of the defining environment taken
/// at creation time. Every call of the closure binds its parameters into that
/// same snapshot.
pub struct Closure {
    params: Vec<String>,
    body: Vec<Value>,
    env: EnvRef,
}

impl Closure {
    /// Creates a closure over a copy of `defining_env`
    pub fn new(params: Vec<String>, body: Vec<Value>, defining_env: &EnvRef) -> Self {
        let snapshot = defining_env.borrow().snapshot();
        Closure {
            params,
            body,
            env: Rc::new(RefCell::new(snapshot)),
        }
    }

    /// Parameter names in order
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Body expressions in order
    pub fn body(&self) -> &[Value] {
        &self.body
    }

    /// The captured environment
    pub fn env(&self) -> &EnvRef {
        &self.env
    }

    /// Binds the closure under `name` inside its own captured environment so
    /// the body can call itself
    pub fn insert_self(self: &Rc<Self>, name: &str) {
        self.env
            .borrow_mut()
            .define(name, Value::Closure(Rc::clone(self)));
    }

    /// Empties the captured environment, returning what it held
    pub fn take_bindings(&self) -> Environment {
        std::mem::take(&mut *self.env.borrow_mut())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&crate::runtime::printer::print(self))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Int(n) => write!(f, "Int({})", n),
            Value::Symbol(name) => write!(f, "Symbol({})", name),
            Value::Pair(_) => write!(f, "Pair({})", self),
            Value::List(_) => write!(f, "List({})", self),
            Value::Builtin(tool) => write!(f, "Builtin({})", tool.name()),
            Value::Closure(closure) => write!(f, "Closure({} params)", closure.params.len()),
        }
    }
}

// Structural equality; a list wrapper compares equal to the chain it views
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::List(a), b) => a.head() == b,
            (a, Value::List(b)) => a == b.head(),
            (Value::Nil, Value::Nil) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Pair(a), Value::Pair(b)) => chains_equal(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name() == b.name(),
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn chains_equal(a: &Rc<Pair>, b: &Rc<Pair>) -> bool {
    let mut a = Rc::clone(a);
    let mut b = Rc::clone(b);
    loop {
        if Rc::ptr_eq(&a, &b) {
            return true;
        }
        if a.first() != b.first() {
            return false;
        }
        let (rest_a, rest_b) = (a.rest(), b.rest());
        match (rest_a.as_pair(), rest_b.as_pair()) {
            (Some(next_a), Some(next_b)) => {
                let (next_a, next_b) = (Rc::clone(next_a), Rc::clone(next_b));
                a = next_a;
                b = next_b;
            }
            _ => return rest_a == rest_b,
        }
    }
}

/// Breaks every closure cycle reachable from `roots`
///
/// Closures that bind themselves (directly or through other closures) keep
/// their captured environment alive forever; emptying those environments lets
/// reference counting reclaim them.
pub(crate) fn release_closures(roots: Vec<Value>) {
    let mut pending = roots;
    let mut seen_pairs: HashSet<*const Pair> = HashSet::new();
    let mut seen_closures: HashSet<*const Closure> = HashSet::new();

    while let Some(value) = pending.pop() {
        match value {
            Value::Pair(cell) => {
                if seen_pairs.insert(Rc::as_ptr(&cell)) {
                    pending.push(cell.first());
                    pending.push(cell.rest());
                }
            }
            Value::List(list) => pending.push(list.head().clone()),
            Value::Closure(closure) => {
                if seen_closures.insert(Rc::as_ptr(&closure)) {
                    pending.extend(closure.take_bindings().into_values());
                    pending.extend(closure.body.iter().cloned());
                }
            }
            _ => {}
        }
    }
}
