//! Canonical S-expression output

use crate::runtime::value::{Value, QUOTE_PREFIX};

/// Renders a value as canonical S-expression text
///
/// Integers print in decimal, symbols verbatim, the empty list as `()`, and
/// pair chains as `(a b c)` or `(a b . c)` for an improper tail. A pre-quoted
/// symbol prints as the `(quote x)` form it was folded from.
pub fn print(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Nil => out.push_str("()"),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Symbol(name) => match name.strip_prefix(QUOTE_PREFIX) {
            Some(literal) => {
                out.push_str("(quote ");
                out.push_str(literal);
                out.push(')');
            }
            None => out.push_str(name),
        },
        Value::Pair(_) => write_chain(value, out),
        Value::List(list) => write_value(list.head(), out),
        Value::Builtin(tool) => {
            out.push_str("#<builtin ");
            out.push_str(tool.name());
            out.push('>');
        }
        Value::Closure(_) => out.push_str("#<closure>"),
    }
}

fn write_chain(head: &Value, out: &mut String) {
    out.push('(');
    let mut cursor = head.clone();
    let mut first = true;
    loop {
        let Some(cell) = cursor.as_pair().cloned() else {
            if !cursor.is_nil() {
                out.push_str(" . ");
                write_value(&cursor, out);
            }
            break;
        };
        if !first {
            out.push(' ');
        }
        first = false;
        write_value(&cell.first(), out);
        cursor = cell.rest();
    }
    out.push(')');
}
