/// End-to-end integration tests
/// Demonstrates: Lexer → Reader → Evaluator → Printer working together
use schemelet::lexer::SExprScanner;
use schemelet::parser::SExprParser;
use schemelet::runtime::{eval, LispEvaluator, Value};
use schemelet::{Error, ErrorKind};

fn eval_str(source: &str) -> Result<String, Error> {
    LispEvaluator::new().interpret(source)
}

fn eval_all(sources: &[&str]) -> Result<String, Error> {
    let mut evaluator = LispEvaluator::new();
    let mut last = String::new();
    for source in sources {
        last = evaluator.interpret(source)?;
    }
    Ok(last)
}

fn error_kind(source: &str) -> ErrorKind {
    eval_str(source).unwrap_err().kind()
}

#[test]
fn test_lisp_e2e_pipeline() {
    let source = "(+ 1 2 3)";

    // Lex and read
    let mut parser = SExprParser::new(SExprScanner::new(source));
    let expr = parser.read().unwrap();
    assert!(parser.is_at_end().unwrap());

    // Evaluate
    let evaluator = LispEvaluator::new();
    let result = eval(&expr, evaluator.env()).unwrap();

    assert_eq!(result, Value::Int(6));
    assert_eq!(result.to_string(), "6");
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval_str("(+ 1 2 3)").unwrap(), "6");
    assert_eq!(eval_str("(+)").unwrap(), "0");
    assert_eq!(eval_str("(- 10 4)").unwrap(), "6");
    assert_eq!(eval_str("(- 10 4 3)").unwrap(), "3");
    assert_eq!(eval_str("(* 2 3 4)").unwrap(), "24");
    assert_eq!(eval_str("(/ 20 3)").unwrap(), "6");
    assert_eq!(eval_str("(+ (* 2 3) (- 10 5))").unwrap(), "11");
    assert_eq!(eval_str("(max 1 5 3)").unwrap(), "5");
    assert_eq!(eval_str("(min 4 -2 9)").unwrap(), "-2");
    assert_eq!(eval_str("(abs -3)").unwrap(), "3");
}

#[test]
fn test_arithmetic_errors() {
    assert_eq!(error_kind("(- 5)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(/ 5)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(+ 1 #t)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(/ 1 0)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(abs)"), ErrorKind::Runtime);
}

#[test]
fn test_chained_comparison() {
    assert_eq!(eval_str("(< 1 2 3)").unwrap(), "#t");
    assert_eq!(eval_str("(< 1 3 2)").unwrap(), "#f");
    assert_eq!(eval_str("(>= 3 3 1)").unwrap(), "#t");
    assert_eq!(eval_str("(= 2 2)").unwrap(), "#t");
    assert_eq!(eval_str("(<)").unwrap(), "#t");
    assert_eq!(eval_str("(< 1)").unwrap(), "#t");
    assert_eq!(error_kind("(< 1 'a)"), ErrorKind::Runtime);
}

#[test]
fn test_boolean_logic() {
    assert_eq!(eval_str("(and)").unwrap(), "#t");
    assert_eq!(eval_str("(or)").unwrap(), "#f");
    assert_eq!(eval_str("(and 1 #f 2)").unwrap(), "#f");
    assert_eq!(eval_str("(and 1 2)").unwrap(), "2");
    assert_eq!(eval_str("(or #f 2)").unwrap(), "2");
    assert_eq!(eval_str("(or #f #f)").unwrap(), "#f");
    assert_eq!(eval_str("(not #f)").unwrap(), "#t");
    assert_eq!(eval_str("(not 0)").unwrap(), "#f");
    assert_eq!(eval_str("(not '())").unwrap(), "#f");
    assert_eq!(error_kind("(not 1 2)"), ErrorKind::Runtime);
}

#[test]
fn test_short_circuit_skips_unbound() {
    assert_eq!(eval_str("(and #f undefined)").unwrap(), "#f");
    assert_eq!(eval_str("(or 1 undefined)").unwrap(), "1");
}

#[test]
fn test_if() {
    assert_eq!(eval_str("(if (> 2 1) 'yes 'no)").unwrap(), "yes");
    assert_eq!(eval_str("(if (< 2 1) 'yes 'no)").unwrap(), "no");
    assert_eq!(eval_str("(if #f 1)").unwrap(), "()");
    assert_eq!(error_kind("(if 1 2 3)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(if '() 2 3)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(if #t)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(if #t 1 2 3)"), ErrorKind::Syntax);
}

#[test]
fn test_define_and_set() {
    assert_eq!(
        eval_all(&["(define x 10)", "(define y 20)", "(+ x y)"]).unwrap(),
        "30"
    );
    assert_eq!(eval_str("(define x 5)").unwrap(), "()");
    assert_eq!(
        eval_all(&[
            "(define counter 0)",
            "(set! counter (+ counter 1))",
            "(set! counter (+ counter 1))",
            "counter",
        ])
        .unwrap(),
        "2"
    );
    assert_eq!(
        eval_str("(set! undefined 1)").unwrap_err(),
        Error::name("undefined")
    );
    assert_eq!(error_kind("(define)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(define x)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(define 'x 1)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(set! x)"), ErrorKind::Syntax);
}

#[test]
fn test_builtins_are_values() {
    assert_eq!(eval_str("+").unwrap(), "#<builtin +>");
    assert_eq!(eval_all(&["(define plus +)", "(plus 2 3)"]).unwrap(), "5");
    assert_eq!(eval_str("(lambda (x) x)").unwrap(), "#<closure>");
}

#[test]
fn test_driver_contract() {
    assert_eq!(error_kind(""), ErrorKind::Runtime);
    assert_eq!(error_kind("()"), ErrorKind::Runtime);
    assert_eq!(error_kind("1 2"), ErrorKind::Syntax);
    assert_eq!(error_kind(")"), ErrorKind::Syntax);
    assert_eq!(error_kind("."), ErrorKind::Syntax);
    assert_eq!(error_kind("(+ 1 2"), ErrorKind::Syntax);
    assert_eq!(error_kind("(#q)"), ErrorKind::Syntax);
}

#[test]
fn test_name_errors() {
    assert_eq!(eval_str("(foo)").unwrap_err(), Error::name("foo"));
    assert_eq!(
        eval_str("(foo)").unwrap_err().to_string(),
        "Name error: undefined variable 'foo'"
    );
    assert_eq!(error_kind("(+ 1 y)"), ErrorKind::Name);
}

#[test]
fn test_applying_non_callable() {
    assert_eq!(error_kind("(1 2 3)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(1 . 2)"), ErrorKind::Runtime);
    assert_eq!(error_kind("('a 1)"), ErrorKind::Runtime);
}

#[test]
fn test_source_layout() {
    assert_eq!(eval_str("  (+ 1 , 2)  ").unwrap(), "3");
    assert_eq!(eval_str("(+ 1\n   2)").unwrap(), "3");
    assert_eq!(eval_str("(+ +5 -2)").unwrap(), "3");
}

#[test]
fn test_reset_restores_builtins() {
    let mut evaluator = LispEvaluator::new();
    evaluator.interpret("(define + 1)").unwrap();
    assert_eq!(evaluator.interpret("+").unwrap(), "1");

    evaluator.reset();
    assert_eq!(evaluator.interpret("(+ 1 1)").unwrap(), "2");
}
