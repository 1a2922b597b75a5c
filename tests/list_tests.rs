//! Pairs, lists, quoting and printing
use schemelet::runtime::LispEvaluator;
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
fn test_quote_round_trip() {
    assert_eq!(
        eval_str("(quote (1 2 3))").unwrap(),
        eval_str("(list 1 2 3)").unwrap()
    );
    assert_eq!(eval_str("'(1 2 3)").unwrap(), "(1 2 3)");
    assert_eq!(eval_str("'a").unwrap(), "a");
    assert_eq!(eval_str("'()").unwrap(), "()");
    assert_eq!(eval_str("'(1 . 2)").unwrap(), "(1 . 2)");
    assert_eq!(eval_str("'(a (b c) . d)").unwrap(), "(a (b c) . d)");
}

#[test]
fn test_nested_quote_prints_quote_form() {
    assert_eq!(eval_str("''a").unwrap(), "(quote a)");
    assert_eq!(eval_str("(list ''a 1)").unwrap(), "((quote a) 1)");
    assert_eq!(eval_str("(car ''a)").unwrap(), "quote");
    assert_eq!(eval_str("(quote 'b)").unwrap(), "(quote b)");
}

#[test]
fn test_long_list_survives_evaluation() {
    let items: Vec<String> = (0..100_000).map(|n| n.to_string()).collect();
    let source = format!("(list {})", items.join(" "));

    let mut evaluator = LispEvaluator::new();
    let printed = evaluator.interpret(&source).unwrap();
    assert_eq!(printed, format!("({})", items.join(" ")));

    let value = evaluator
        .evaluate(&format!("(list-ref {} 99999)", source))
        .unwrap();
    assert_eq!(value.to_string(), "99999");
    drop(evaluator);
}

#[test]
fn test_quote_errors() {
    assert_eq!(error_kind("(quote 1)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(quote)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(quote a b)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(+ '5 1)"), ErrorKind::Syntax);
    assert_eq!(error_kind("'"), ErrorKind::Syntax);
}

#[test]
fn test_cons() {
    assert_eq!(eval_str("(cons 1 2)").unwrap(), "(1 . 2)");
    assert_eq!(eval_str("(cons 1 '(2 3))").unwrap(), "(1 2 3)");
    assert_eq!(eval_str("(cons 1 '())").unwrap(), "(1)");
    assert_eq!(eval_str("(cons 'a 'b)").unwrap(), "(a . b)");
    assert_eq!(error_kind("(cons 1)"), ErrorKind::Syntax);
}

#[test]
fn test_list() {
    assert_eq!(eval_str("(list)").unwrap(), "()");
    assert_eq!(eval_str("(list 1 (+ 1 1) 'c)").unwrap(), "(1 2 c)");
    assert_eq!(eval_str("(list (list 1 2) '())").unwrap(), "((1 2) ())");
}

#[test]
fn test_car_cdr() {
    assert_eq!(eval_str("(car '(1 2 3))").unwrap(), "1");
    assert_eq!(eval_str("(cdr '(1 2 3))").unwrap(), "(2 3)");
    assert_eq!(eval_str("(cdr '(1))").unwrap(), "()");
    assert_eq!(eval_str("(cdr '(a (b c)))").unwrap(), "((b c))");
    assert_eq!(eval_str("(car (cdr (list 1 2 3)))").unwrap(), "2");
    assert_eq!(eval_str("(cdr (cons 1 2))").unwrap(), "2");
}

#[test]
fn test_car_cdr_errors() {
    assert_eq!(error_kind("(car '())"), ErrorKind::Runtime);
    assert_eq!(error_kind("(cdr '())"), ErrorKind::Runtime);
    assert_eq!(error_kind("(car 1)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(car)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(cdr '(1) '(2))"), ErrorKind::Syntax);
}

#[test]
fn test_aliasing() {
    assert_eq!(
        eval_all(&["(define p (cons 1 2))", "(set-car! p 9)", "(car p)"]).unwrap(),
        "9"
    );
    assert_eq!(
        eval_all(&[
            "(define a (list 1 2 3))",
            "(define b a)",
            "(set-car! b 10)",
            "a",
        ])
        .unwrap(),
        "(10 2 3)"
    );
}

#[test]
fn test_aliasing_into_closures() {
    // The captured environment copies bindings, not the cells they name
    assert_eq!(
        eval_all(&[
            "(define cell (list 1))",
            "(define (peek) (car cell))",
            "(set-car! cell 42)",
            "(peek)",
        ])
        .unwrap(),
        "42"
    );
}

#[test]
fn test_set_cdr() {
    assert_eq!(
        eval_all(&["(define p (list 1 2))", "(set-cdr! p 3)", "p"]).unwrap(),
        "(1 . 3)"
    );
    assert_eq!(eval_str("(set-car! (list 1) 2)").unwrap(), "()");
    assert_eq!(error_kind("(set-car! '() 1)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(set-cdr! 5 1)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(set-cdr! (list 1))"), ErrorKind::Syntax);
}

#[test]
fn test_list_ref_and_tail() {
    assert_eq!(eval_str("(list-ref (list 1 2 3) 0)").unwrap(), "1");
    assert_eq!(eval_str("(list-ref '(a b c) 2)").unwrap(), "c");
    assert_eq!(eval_str("(list-tail (list 1 2 3) 2)").unwrap(), "(3)");
    assert_eq!(eval_str("(list-tail (list 1 2 3) 3)").unwrap(), "()");
    assert_eq!(eval_str("(list-tail (list 1 2 3) 0)").unwrap(), "(1 2 3)");

    assert_eq!(error_kind("(list-ref (list 1 2) 5)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(list-ref (list 1 2) 2)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(list-ref (list 1 2) -1)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(list-tail (list 1 2) 3)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(list-ref (list 1 2) 'a)"), ErrorKind::Runtime);
    assert_eq!(error_kind("(list-ref (list 1 2))"), ErrorKind::Runtime);
}

#[test]
fn test_predicates() {
    assert_eq!(eval_str("(null? '())").unwrap(), "#t");
    assert_eq!(eval_str("(null? (list))").unwrap(), "#t");
    assert_eq!(eval_str("(null? '(1))").unwrap(), "#f");

    assert_eq!(eval_str("(pair? '(1 2))").unwrap(), "#t");
    assert_eq!(eval_str("(pair? (cons 1 2))").unwrap(), "#t");
    assert_eq!(eval_str("(pair? '(1 2 3))").unwrap(), "#f");
    assert_eq!(eval_str("(pair? '())").unwrap(), "#f");

    assert_eq!(eval_str("(list? '())").unwrap(), "#t");
    assert_eq!(eval_str("(list? '(1 2 3))").unwrap(), "#t");
    assert_eq!(eval_str("(list? '(1 . 2))").unwrap(), "#f");
    assert_eq!(eval_str("(list? 1)").unwrap(), "#f");

    assert_eq!(eval_str("(boolean? #f)").unwrap(), "#t");
    assert_eq!(eval_str("(boolean? 0)").unwrap(), "#f");
    assert_eq!(eval_str("(symbol? 'a)").unwrap(), "#t");
    assert_eq!(eval_str("(symbol? 1)").unwrap(), "#f");
    assert_eq!(eval_str("(number? 1)").unwrap(), "#t");
    assert_eq!(eval_str("(number? 'a)").unwrap(), "#f");

    assert_eq!(error_kind("(null?)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(number? 1 2)"), ErrorKind::Syntax);
}

#[test]
fn test_cyclic_list_is_not_a_list() {
    let mut evaluator = LispEvaluator::new();
    evaluator.interpret("(define c (list 1 2))").unwrap();
    evaluator.interpret("(set-cdr! (cdr c) c)").unwrap();

    assert_eq!(evaluator.interpret("(list? c)").unwrap(), "#f");
    assert_eq!(evaluator.interpret("(car c)").unwrap(), "1");
    assert_eq!(evaluator.interpret("(list-ref c 4)").unwrap(), "1");

    evaluator.reset();
}

#[test]
fn test_improper_argument_list() {
    assert_eq!(error_kind("(+ 1 . 2)"), ErrorKind::Syntax);
    assert_eq!(error_kind("(list 1 . 2)"), ErrorKind::Syntax);
}
