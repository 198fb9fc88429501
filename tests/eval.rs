use std::{cell::RefCell, rc::Rc};
use wisp::eval::{eval, macroexpand};
use wisp::parser::parse;
use wisp::{default_env, lisp, Env, List, RuntimeError, Symbol, Value};

fn eval_str(source: &str) -> Value {
    eval_str_with_error(source).unwrap()
}

fn eval_str_with_error(source: &str) -> Result<Value, RuntimeError> {
    let env = Rc::new(RefCell::new(default_env()));
    eval_all(source, &env)
}

/// Evaluate every expression in `source` against one environment and
/// return the last result.
fn eval_all(source: &str, env: &Rc<RefCell<Env>>) -> Result<Value, RuntimeError> {
    let mut last = Value::Nil;
    for expr in parse(source) {
        last = eval(expr.unwrap(), env.clone())?;
    }
    Ok(last)
}

#[test]
fn self_evaluating_atoms() {
    assert_eq!(eval_str("42"), Value::Int(42));
    assert_eq!(eval_str("2.5"), Value::Float(2.5));
    assert_eq!(eval_str("()"), lisp! { () });
    // An empty group builds the empty list, same as the reader's `()`.
    assert_eq!(lisp! { () }, Value::List(List::Nil));
}

#[test]
fn quote_returns_operand_unevaluated() {
    assert_eq!(eval_str("(quote x)"), lisp! { x });
    assert_eq!(
        eval_str("(quote (+ 1 (nested (list))))"),
        lisp! { (+ 1 (nested (list))) }
    );
}

#[test]
fn quote_arity_is_checked() {
    assert!(matches!(
        eval_str_with_error("(quote)"),
        Err(RuntimeError::MalformedSpecialForm { form: "quote", .. })
    ));
    assert!(matches!(
        eval_str_with_error("(quote a b)"),
        Err(RuntimeError::MalformedSpecialForm { form: "quote", .. })
    ));
}

#[test]
fn if_selects_on_the_canonical_false_value() {
    assert_eq!(eval_str("(if (= 1 2) 1 2)"), Value::Int(2));
    assert_eq!(eval_str("(if (= 1 1) 1 2)"), Value::Int(1));
}

#[test]
fn only_false_is_falsy() {
    // 0, the empty list and nil are all truthy.
    assert_eq!(eval_str("(if 0 1 2)"), Value::Int(1));
    assert_eq!(eval_str("(if (list) 1 2)"), Value::Int(1));
    assert_eq!(eval_str("(if nil 1 2)"), Value::Int(1));
    assert_eq!(eval_str("(if (quote sym) 1 2)"), Value::Int(1));
}

#[test]
fn if_evaluates_only_the_taken_branch() {
    assert_eq!(eval_str("(if (= 1 1) 7 (car (list)))"), Value::Int(7));
    assert_eq!(eval_str("(if (= 1 2) (car (list)) 7)"), Value::Int(7));
}

#[test]
fn define_binds_and_returns_no_value() {
    assert_eq!(eval_str("(define x 41)"), Value::Nil);
    assert_eq!(eval_str("(progn (define x 41) x)"), Value::Int(41));
}

#[test]
fn define_in_a_procedure_does_not_touch_outer_frames() {
    let env = Rc::new(RefCell::new(default_env()));
    eval_all(
        "(define x 1)
         (define f (lambda (y) (progn (define x y) x)))",
        &env,
    )
    .unwrap();

    assert_eq!(eval_all("(f 99)", &env).unwrap(), Value::Int(99));
    assert_eq!(eval_all("x", &env).unwrap(), Value::Int(1));
}

#[test]
fn closures_capture_their_defining_environment() {
    assert_eq!(
        eval_str(
            "(progn
               (define make-adder (lambda (n) (lambda (x) (+ x n))))
               (define add3 (make-adder 3))
               (add3 4))"
        ),
        Value::Int(7)
    );
}

#[test]
fn recursion_through_the_global_frame() {
    assert_eq!(
        eval_str(
            "(progn
               (define fact (lambda (n) (if (= n 0) 1 (* n (fact (- n 1))))))
               (fact 10))"
        ),
        Value::Int(3628800)
    );
}

#[test]
fn progn_returns_last_and_runs_effects_in_order() {
    let env = Rc::new(RefCell::new(default_env()));
    assert_eq!(
        eval_all("(progn (define a 1) (define b (+ a 1)) b)", &env).unwrap(),
        Value::Int(2)
    );
}

#[test]
fn bodyless_progn_form_is_no_value() {
    assert_eq!(eval_str("(progn)"), Value::Nil);
}

#[test]
fn progn_is_also_an_ordinary_procedure_value() {
    // In value position the symbol resolves to the variadic built-in.
    assert_eq!(eval_str("(progn (define run progn) (run 1 2 3))"), Value::Int(3));
    assert_eq!(eval_str("(progn (define run progn) (run))"), Value::Nil);
}

#[test]
fn special_form_heads_survive_shadowing() {
    let env = Rc::new(RefCell::new(default_env()));
    eval_all("(define quote 99)", &env).unwrap();

    // As a head it is still the special form; as a value it is the binding.
    assert_eq!(eval_all("(quote x)", &env).unwrap(), lisp! { x });
    assert_eq!(eval_all("quote", &env).unwrap(), Value::Int(99));
}

#[test]
fn defmacro_binds_a_macro_and_substitutes_unevaluated_operands() {
    let env = Rc::new(RefCell::new(default_env()));
    eval_all(
        "(defmacro twice (x) (list (quote progn) x x))",
        &env,
    )
    .unwrap();

    assert_eq!(eval_all("(twice 5)", &env).unwrap(), Value::Int(5));
    // The operand is spliced in unevaluated: each copy re-evaluates.
    assert_eq!(
        eval_all("(progn (define n 1) (twice (define n (+ n 1))) n)", &env).unwrap(),
        Value::Int(3)
    );
}

#[test]
fn macroexpand_returns_the_expansion_without_running_it() {
    let env = Rc::new(RefCell::new(default_env()));
    eval_all("(defmacro twice (x) (list (quote progn) x x))", &env).unwrap();

    assert_eq!(
        eval_all("(macroexpand (twice (print 1)))", &env).unwrap(),
        lisp! { (progn (print 1) (print 1)) }
    );
}

#[test]
fn macroexpand_leaves_non_macro_expressions_unchanged() {
    assert_eq!(eval_str("(macroexpand (+ 1 2))"), lisp! { (+ 1 2) });
    assert_eq!(eval_str("(macroexpand 42)"), Value::Int(42));
    assert_eq!(eval_str("(macroexpand (quote (a b)))"), lisp! { (quote (a b)) });
}

#[test]
fn macroexpand_reaches_a_fixed_point_through_macro_chains() {
    let env = Rc::new(RefCell::new(default_env()));
    eval_all(
        "(defmacro add-form (a b) (list (quote +) a b))
         (defmacro double (a) (list (quote add-form) a a))",
        &env,
    )
    .unwrap();

    assert_eq!(
        eval_all("(macroexpand (double 5))", &env).unwrap(),
        lisp! { (+ 5 5) }
    );
    assert_eq!(eval_all("(double 5)", &env).unwrap(), Value::Int(10));
}

#[test]
fn macroexpand_helper_matches_the_special_form() {
    let env = Rc::new(RefCell::new(default_env()));
    eval_all("(defmacro twice (x) (list (quote progn) x x))", &env).unwrap();

    let expanded = macroexpand(lisp! { (twice 9) }, env).unwrap();
    assert_eq!(expanded, lisp! { (progn 9 9) });
}

#[test]
fn malformed_special_forms_are_rejected() {
    assert!(matches!(
        eval_str_with_error("(if 1 2)"),
        Err(RuntimeError::MalformedSpecialForm { form: "if", .. })
    ));
    assert!(matches!(
        eval_str_with_error("(define x)"),
        Err(RuntimeError::MalformedSpecialForm { form: "define", .. })
    ));
    assert!(matches!(
        eval_str_with_error("(define 1 2)"),
        Err(RuntimeError::MalformedSpecialForm { form: "define", .. })
    ));
    assert!(matches!(
        eval_str_with_error("(lambda x x)"),
        Err(RuntimeError::MalformedSpecialForm { form: "lambda", .. })
    ));
    assert!(matches!(
        eval_str_with_error("(lambda (x 1) x)"),
        Err(RuntimeError::MalformedSpecialForm { form: "lambda", .. })
    ));
    assert!(matches!(
        eval_str_with_error("(defmacro m (x))"),
        Err(RuntimeError::MalformedSpecialForm { form: "defmacro", .. })
    ));
    assert!(matches!(
        eval_str_with_error("(defmacro 1 (x) x)"),
        Err(RuntimeError::MalformedSpecialForm { form: "defmacro", .. })
    ));
    assert!(matches!(
        eval_str_with_error("(macroexpand 1 2)"),
        Err(RuntimeError::MalformedSpecialForm {
            form: "macroexpand",
            ..
        })
    ));
    assert!(matches!(
        eval_str_with_error("(try)"),
        Err(RuntimeError::MalformedSpecialForm { form: "try", .. })
    ));
}

#[test]
fn procedure_arity_is_checked() {
    assert!(matches!(
        eval_str_with_error("((lambda (x) x) 1 2)"),
        Err(RuntimeError::ArityMismatch(_))
    ));
    assert!(matches!(
        eval_str_with_error("((lambda (x y) x) 1)"),
        Err(RuntimeError::ArityMismatch(_))
    ));
}

#[test]
fn applying_a_non_callable_fails() {
    assert!(matches!(
        eval_str_with_error("(1 2 3)"),
        Err(RuntimeError::NotCallable(_))
    ));
}

#[test]
fn unbound_symbols_are_reported_by_name() {
    assert_eq!(
        eval_str_with_error("nosuch"),
        Err(RuntimeError::UnboundSymbol(Symbol::from_ref("nosuch")))
    );
}

#[test]
fn try_converts_failure_to_true_and_success_to_false() {
    assert_eq!(eval_str("(try (car (list)))"), Value::True);
    assert_eq!(eval_str("(try nosuch)"), Value::True);
    assert_eq!(eval_str("(try 42)"), Value::False);
    assert_eq!(eval_str("(try (+ 1 1))"), Value::False);
}

#[test]
fn arithmetic_promotion() {
    assert_eq!(eval_str("(+ 1 2)"), Value::Int(3));
    assert_eq!(eval_str("(+ 1 2.0)"), Value::Float(3.0));
    assert_eq!(eval_str("(* 2 2.5)"), Value::Float(5.0));
    assert_eq!(eval_str("(/ 7 2)"), Value::Int(3));
    assert_eq!(eval_str("(/ 7 2.0)"), Value::Float(3.5));
    assert_eq!(eval_str("(- 5)"), Value::Int(-5));
    assert_eq!(eval_str("(+)"), Value::Int(0));
    assert_eq!(eval_str("(*)"), Value::Int(1));
}

#[test]
fn integer_division_by_zero_is_an_error() {
    assert!(matches!(
        eval_str_with_error("(/ 1 0)"),
        Err(RuntimeError::ArityMismatch(_))
    ));
}

#[test]
fn comparisons_return_booleans() {
    assert_eq!(eval_str("(< 1 2)"), Value::True);
    assert_eq!(eval_str("(< 2 1)"), Value::False);
    assert_eq!(eval_str("(>= 2 2)"), Value::True);
    assert_eq!(eval_str("(= 1 1.0)"), Value::True);
    assert_eq!(eval_str("(= (quote a) (quote a))"), Value::True);
    assert!(matches!(
        eval_str_with_error("(< 1 (quote a))"),
        Err(RuntimeError::ArityMismatch(_))
    ));
}

#[test]
fn math_builtins_accept_both_numeric_kinds() {
    assert_eq!(eval_str("(sqrt 4)"), Value::Float(2.0));
    assert_eq!(eval_str("(sqrt 2.25)"), Value::Float(1.5));
    assert_eq!(eval_str("(pow 2 10)"), Value::Float(1024.0));
    assert_eq!(eval_str("(sin 0)"), Value::Float(0.0));
    assert_eq!(eval_str("(cos 0)"), Value::Float(1.0));
    assert_eq!(eval_str("(< 3.14 pi)"), Value::True);
    assert!(matches!(
        eval_str_with_error("(sqrt (quote a))"),
        Err(RuntimeError::ArityMismatch(_))
    ));
}

#[test]
fn native_functions_compare_by_identity() {
    assert_eq!(eval_str("(= print print)"), Value::True);
    assert_eq!(eval_str("(= print car)"), Value::False);
}

#[test]
fn predicates() {
    assert_eq!(eval_str("(list? (list 1 2))"), Value::True);
    assert_eq!(eval_str("(list? 1)"), Value::False);
    assert_eq!(eval_str("(null? (list))"), Value::True);
    assert_eq!(eval_str("(null? (list 1))"), Value::False);
    assert_eq!(eval_str("(null? nil)"), Value::False);
    assert_eq!(eval_str("(symbol? (quote a))"), Value::True);
    assert_eq!(eval_str("(symbol? 1)"), Value::False);
}

#[test]
fn print_returns_no_value() {
    assert_eq!(eval_str("(print 1 2 3)"), Value::Nil);
}
