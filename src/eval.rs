use crate::{Env, Lambda, List, RuntimeError, Symbol, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// The reserved special-form heads. A list starting with one of these is
/// dispatched by the evaluator's own rules for every occurrence; binding
/// the same name as a variable does not change that.
const SPECIAL_FORMS: [&str; 8] = [
    "quote",
    "if",
    "define",
    "lambda",
    "progn",
    "defmacro",
    "macroexpand",
    "try",
];

pub fn is_special_form(symbol: &Symbol) -> bool {
    SPECIAL_FORMS.contains(&symbol.as_str())
}

fn malformed(form: &'static str, detail: impl Into<String>) -> RuntimeError {
    RuntimeError::MalformedSpecialForm {
        form,
        detail: detail.into(),
    }
}

/// Evaluate one expression against an environment.
///
/// The loop is a manual trampoline: the tail positions of `if` and `progn`
/// and the result of an inline macro expansion replace the current
/// expression instead of recursing, so chains of those forms run in
/// constant host stack. Every other position recurses structurally.
pub fn eval(mut expr: Value, env: Rc<RefCell<Env>>) -> Result<Value, RuntimeError> {
    loop {
        let list = match expr {
            Value::Symbol(symbol) => {
                return env
                    .borrow()
                    .get(&symbol)
                    .ok_or(RuntimeError::UnboundSymbol(symbol));
            }
            Value::List(list @ List::Cons(_)) => list,
            // Numbers, booleans, nil, the empty list and procedure values
            // are self-evaluating.
            other => return Ok(other),
        };

        let head = list.car()?;
        let mut args: Vec<Value> = list.cdr().into_iter().collect();

        if let Value::Symbol(symbol) = &head {
            match symbol.as_str() {
                "quote" => {
                    if args.len() != 1 {
                        return Err(malformed("quote", "expected exactly one operand"));
                    }
                    return Ok(args.pop().unwrap());
                }
                "if" => {
                    if args.len() != 3 {
                        return Err(malformed("if", "expected test, consequent and alternative"));
                    }
                    let alternative = args.pop().unwrap();
                    let consequent = args.pop().unwrap();
                    let test = args.pop().unwrap();
                    expr = if eval(test, env.clone())?.is_truthy() {
                        consequent
                    } else {
                        alternative
                    };
                    continue;
                }
                "define" => {
                    if args.len() != 2 {
                        return Err(malformed("define", "expected a name and a value"));
                    }
                    let value_expr = args.pop().unwrap();
                    let name = match args.pop().unwrap() {
                        Value::Symbol(name) => name,
                        other => {
                            return Err(malformed(
                                "define",
                                format!("name must be a symbol; got {}", other),
                            ));
                        }
                    };
                    let value = eval(value_expr, env.clone())?;
                    env.borrow_mut().define(name, value);
                    return Ok(Value::Nil);
                }
                "lambda" => {
                    if args.len() != 2 {
                        return Err(malformed("lambda", "expected a parameter list and a body"));
                    }
                    let body = args.pop().unwrap();
                    let argnames = read_argnames("lambda", args.pop().unwrap())?;
                    return Ok(Value::Lambda(Lambda {
                        closure: env,
                        argnames,
                        body: Rc::new(body),
                    }));
                }
                "progn" => {
                    let last = match args.pop() {
                        Some(last) => last,
                        // A bodyless progn form is undefined in the
                        // surface language; treat it as no value.
                        None => return Ok(Value::Nil),
                    };
                    for step in args {
                        eval(step, env.clone())?;
                    }
                    expr = last;
                    continue;
                }
                "defmacro" => {
                    if args.len() != 3 {
                        return Err(malformed(
                            "defmacro",
                            "expected a name, a parameter list and a body",
                        ));
                    }
                    let body = args.pop().unwrap();
                    let argnames = read_argnames("defmacro", args.pop().unwrap())?;
                    let name = match args.pop().unwrap() {
                        Value::Symbol(name) => name,
                        other => {
                            return Err(malformed(
                                "defmacro",
                                format!("name must be a symbol; got {}", other),
                            ));
                        }
                    };
                    let lambda = Lambda {
                        closure: env.clone(),
                        argnames,
                        body: Rc::new(body),
                    };
                    env.borrow_mut().define(name, Value::Macro(lambda));
                    return Ok(Value::Nil);
                }
                "macroexpand" => {
                    if args.len() != 1 {
                        return Err(malformed("macroexpand", "expected exactly one operand"));
                    }
                    // Introspection only: the operand is taken unevaluated
                    // and the expansion is returned, not run.
                    return macroexpand(args.pop().unwrap(), env);
                }
                "try" => {
                    if args.len() != 1 {
                        return Err(malformed("try", "expected exactly one operand"));
                    }
                    return Ok(match eval(args.pop().unwrap(), env) {
                        Ok(_) => Value::False,
                        Err(_) => Value::True,
                    });
                }
                _ => {}
            }
        }

        // Ordinary application: evaluate the head, then either expand a
        // macro in place or evaluate the operands left-to-right and call.
        let func = eval(head, env.clone())?;
        if let Value::Macro(_) = &func {
            expr = call_function(env.clone(), &func, args)?;
            continue;
        }
        let mut evaluated = Vec::with_capacity(args.len());
        for arg in args {
            evaluated.push(eval(arg, env.clone())?);
        }
        return call_function(env, &func, evaluated);
    }
}

/// Invoke a callable value. For lambdas and macros this creates the fresh
/// frame binding parameters positionally, with the closure environment as
/// outer, and evaluates the body there.
pub fn call_function(
    env: Rc<RefCell<Env>>,
    func: &Value,
    args: Vec<Value>,
) -> Result<Value, RuntimeError> {
    match func {
        Value::NativeFunc(func) => func(env, args),
        Value::Lambda(lambda) | Value::Macro(lambda) => {
            let body_env = bind_arguments(lambda, args)?;
            eval((*lambda.body).clone(), Rc::new(RefCell::new(body_env)))
        }
        other => Err(RuntimeError::NotCallable(other.to_string())),
    }
}

fn bind_arguments(lambda: &Lambda, args: Vec<Value>) -> Result<Env, RuntimeError> {
    if args.len() != lambda.argnames.len() {
        return Err(RuntimeError::ArityMismatch(format!(
            "procedure expected {} arguments; got {}",
            lambda.argnames.len(),
            args.len()
        )));
    }
    let mut body_env = Env::extend(lambda.closure.clone());
    for (name, value) in lambda.argnames.iter().zip(args) {
        body_env.define(*name, value);
    }
    Ok(body_env)
}

/// Repeatedly apply macros to `expr` until its head no longer names one.
///
/// Reserved special-form heads stop expansion immediately, since those
/// lists can never be applications. A divergent user macro loops forever;
/// guarding against that is the macro author's responsibility.
pub fn macroexpand(mut expr: Value, env: Rc<RefCell<Env>>) -> Result<Value, RuntimeError> {
    loop {
        let (head, operands) = match &expr {
            Value::List(list @ List::Cons(_)) => (list.car()?, list.cdr()),
            _ => return Ok(expr),
        };
        if let Value::Symbol(symbol) = &head {
            if is_special_form(symbol) {
                return Ok(expr);
            }
        }
        match eval(head, env.clone())? {
            func @ Value::Macro(_) => {
                let args: Vec<Value> = operands.into_iter().collect();
                expr = call_function(env.clone(), &func, args)?;
            }
            _ => return Ok(expr),
        }
    }
}

fn read_argnames(form: &'static str, params: Value) -> Result<Vec<Symbol>, RuntimeError> {
    let list = match params {
        Value::List(list) => list,
        other => {
            return Err(malformed(
                form,
                format!("expected a list of parameter names; got {}", other),
            ));
        }
    };
    list.into_iter()
        .enumerate()
        .map(|(index, param)| match param {
            Value::Symbol(symbol) => Ok(symbol),
            other => Err(malformed(
                form,
                format!(
                    "parameter {} must be a symbol, but it is {}",
                    index + 1,
                    other.type_name()
                ),
            )),
        })
        .collect()
}
