use crate::{
    utils::{require_arg, require_typed_arg},
    Env, FloatType, List, RuntimeError, Symbol, Value,
};

/// Initialize an instance of `Env` with the core built-ins implemented in
/// Rust. These are ordinary callables pre-bound in the global frame, never
/// special forms: they take part in left-to-right argument evaluation like
/// any user procedure.
pub fn default_env() -> Env {
    let mut env = Env::new();

    env.define(Symbol::from_ref("nil"), Value::Nil);

    env.define(
        Symbol::from_ref("print"),
        Value::NativeFunc(|_env, args| {
            let rendered: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();

            println!("{}", rendered.join(" "));
            Ok(Value::Nil)
        }),
    );

    env.define(
        Symbol::from_ref("car"),
        Value::NativeFunc(|_env, args| {
            let list = require_typed_arg::<&List>("car", &args, 0)?;

            list.car()
        }),
    );

    env.define(
        Symbol::from_ref("cdr"),
        Value::NativeFunc(|_env, args| {
            let list = require_typed_arg::<&List>("cdr", &args, 0)?;

            Ok(Value::List(list.cdr()))
        }),
    );

    env.define(
        Symbol::from_ref("cons"),
        Value::NativeFunc(|_env, args| {
            let car = require_arg("cons", &args, 0)?;
            let cdr = require_typed_arg::<&List>("cons", &args, 1)?;

            Ok(Value::List(cdr.cons(car.clone())))
        }),
    );

    env.define(
        Symbol::from_ref("list"),
        Value::NativeFunc(|_env, args| Ok(Value::List(args.iter().collect::<List>()))),
    );

    env.define(
        Symbol::from_ref("list?"),
        Value::NativeFunc(|_env, args| {
            let val = require_arg("list?", &args, 0)?;

            Ok(Value::from(matches!(val, Value::List(_))))
        }),
    );

    env.define(
        Symbol::from_ref("null?"),
        Value::NativeFunc(|_env, args| {
            let val = require_arg("null?", &args, 0)?;

            Ok(Value::from(matches!(val, Value::List(List::Nil))))
        }),
    );

    env.define(
        Symbol::from_ref("symbol?"),
        Value::NativeFunc(|_env, args| {
            let val = require_arg("symbol?", &args, 0)?;

            Ok(Value::from(matches!(val, Value::Symbol(_))))
        }),
    );

    // progn doubles as a plain variadic procedure: all arguments are
    // already evaluated, so it just hands back the last one.
    env.define(
        Symbol::from_ref("progn"),
        Value::NativeFunc(|_env, args| Ok(args.into_iter().last().unwrap_or(Value::Nil))),
    );

    env.define(
        Symbol::from_ref("+"),
        Value::NativeFunc(|_env, args| {
            let mut total = match args.first() {
                Some(Value::Float(_)) => Value::Float(0.0),
                _ => Value::Int(0),
            };

            for arg in &args {
                total = (&total + arg).map_err(|_| {
                    RuntimeError::ArityMismatch(format!(
                        "\"+\" requires arguments to be numbers; got {}",
                        arg
                    ))
                })?;
            }

            Ok(total)
        }),
    );

    env.define(
        Symbol::from_ref("-"),
        Value::NativeFunc(|_env, args| {
            let first = require_arg("-", &args, 0)?;

            if args.len() == 1 {
                return (&Value::Int(0) - first).map_err(|_| {
                    RuntimeError::ArityMismatch(format!(
                        "\"-\" requires arguments to be numbers; got {}",
                        first
                    ))
                });
            }

            let mut total = first.clone();
            for arg in &args[1..] {
                total = (&total - arg).map_err(|_| {
                    RuntimeError::ArityMismatch(format!(
                        "\"-\" requires arguments to be numbers; got {}",
                        arg
                    ))
                })?;
            }

            Ok(total)
        }),
    );

    env.define(
        Symbol::from_ref("*"),
        Value::NativeFunc(|_env, args| {
            let mut product = Value::Int(1);

            for arg in &args {
                product = (&product * arg).map_err(|_| {
                    RuntimeError::ArityMismatch(format!(
                        "\"*\" requires arguments to be numbers; got {}",
                        arg
                    ))
                })?;
            }

            Ok(product)
        }),
    );

    env.define(
        Symbol::from_ref("/"),
        Value::NativeFunc(|_env, args| {
            let first = require_arg("/", &args, 0)?;

            if args.len() == 1 {
                return Ok(first.clone());
            }

            let mut total = first.clone();
            for arg in &args[1..] {
                total = (&total / arg).map_err(|_| {
                    RuntimeError::ArityMismatch(format!(
                        "\"/\" requires numeric arguments and a nonzero divisor; got {}",
                        arg
                    ))
                })?;
            }

            Ok(total)
        }),
    );

    env.define(
        Symbol::from_ref("="),
        Value::NativeFunc(|_env, args| {
            let a = require_arg("=", &args, 0)?;
            let b = require_arg("=", &args, 1)?;

            Ok(Value::from(a == b))
        }),
    );

    env.define(
        Symbol::from_ref("<"),
        Value::NativeFunc(|_env, args| compare("<", &args, |ordering| ordering.is_lt())),
    );

    env.define(
        Symbol::from_ref("<="),
        Value::NativeFunc(|_env, args| compare("<=", &args, |ordering| ordering.is_le())),
    );

    env.define(
        Symbol::from_ref(">"),
        Value::NativeFunc(|_env, args| compare(">", &args, |ordering| ordering.is_gt())),
    );

    env.define(
        Symbol::from_ref(">="),
        Value::NativeFunc(|_env, args| compare(">=", &args, |ordering| ordering.is_ge())),
    );

    // The math functions take either numeric kind and always yield floats.
    env.define(
        Symbol::from_ref("pi"),
        Value::Float(std::f64::consts::PI as FloatType),
    );

    env.define(
        Symbol::from_ref("sqrt"),
        Value::NativeFunc(|_env, args| {
            let n = require_typed_arg::<FloatType>("sqrt", &args, 0)?;

            Ok(Value::Float(n.sqrt()))
        }),
    );

    env.define(
        Symbol::from_ref("sin"),
        Value::NativeFunc(|_env, args| {
            let n = require_typed_arg::<FloatType>("sin", &args, 0)?;

            Ok(Value::Float(n.sin()))
        }),
    );

    env.define(
        Symbol::from_ref("cos"),
        Value::NativeFunc(|_env, args| {
            let n = require_typed_arg::<FloatType>("cos", &args, 0)?;

            Ok(Value::Float(n.cos()))
        }),
    );

    env.define(
        Symbol::from_ref("pow"),
        Value::NativeFunc(|_env, args| {
            let base = require_typed_arg::<FloatType>("pow", &args, 0)?;
            let exponent = require_typed_arg::<FloatType>("pow", &args, 1)?;

            Ok(Value::Float(base.powf(exponent)))
        }),
    );

    env
}

fn compare(
    func_name: &str,
    args: &[Value],
    accept: fn(std::cmp::Ordering) -> bool,
) -> Result<Value, RuntimeError> {
    let a = require_arg(func_name, args, 0)?;
    let b = require_arg(func_name, args, 1)?;

    let ordering = a.partial_cmp(b).ok_or_else(|| {
        RuntimeError::ArityMismatch(format!(
            "\"{}\" requires arguments to be numbers; got {} and {}",
            func_name, a, b
        ))
    })?;

    Ok(Value::from(accept(ordering)))
}
