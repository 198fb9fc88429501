use crate::{FloatType, IntType, List, RuntimeError, Symbol, Value};

/// Fetch argument `index` for the built-in named `func_name`, or raise a
/// count-mismatch error naming the built-in.
pub fn require_arg<'a>(
    func_name: &str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a Value, RuntimeError> {
    args.get(index).ok_or_else(|| {
        RuntimeError::ArityMismatch(format!(
            "\"{}\" requires an argument {}",
            func_name,
            index + 1
        ))
    })
}

/// Fetch argument `index` and convert it to the desired type, raising a
/// type-mismatch error naming the built-in if the conversion fails.
pub fn require_typed_arg<'a, T>(
    func_name: &str,
    args: &'a [Value],
    index: usize,
) -> Result<T, RuntimeError>
where
    T: TryFrom<&'a Value> + TypeName,
{
    let arg = require_arg(func_name, args, index)?;
    T::try_from(arg).map_err(|_| {
        RuntimeError::ArityMismatch(format!(
            "\"{}\" requires argument {} to be {}; got {}",
            func_name,
            index + 1,
            T::type_name(),
            arg
        ))
    })
}

pub trait TypeName {
    fn type_name() -> &'static str;
}

impl TypeName for IntType {
    fn type_name() -> &'static str {
        "an int"
    }
}

impl TypeName for FloatType {
    fn type_name() -> &'static str {
        "a number"
    }
}

impl<'a> TypeName for &'a List {
    fn type_name() -> &'static str {
        "a list"
    }
}

impl TypeName for Symbol {
    fn type_name() -> &'static str {
        "a symbol"
    }
}
