use crate::{Env, FloatType, IntType, Lambda, List, RuntimeError, Symbol};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Add, Div, Mul, Sub};
use std::rc::Rc;

/// A function implemented in Rust and exposed to lisp code. Receives the
/// environment of the call site and its already-evaluated arguments.
pub type NativeFunc = fn(env: Rc<RefCell<Env>>, args: Vec<Value>) -> Result<Value, RuntimeError>;

/// The universal expression/value type: everything the reader produces and
/// everything evaluation yields is one of these.
#[derive(Debug, Clone)]
pub enum Value {
    /// The no-value marker returned by side-effecting forms. Distinct from
    /// the empty list.
    Nil,
    True,
    False,
    Int(IntType),
    Float(FloatType),
    Symbol(Symbol),
    List(List),
    Lambda(Lambda),
    /// A lambda that receives its call-site operands unevaluated and whose
    /// result is evaluated in place of the call.
    Macro(Lambda),
    NativeFunc(NativeFunc),
}

impl Value {
    /// Everything except the canonical false value counts as true in an
    /// `if` test; in particular `0`, `nil` and the empty list are truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::False)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::True | Value::False => "a boolean",
            Value::Int(_) => "an int",
            Value::Float(_) => "a float",
            Value::Symbol(_) => "a symbol",
            Value::List(_) => "a list",
            Value::Lambda(_) => "a procedure",
            Value::Macro(_) => "a macro",
            Value::NativeFunc(_) => "a native function",
        }
    }
}

impl Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Nil => write!(formatter, "nil"),
            Value::True => write!(formatter, "#t"),
            Value::False => write!(formatter, "#f"),
            Value::Int(n) => write!(formatter, "{}", n),
            // Debug-format floats so whole values keep their decimal point
            // and re-read as floats.
            Value::Float(n) => write!(formatter, "{:?}", n),
            Value::Symbol(symbol) => write!(formatter, "{}", symbol),
            Value::List(list) => write!(formatter, "{}", list),
            Value::Lambda(lambda) => write!(formatter, "{}", lambda),
            Value::Macro(lambda) => write!(formatter, "(macro {})", lambda),
            Value::NativeFunc(_) => write!(formatter, "<native function>"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::True, Value::True) => true,
            (Value::False, Value::False) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            // Numbers compare by value across the two kinds, so `1 = 1.0`.
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as FloatType == *b
            }
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Lambda(a), Value::Lambda(b)) => a == b,
            (Value::Macro(a), Value::Macro(b)) => a == b,
            (Value::NativeFunc(a), Value::NativeFunc(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}

// Only numbers are ordered; everything else is incomparable and the
// comparison built-ins report it.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as FloatType).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as FloatType)),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        if flag {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<IntType> for Value {
    fn from(n: IntType) -> Self {
        Value::Int(n)
    }
}

impl From<FloatType> for Value {
    fn from(n: FloatType) -> Self {
        Value::Float(n)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(list)
    }
}

impl<'a> TryFrom<&'a Value> for &'a List {
    type Error = ();

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(list) => Ok(list),
            _ => Err(()),
        }
    }
}

impl TryFrom<&Value> for IntType {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(()),
        }
    }
}

// Ints widen here so the math built-ins accept either numeric kind.
impl TryFrom<&Value> for FloatType {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(*n),
            Value::Int(n) => Ok(*n as FloatType),
            _ => Err(()),
        }
    }
}

impl TryFrom<&Value> for Symbol {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Symbol(symbol) => Ok(*symbol),
            _ => Err(()),
        }
    }
}

// Arithmetic over the two numeric kinds. The promotion rule is fixed:
// int with int stays int (division truncates), any float operand makes
// the result a float. Callers turn the unit error into a RuntimeError
// with the operator's name.

impl Add for &Value {
    type Output = Result<Value, ()>;

    fn add(self, other: &Value) -> Self::Output {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as FloatType + b)),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a + *b as FloatType)),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
            _ => Err(()),
        }
    }
}

impl Sub for &Value {
    type Output = Result<Value, ()>;

    fn sub(self, other: &Value) -> Self::Output {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a - b)),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as FloatType - b)),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a - *b as FloatType)),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a - b)),
            _ => Err(()),
        }
    }
}

impl Mul for &Value {
    type Output = Result<Value, ()>;

    fn mul(self, other: &Value) -> Self::Output {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a * b)),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as FloatType * b)),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a * *b as FloatType)),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a * b)),
            _ => Err(()),
        }
    }
}

impl Div for &Value {
    type Output = Result<Value, ()>;

    fn div(self, other: &Value) -> Self::Output {
        match (self, other) {
            (Value::Int(_), Value::Int(0)) => Err(()),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a / b)),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as FloatType / b)),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a / *b as FloatType)),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a / b)),
            _ => Err(()),
        }
    }
}
