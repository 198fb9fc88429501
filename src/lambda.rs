use crate::{Env, Symbol, Value};
use std::cell::RefCell;
use std::fmt::{self, Display};
use std::rc::Rc;

/// A user-defined procedure: parameter names, an unevaluated body, and the
/// environment that was current at the point of definition. Whether the
/// procedure is a macro is carried by the `Value` variant wrapping it, not
/// by the `Lambda` itself. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Lambda {
    pub closure: Rc<RefCell<Env>>,
    pub argnames: Vec<Symbol>,
    pub body: Rc<Value>,
}

// Closure environments are compared by identity; walking them structurally
// would loop on self-referencing definitions.
impl PartialEq for Lambda {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.closure, &other.closure)
            && self.argnames == other.argnames
            && self.body == other.body
    }
}

impl Display for Lambda {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "(lambda (")?;
        let mut first = true;
        for name in &self.argnames {
            if !first {
                write!(formatter, " ")?;
            }
            write!(formatter, "{}", name)?;
            first = false;
        }
        write!(formatter, ") {})", self.body)
    }
}
