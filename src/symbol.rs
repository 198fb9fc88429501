use internment::Intern;
use std::fmt::{self, Debug, Display};

/// An interned string naming a variable or operator. Cheap to copy and
/// compare; two symbols with the same text are the same symbol.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(Intern<String>);

impl Symbol {
    pub fn new(text: String) -> Self {
        Symbol(Intern::new(text))
    }

    pub fn from_ref(text: &str) -> Self {
        Symbol(Intern::from_ref(text))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Symbol::from_ref(text)
    }
}

impl Display for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl Debug for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Symbol({})", self.0)
    }
}
