use crate::{RuntimeError, Value};
use std::fmt::{self, Display};
use std::rc::Rc;

/// The one compound data structure of the language: a singly-linked list
/// of cons cells. Cells are shared via `Rc`, so `cdr` and `cons` are O(1)
/// and never copy the tail.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum List {
    #[default]
    Nil,
    Cons(Rc<ConsCell>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsCell {
    pub car: Value,
    pub cdr: List,
}

impl List {
    pub fn is_empty(&self) -> bool {
        matches!(self, List::Nil)
    }

    /// The first element. Taking the head of the empty list is the
    /// canonical index error of the language.
    pub fn car(&self) -> Result<Value, RuntimeError> {
        match self {
            List::Cons(cell) => Ok(cell.car.clone()),
            List::Nil => Err(RuntimeError::ArityMismatch(
                "attempted to apply car on the empty list".to_owned(),
            )),
        }
    }

    /// Everything after the first element. The cdr of the empty list is
    /// the empty list.
    pub fn cdr(&self) -> List {
        match self {
            List::Cons(cell) => cell.cdr.clone(),
            List::Nil => List::Nil,
        }
    }

    pub fn cons(&self, val: Value) -> List {
        List::Cons(Rc::new(ConsCell {
            car: val,
            cdr: self.clone(),
        }))
    }
}

impl Display for List {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "(")?;
        let mut first = true;
        for val in self {
            if !first {
                write!(formatter, " ")?;
            }
            write!(formatter, "{}", val)?;
            first = false;
        }
        write!(formatter, ")")
    }
}

#[derive(Debug, Clone)]
pub struct ConsIterator(List);

impl Iterator for ConsIterator {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let cell = match &self.0 {
            List::Nil => return None,
            List::Cons(cell) => cell.clone(),
        };
        self.0 = cell.cdr.clone();
        Some(cell.car.clone())
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = ConsIterator;

    fn into_iter(self) -> ConsIterator {
        ConsIterator(self)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = Value;
    type IntoIter = ConsIterator;

    fn into_iter(self) -> ConsIterator {
        ConsIterator(self.clone())
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let items: Vec<Value> = iter.into_iter().collect();
        let mut list = List::Nil;
        for val in items.into_iter().rev() {
            list = list.cons(val);
        }
        list
    }
}

impl<'a> FromIterator<&'a Value> for List {
    fn from_iter<I: IntoIterator<Item = &'a Value>>(iter: I) -> Self {
        iter.into_iter().cloned().collect()
    }
}
