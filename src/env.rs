use crate::{Symbol, Value};
use halfbrown::HashMap;
use std::cell::RefCell;
use std::rc::Rc;

/// A frame mapping symbols to values, chained to an optional outer frame.
/// Frames form a singly-linked chain rooted at the global frame; a child
/// frame holds a shared reference to its parent so captured chains stay
/// alive as long as any closure still refers to them.
#[derive(Debug, Default)]
pub struct Env {
    entries: HashMap<Symbol, Value>,
    parent: Option<Rc<RefCell<Env>>>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh frame whose lookups fall through to `parent`.
    pub fn extend(parent: Rc<RefCell<Env>>) -> Self {
        Env {
            entries: HashMap::new(),
            parent: Some(parent),
        }
    }

    /// Bind (or overwrite) `symbol` in this frame only. Never shadows
    /// through to an outer frame.
    pub fn define(&mut self, symbol: Symbol, value: Value) {
        self.entries.insert(symbol, value);
    }

    /// Resolve `symbol` in the nearest enclosing frame that defines it.
    pub fn get(&self, symbol: &Symbol) -> Option<Value> {
        if let Some(value) = self.entries.get(symbol) {
            Some(value.clone())
        } else {
            self.parent
                .as_ref()
                .and_then(|parent| parent.borrow().get(symbol))
        }
    }
}
