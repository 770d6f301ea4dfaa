//! Chained scopes.

use crate::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to an [`Environment`].
/// Closures and call frames hold the scopes they need alive.
pub type Env = Rc<RefCell<Environment>>;

/// Result of [`Environment::assign`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SetResult {
    Success,
    Undefined,
}

/// A scope mapping names to values, with an optional enclosing scope.
/// A scope references its parent, never the other way around.
#[derive(Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a new top-level scope.
    pub fn new_env() -> Env {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// Creates a new scope enclosed by `outer`.
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(Rc::clone(outer)),
        }))
    }

    /// Returns the value bound to `name` in the nearest scope that binds it,
    /// or `None` if no enclosing scope does.
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(val) => Some(val.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this scope, shadowing any binding of an enclosing scope.
    pub fn set(&mut self, name: impl Into<String>, val: Object) {
        debug_assert!(!val.is_signal(), "signals are never bound");
        self.store.insert(name.into(), val);
    }

    /// Rebinds `name` in the nearest scope that binds it. If no scope does, nothing changes and
    /// `Undefined` is returned.
    pub fn assign(&mut self, name: &str, val: Object) -> SetResult {
        if let Some(slot) = self.store.get_mut(name) {
            *slot = val;
            return SetResult::Success;
        }
        match &self.outer {
            Some(outer) => outer.borrow_mut().assign(name, val),
            None => SetResult::Undefined,
        }
    }
}
