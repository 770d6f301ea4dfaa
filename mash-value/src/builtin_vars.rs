use crate::object::NativeFn;
use crate::Object;
use std::collections::HashMap;
use std::rc::Rc;

/// Registry of host functions, consulted after the environment chain fails to resolve a name.
/// Built once before evaluation and read-only afterwards.
#[derive(Clone, Default)]
pub struct BuiltinVars {
    values: HashMap<String, Object>,
}

impl BuiltinVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `func` into an [`Object::Builtin`].
    pub fn native_fn(ident: &str, func: impl Fn(&[Object]) -> Object + 'static) -> Object {
        Object::Builtin(Rc::new(NativeFn {
            ident: ident.to_string(),
            func: Rc::new(func),
        }))
    }

    /// Registers `func` under `ident`, replacing any previous entry.
    pub fn add_native_fn(&mut self, ident: &str, func: impl Fn(&[Object]) -> Object + 'static) {
        self.values
            .insert(ident.to_string(), Self::native_fn(ident, func));
    }

    pub fn get(&self, ident: &str) -> Option<Object> {
        self.values.get(ident).cloned()
    }

    /// Iterates over the registered names.
    pub fn idents(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
