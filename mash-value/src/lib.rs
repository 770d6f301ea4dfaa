//! Runtime object model, environments and the built-in registry.

pub mod builtin_vars;
pub mod env;
pub mod object;

pub use builtin_vars::BuiltinVars;
pub use env::{Env, Environment};

use std::fmt;
use std::rc::Rc;

/// A runtime value.
#[derive(Clone)]
pub enum Object {
    Null,
    Bool(bool),
    Str(Rc<str>),
    /// A user function (closure).
    Fun(Rc<object::Function>),
    /// A host function from the built-in registry.
    Builtin(Rc<object::NativeFn>),
    /// Control signal: unwinds blocks up to the enclosing call or the program root.
    ReturnValue(Box<Object>),
    /// Control signal: an evaluation error.
    Error(String),
}

impl Object {
    pub fn string(value: impl AsRef<str>) -> Self {
        Self::Str(Rc::from(value.as_ref()))
    }

    pub fn error(message: impl ToString) -> Self {
        Self::Error(message.to_string())
    }

    /// Name of the runtime type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Null => "NULL",
            Object::Bool(_) => "BOOL",
            Object::Str(_) => "STRING",
            Object::Fun(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
        }
    }

    /// `null` and `false` are falsy. Everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Object::Null => false,
            Object::Bool(val) => *val,
            _ => true,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Returns `true` for the control signals ([`Object::Error`] and [`Object::ReturnValue`]).
    /// Signals are never bound to a name.
    pub fn is_signal(&self) -> bool {
        matches!(self, Object::Error(_) | Object::ReturnValue(_))
    }

    /// Display string of the value.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Null => f.write_str("null"),
            Object::Bool(val) => write!(f, "{}", val),
            Object::Str(val) => f.write_str(val),
            Object::Fun(_) | Object::Builtin(_) => f.write_str("<function>"),
            Object::ReturnValue(val) => write!(f, "{}", val),
            Object::Error(message) => write!(f, "ERROR: {}", message),
        }
    }
}

/// Closures can reach themselves through their environment, so `Debug` uses the display string.
impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Null, Object::Null) => true,
            (Object::Bool(l), Object::Bool(r)) => l == r,
            (Object::Str(l), Object::Str(r)) => l == r,
            (Object::Fun(l), Object::Fun(r)) => Rc::ptr_eq(l, r),
            (Object::Builtin(l), Object::Builtin(r)) => Rc::ptr_eq(l, r),
            (Object::ReturnValue(l), Object::ReturnValue(r)) => l == r,
            (Object::Error(l), Object::Error(r)) => l == r,
            _ => false,
        }
    }
}

impl From<bool> for Object {
    fn from(val: bool) -> Self {
        Object::Bool(val)
    }
}

impl From<&str> for Object {
    fn from(val: &str) -> Self {
        Object::string(val)
    }
}
