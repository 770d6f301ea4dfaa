use crate::env::Env;
use crate::Object;
use mash_parser::ast::{Block, Ident};
use std::rc::Rc;

/// A user function: the parameters and body of a function literal, and the environment it was created in.
pub struct Function {
    pub params: Rc<Vec<Ident>>,
    pub body: Rc<Block>,
    /// Captured by reference: later bindings in the defining scope are visible to the function.
    pub env: Env,
}

impl Function {
    pub fn new(params: Rc<Vec<Ident>>, body: Rc<Block>, env: Env) -> Self {
        Self { params, body, env }
    }

    /// Number of parameters the function accepts.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Signature of host functions reachable from the built-in registry.
pub type NativeFnPtr = Rc<dyn Fn(&[Object]) -> Object>;

/// A host function.
pub struct NativeFn {
    pub ident: String,
    pub func: NativeFnPtr,
}

impl NativeFn {
    pub fn call(&self, args: &[Object]) -> Object {
        (self.func)(args)
    }
}
