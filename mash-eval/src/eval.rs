use log::{debug, trace};
use mash_parser::ast::{Block, Expr, Ident, Root, Stmt};
use mash_parser::lexer::{Token, TokenKind};
use mash_passes::validate::validate;
use mash_value::env::SetResult;
use mash_value::object::Function;
use mash_value::{BuiltinVars, Env, Environment, Object};
use std::rc::Rc;

/// Returns early from the enclosing function if `$obj` is an [`Object::Error`].
macro_rules! propagate_error {
    ($obj: expr) => {{
        let obj = $obj;
        if obj.is_error() {
            return obj;
        }
        obj
    }};
}

/// Walks the AST and produces runtime values.
pub struct Evaluator<'a> {
    builtin_vars: &'a BuiltinVars,
}

impl<'a> Evaluator<'a> {
    pub fn new(builtin_vars: &'a BuiltinVars) -> Self {
        Self { builtin_vars }
    }

    /// Evaluates a whole program. Returns the value of the last statement, or `None` if it was a binding.
    /// A program with statements that failed to parse is not evaluated; an [`Object::Error`] is returned instead.
    pub fn eval_root(&self, root: &Root, env: &Env) -> Option<Object> {
        if let Err(incomplete) = validate(root) {
            debug!("failed statements at positions {:?}", incomplete.positions);
            return Some(Object::error(incomplete));
        }

        let mut result = None;
        for stmt in &root.stmts {
            result = self.eval_stmt(stmt, env);
            match result {
                Some(Object::ReturnValue(val)) => return Some(*val),
                Some(Object::Error(ref message)) => debug!("statement failed: {}", message),
                _ => {}
            }
        }
        result
    }

    /// Evaluates the statements of `block` in `env`. A [`Object::ReturnValue`] stops the block and is
    /// returned still wrapped.
    pub fn eval_block(&self, block: &Block, env: &Env) -> Option<Object> {
        let mut result = None;
        for stmt in &block.stmts {
            result = self.eval_stmt(stmt, env);
            if let Some(Object::ReturnValue(_)) = result {
                return result;
            }
        }
        result
    }

    pub fn eval_stmt(&self, stmt: &Stmt, env: &Env) -> Option<Object> {
        match stmt {
            Stmt::Expr(expr) => Some(self.eval_expr(expr, env)),
            Stmt::Var { name, value, .. } => {
                let val = self.eval_expr(value, env);
                if val.is_signal() {
                    return Some(val);
                }
                trace!("binding {} = {}", name.name, val);
                env.borrow_mut().set(name.name.clone(), val);
                None
            }
            Stmt::Assign { name, value } => {
                let val = self.eval_expr(value, env);
                if val.is_signal() {
                    return Some(val);
                }
                trace!("assigning {} = {}", name.name, val);
                let result = env.borrow_mut().assign(&name.name, val);
                match result {
                    SetResult::Success => None,
                    SetResult::Undefined => Some(invalid_identifier(name)),
                }
            }
            Stmt::Error { .. } => Some(Object::error(format!(
                "cannot evaluate statement at position {}: it failed to parse",
                stmt.token().span.start
            ))),
        }
    }

    pub fn eval_expr(&self, expr: &Expr, env: &Env) -> Object {
        match expr {
            Expr::Ident(ident) => self.eval_ident(ident, env),
            Expr::StringLit { value, .. } => Object::string(value),
            Expr::BoolLit { value, .. } => Object::Bool(*value),
            Expr::Binary { op, lhs, rhs } => self.eval_binary_expr(op, lhs, rhs, env),
            Expr::If {
                cond,
                body,
                alternative,
                ..
            } => self.eval_if_expr(cond, body, alternative.as_ref(), env),
            Expr::FunLit { params, body, .. } => Object::Fun(Rc::new(Function::new(
                Rc::clone(params),
                Rc::clone(body),
                Rc::clone(env),
            ))),
            Expr::Call { callee, args, .. } => self.eval_call_expr(callee, args, env),
        }
    }

    /// Calls `callee` with already evaluated arguments.
    pub fn apply(&self, callee: Object, args: &[Object]) -> Object {
        match callee {
            Object::Fun(function) => {
                if function.arity() != args.len() {
                    return Object::error(format!(
                        "wrong number of arguments: expected {}, got {}",
                        function.arity(),
                        args.len()
                    ));
                }

                let env = Environment::new_enclosed(&function.env);
                {
                    let mut scope = env.borrow_mut();
                    for (param, arg) in function.params.iter().zip(args) {
                        scope.set(param.name.clone(), arg.clone());
                    }
                }

                match self.eval_block(&function.body, &env) {
                    Some(Object::ReturnValue(val)) => *val,
                    Some(val) => val,
                    None => Object::Null,
                }
            }
            Object::Builtin(native_fn) => {
                trace!("calling builtin {}", native_fn.ident);
                native_fn.call(args)
            }
            other => Object::error(format!("invalid function: {}", other.type_name())),
        }
    }

    fn eval_ident(&self, ident: &Ident, env: &Env) -> Object {
        let val = env.borrow().get(&ident.name);
        match val {
            Some(val) => val,
            None => self
                .builtin_vars
                .get(&ident.name)
                .unwrap_or_else(|| invalid_identifier(ident)),
        }
    }

    /// An `if` without a taken branch, or whose branch yields no value, evaluates to `null`.
    fn eval_if_expr(
        &self,
        cond: &Expr,
        body: &Block,
        alternative: Option<&Block>,
        env: &Env,
    ) -> Object {
        let cond = propagate_error!(self.eval_expr(cond, env));

        let result = if cond.is_truthy() {
            self.eval_block(body, env)
        } else {
            match alternative {
                Some(alternative) => self.eval_block(alternative, env),
                None => None,
            }
        };
        result.unwrap_or(Object::Null)
    }

    fn eval_call_expr(&self, callee: &Expr, args: &[Expr], env: &Env) -> Object {
        trace!("call at position {}", callee.token().span.start);
        let callee = propagate_error!(self.eval_expr(callee, env));

        // stops at the first error: later arguments are not evaluated
        let args = args
            .iter()
            .map(|arg| match self.eval_expr(arg, env) {
                Object::Error(message) => Err(Object::Error(message)),
                Object::ReturnValue(val) => Ok(*val),
                val => Ok(val),
            })
            .collect::<Result<Vec<_>, _>>();

        match args {
            Ok(args) => self.apply(callee, &args),
            Err(error) => error,
        }
    }

    /// Dispatches on the runtime types of both operands. Values are never coerced.
    fn eval_binary_expr(&self, op: &Token, lhs: &Expr, rhs: &Expr, env: &Env) -> Object {
        let lhs = propagate_error!(self.eval_expr(lhs, env));
        let rhs = propagate_error!(self.eval_expr(rhs, env));

        match (&lhs, &rhs) {
            (Object::Bool(l), Object::Bool(r)) => match op.kind {
                TokenKind::Eq => Object::Bool(l == r),
                _ => unknown_operator(&lhs, op),
            },
            (Object::Str(l), Object::Str(r)) => match op.kind {
                TokenKind::Add => {
                    let mut concat = String::with_capacity(l.len() + r.len());
                    concat.push_str(l);
                    concat.push_str(r);
                    Object::Str(concat.into())
                }
                TokenKind::Eq => Object::Bool(l == r),
                _ => unknown_operator(&lhs, op),
            },
            _ => Object::error(format!(
                "invalid operation: {} {} {}",
                lhs.type_name(),
                op.literal,
                rhs.type_name()
            )),
        }
    }
}

fn invalid_identifier(ident: &Ident) -> Object {
    Object::error(format!("invalid identifier: {}", ident.name))
}

fn unknown_operator(operand: &Object, op: &Token) -> Object {
    Object::error(format!(
        "unknown operator for {}: {}",
        operand.type_name(),
        op.literal
    ))
}
