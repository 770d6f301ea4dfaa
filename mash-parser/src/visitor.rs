//! Visitor pattern for AST nodes.

use crate::ast::{Block, Expr, Root, Stmt};

pub trait Visitor<'ast>: Sized {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }
}

pub fn walk_root<'ast>(visitor: &mut impl Visitor<'ast>, root: &'ast Root) {
    for stmt in &root.stmts {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_block<'ast>(visitor: &mut impl Visitor<'ast>, block: &'ast Block) {
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_expr<'ast>(visitor: &mut impl Visitor<'ast>, expr: &'ast Expr) {
    match expr {
        Expr::Ident(_) => {}
        Expr::StringLit { .. } => {}
        Expr::BoolLit { .. } => {}
        Expr::Binary { op: _, lhs, rhs } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
        Expr::If {
            cond,
            body,
            alternative,
            ..
        } => {
            visitor.visit_expr(cond);
            visitor.visit_block(body);
            if let Some(alternative) = alternative {
                visitor.visit_block(alternative);
            }
        }
        Expr::FunLit { body, .. } => visitor.visit_block(body),
        Expr::Call { callee, args, .. } => {
            visitor.visit_expr(callee);
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
    }
}

pub fn walk_stmt<'ast>(visitor: &mut impl Visitor<'ast>, stmt: &'ast Stmt) {
    match stmt {
        Stmt::Var { value, .. } => visitor.visit_expr(value),
        Stmt::Assign { value, .. } => visitor.visit_expr(value),
        Stmt::Expr(expr) => visitor.visit_expr(expr),
        Stmt::Error { .. } => {}
    }
}
