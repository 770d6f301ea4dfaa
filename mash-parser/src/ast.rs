use crate::lexer::Token;
use std::fmt;
use std::rc::Rc;

/// Program entry: the statements of one parsed input.
#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub token: Token,
}

/// A braced statement list. Does not introduce a scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The `{` token.
    pub token: Token,
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `var x = value;`
    Var {
        token: Token,
        name: Ident,
        value: Expr,
    },
    /// `x = value;`, rebinds an existing variable.
    Assign { name: Ident, value: Expr },
    /// An expression used as a statement.
    Expr(Expr),
    /// A statement that failed to parse. `token` is where the statement started.
    Error { token: Token },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Ident),
    StringLit {
        token: Token,
        value: String,
    },
    BoolLit {
        token: Token,
        value: bool,
    },
    /// A binary expression (e.g. `a + b`).
    Binary {
        op: Token,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `if (cond) { .. } else { .. }`. Produces a value.
    If {
        token: Token,
        cond: Box<Expr>,
        body: Block,
        alternative: Option<Block>,
    },
    /// `fun (a, b) { .. }`. Parameters and body are shared with the function values created from it.
    FunLit {
        token: Token,
        params: Rc<Vec<Ident>>,
        body: Rc<Block>,
    },
    /// `callee(args..)`.
    Call {
        /// The `(` token.
        token: Token,
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

impl Stmt {
    /// Returns the token the statement starts with.
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Var { token, .. } => token,
            Stmt::Assign { name, .. } => &name.token,
            Stmt::Expr(expr) => expr.token(),
            Stmt::Error { token } => token,
        }
    }
}

impl Expr {
    /// Returns the token the expression originated from.
    pub fn token(&self) -> &Token {
        match self {
            Expr::Ident(ident) => &ident.token,
            Expr::StringLit { token, .. }
            | Expr::BoolLit { token, .. }
            | Expr::If { token, .. }
            | Expr::FunLit { token, .. }
            | Expr::Call { token, .. } => token,
            Expr::Binary { op, .. } => op,
        }
    }
}

/// Writes `items` separated by `sep`.
fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        join(f, &self.stmts, " ")
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stmts.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        join(f, &self.stmts, " ")?;
        f.write_str(" }")
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Var { name, value, .. } => write!(f, "var {} = {};", name, value),
            Stmt::Assign { name, value } => write!(f, "{} = {};", name, value),
            Stmt::Expr(expr) => write!(f, "{};", expr),
            Stmt::Error { .. } => f.write_str("<error>;"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(ident) => write!(f, "{}", ident),
            Expr::StringLit { value, .. } => write!(f, "\"{}\"", value),
            Expr::BoolLit { value, .. } => write!(f, "{}", value),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op.literal, rhs),
            Expr::If {
                cond,
                body,
                alternative,
                ..
            } => {
                write!(f, "if ({}) {}", cond, body)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Expr::FunLit { params, body, .. } => {
                f.write_str("fun(")?;
                join(f, params.as_slice(), ", ")?;
                write!(f, ") {}", body)
            }
            Expr::Call { callee, args, .. } => {
                write!(f, "{}(", callee)?;
                join(f, args, ", ")?;
                f.write_str(")")
            }
        }
    }
}
