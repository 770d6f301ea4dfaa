//! Completeness pass: finds statements that failed to parse.

use mash_parser::ast::{Root, Stmt};
use mash_parser::lexer::Token;
use mash_parser::visitor::{walk_root, walk_stmt, Visitor};
use thiserror::Error;

/// A program containing [`Stmt::Error`] nodes. It must not be evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("incomplete program: {} statement(s) failed to parse", .positions.len())]
pub struct Incomplete {
    /// Start offset of every failed statement, in source order.
    pub positions: Vec<usize>,
}

/// Collects every [`Stmt::Error`] in a tree, including those nested in blocks.
#[derive(Default)]
pub struct Validator<'ast> {
    incomplete: Vec<&'ast Token>,
}

impl<'ast> Validator<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate_root(mut self, root: &'ast Root) -> Result<(), Incomplete> {
        walk_root(&mut self, root);

        if self.incomplete.is_empty() {
            Ok(())
        } else {
            Err(Incomplete {
                positions: self
                    .incomplete
                    .iter()
                    .map(|token| token.span.start)
                    .collect(),
            })
        }
    }
}

impl<'ast> Visitor<'ast> for Validator<'ast> {
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        if let Stmt::Error { .. } = stmt {
            self.incomplete.push(stmt.token());
        }
        walk_stmt(self, stmt);
    }
}

/// Checks that `root` contains no statement that failed to parse.
pub fn validate(root: &Root) -> Result<(), Incomplete> {
    Validator::new().validate_root(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mash_parser::parser::Parser;

    fn check(source: &str) -> Result<(), Incomplete> {
        let source = source.into();
        let root = Parser::new(&source).parse_program();
        validate(&root)
    }

    #[test]
    fn test_complete_program() {
        assert_eq!(check(r#"var f = fun(a) { if (a) { "x" } else { "y" } }; f(true)"#), Ok(()));
        assert_eq!(check(""), Ok(()));
    }

    #[test]
    fn test_top_level_error() {
        let err = check(r#"var = "a"; x"#).unwrap_err();
        assert_eq!(err.positions, vec![0]);
        assert_eq!(
            err.to_string(),
            "incomplete program: 1 statement(s) failed to parse"
        );
    }

    #[test]
    fn test_nested_errors() {
        // both failures sit inside function bodies
        let err = check("var f = fun() { var = a; b }; g(fun() { ) })").unwrap_err();
        assert_eq!(err.positions, vec![16, 40]);
    }
}
