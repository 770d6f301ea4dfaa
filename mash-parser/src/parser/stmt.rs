use super::*;
use crate::ast::{Block, Ident, Stmt};

impl<'a> Parser<'a> {
    /// Parses a statement. If it fails, the error is reported, the rest of the statement is skipped
    /// and a [`Stmt::Error`] takes its place.
    pub(crate) fn parse_stmt_or_recover(&mut self) -> Stmt {
        let token = self.current_token.clone();
        match self.parse_stmt() {
            Ok(stmt) => stmt,
            Err(error) => {
                self.report(error);
                self.synchronize();
                Stmt::Error { token }
            }
        }
    }

    /// Parses a statement.
    /// The trailing `;` is optional and eaten if present.
    pub fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        let stmt = match self.current_token.kind {
            TokenKind::Var => self.parse_var_stmt()?,
            TokenKind::Ident if self.peek_is(TokenKind::Assign) => self.parse_assign_stmt()?,
            _ => Stmt::Expr(self.parse_expr()?),
        };
        self.eat_peek(TokenKind::Semicolon);
        Ok(stmt)
    }

    /// Parses a braced block. The current token must be `{`; on success the current token is the closing `}`.
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        let token = self.current_token.clone();
        let mut stmts = Vec::new();
        self.next();

        while !self.current_is(TokenKind::CloseBrace) {
            if self.current_is(TokenKind::Eof) {
                return Err(SyntaxError::new(
                    format!(
                        "expected next token to be {}, got {} instead",
                        TokenKind::CloseBrace,
                        TokenKind::Eof
                    ),
                    self.current_token.span.clone(),
                ));
            }
            stmts.push(self.parse_stmt_or_recover());
            self.next();
        }

        Ok(Block { token, stmts })
    }

    /// `var IDENT = expr`
    fn parse_var_stmt(&mut self) -> ParseResult<Stmt> {
        let token = self.current_token.clone();
        self.expect_peek(TokenKind::Ident)?;
        let name = self.current_ident();
        self.expect_peek(TokenKind::Assign)?;
        self.next();
        let value = self.parse_expr()?;
        Ok(Stmt::Var { token, name, value })
    }

    /// `IDENT = expr`
    fn parse_assign_stmt(&mut self) -> ParseResult<Stmt> {
        let name = self.current_ident();
        self.expect_peek(TokenKind::Assign)?;
        self.next();
        let value = self.parse_expr()?;
        Ok(Stmt::Assign { name, value })
    }

    /// Builds an [`Ident`] from the current token.
    pub(crate) fn current_ident(&self) -> Ident {
        Ident {
            name: self.current_token.literal.clone(),
            token: self.current_token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn program(source: &str) -> String {
        let source = source.into();
        let ast = Parser::new(&source).parse_program();
        assert!(source.has_no_errors(), "{}", source.errors);
        ast.to_string()
    }

    fn errors(source: &str) -> Vec<String> {
        let source = source.into();
        let mut parser = Parser::new(&source);
        parser.parse_program();
        parser.errors()
    }

    #[test]
    fn test_var_stmt() {
        assert_snapshot!(program(r#"var x = "a" + "b";"#), @r###"var x = ("a" + "b");"###);
        assert_snapshot!(program("var f = fun(a) { a }"), @"var f = fun(a) { a; };");
    }

    #[test]
    fn test_assign_stmt() {
        assert_snapshot!(program("x = y == z"), @"x = (y == z);");
        // an identifier not followed by `=` is an expression statement
        assert_snapshot!(program("x == y"), @"(x == y);");
    }

    #[test]
    fn test_block_does_not_need_semicolons() {
        assert_snapshot!(
            program(r#"if (a) { var b = "c" b } else { }"#),
            @r###"if (a) { var b = "c"; b; } else {};"###
        );
    }

    #[test]
    fn test_var_stmt_errors() {
        assert_eq!(
            errors("var x"),
            vec!["expected next token to be =, got EOF instead"]
        );
        assert_eq!(errors("var x ="), vec!["no parse function for EOF found"]);
    }

    #[test]
    fn test_unterminated_block() {
        assert_eq!(
            errors("fun() { a"),
            vec!["expected next token to be }, got EOF instead"]
        );
    }

    #[test]
    fn test_recovery_inside_block() {
        let source = "fun() { var = a; b }".into();
        let mut parser = Parser::new(&source);
        let ast = parser.parse_program();
        assert_eq!(
            parser.errors(),
            vec!["expected next token to be IDENT, got = instead"]
        );
        assert_eq!(ast.to_string(), "fun() { <error>; b; };");
    }

    #[test]
    fn test_recovery_inside_block_skips_inner_blocks() {
        let source = "fun() { var = fun() { a }; b }".into();
        let mut parser = Parser::new(&source);
        let ast = parser.parse_program();
        assert_eq!(
            parser.errors(),
            vec!["expected next token to be IDENT, got = instead"]
        );
        assert_eq!(ast.to_string(), "fun() { <error>; b; };");

        // without a `;` the failed statement runs up to the `}` of the enclosing block
        let source = "fun() { var = fun() { a } b } c".into();
        let mut parser = Parser::new(&source);
        let ast = parser.parse_program();
        assert_eq!(parser.errors().len(), 1);
        assert_eq!(ast.to_string(), "fun() { <error>; }; c;");
    }
}
