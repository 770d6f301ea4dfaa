use super::*;
use crate::ast::{Expr, Ident};
use crate::lexer::LOWEST;
use std::rc::Rc;

impl<'a> Parser<'a> {
    /* Expressions */
    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_expr_bp`] with `min_bp = LOWEST`.
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_expr_bp(LOWEST)
    }

    /// Parses an expression whose infix operators all bind tighter than `min_bp`.
    /// On success the current token is the last token of the expression.
    fn parse_expr_bp(&mut self, min_bp: u8) -> ParseResult<Expr> {
        let mut lhs = self.parse_prefix_expr()?;

        while !self.peek_is(TokenKind::Semicolon) && min_bp < self.peek_token.kind.precedence() {
            self.next();
            lhs = self.parse_infix_expr(lhs)?;
        }

        Ok(lhs)
    }

    /// Parses an expression that can start an expression.
    fn parse_prefix_expr(&mut self) -> ParseResult<Expr> {
        match self.current_token.kind {
            TokenKind::Ident => Ok(Expr::Ident(self.current_ident())),
            TokenKind::Str => Ok(Expr::StringLit {
                token: self.current_token.clone(),
                value: self.current_token.literal.clone(),
            }),
            TokenKind::True | TokenKind::False => Ok(Expr::BoolLit {
                token: self.current_token.clone(),
                value: self.current_is(TokenKind::True),
            }),
            TokenKind::OpenParen => self.parse_grouped_expr(),
            TokenKind::Fun => self.parse_fun_lit(),
            TokenKind::If => self.parse_if_expr(),
            kind => Err(SyntaxError::new(
                format!("no parse function for {} found", kind),
                self.current_token.span.clone(),
            )),
        }
    }

    /// Combines `lhs` with the infix operator in the current token.
    fn parse_infix_expr(&mut self, lhs: Expr) -> ParseResult<Expr> {
        match self.current_token.kind {
            TokenKind::Add | TokenKind::Eq => self.parse_binary_expr(lhs),
            TokenKind::OpenParen => self.parse_call_expr(lhs),
            kind => Err(SyntaxError::new(
                format!("no infix parse function for {} found", kind),
                self.current_token.span.clone(),
            )),
        }
    }

    /// `( expr )`
    fn parse_grouped_expr(&mut self) -> ParseResult<Expr> {
        self.next();
        let expr = self.parse_expr()?;
        self.expect_peek(TokenKind::CloseParen)?;
        Ok(expr)
    }

    fn parse_binary_expr(&mut self, lhs: Expr) -> ParseResult<Expr> {
        let op = self.current_token.clone();
        let precedence = op.kind.precedence();
        self.next();
        let rhs = self.parse_expr_bp(precedence)?;

        Ok(Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    /// `callee ( args.. )`. The current token is the `(`.
    fn parse_call_expr(&mut self, callee: Expr) -> ParseResult<Expr> {
        let token = self.current_token.clone();
        let mut args = Vec::new();

        if !self.eat_peek(TokenKind::CloseParen) {
            self.next();
            args.push(self.parse_expr()?);
            while self.eat_peek(TokenKind::Comma) {
                self.next();
                args.push(self.parse_expr()?);
            }
            self.expect_peek(TokenKind::CloseParen)?;
        }

        Ok(Expr::Call {
            token,
            callee: Box::new(callee),
            args,
        })
    }

    /// `fun ( params.. ) { body }`
    fn parse_fun_lit(&mut self) -> ParseResult<Expr> {
        let token = self.current_token.clone();
        self.expect_peek(TokenKind::OpenParen)?;
        let params = self.parse_fun_params()?;
        self.expect_peek(TokenKind::OpenBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::FunLit {
            token,
            params: Rc::new(params),
            body: Rc::new(body),
        })
    }

    /// Parses comma separated parameter identifiers up to and including the `)`.
    fn parse_fun_params(&mut self) -> ParseResult<Vec<Ident>> {
        let mut params = Vec::new();

        if !self.eat_peek(TokenKind::CloseParen) {
            self.expect_peek(TokenKind::Ident)?;
            params.push(self.current_ident());
            while self.eat_peek(TokenKind::Comma) {
                self.expect_peek(TokenKind::Ident)?;
                params.push(self.current_ident());
            }
            self.expect_peek(TokenKind::CloseParen)?;
        }

        Ok(params)
    }

    /// `if ( cond ) { body } [else { alternative }]`
    fn parse_if_expr(&mut self) -> ParseResult<Expr> {
        let token = self.current_token.clone();
        self.expect_peek(TokenKind::OpenParen)?;
        self.next();
        let cond = self.parse_expr()?;
        self.expect_peek(TokenKind::CloseParen)?;
        self.expect_peek(TokenKind::OpenBrace)?;
        let body = self.parse_block()?;

        let alternative = if self.eat_peek(TokenKind::Else) {
            self.expect_peek(TokenKind::OpenBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::If {
            token,
            cond: Box::new(cond),
            body,
            alternative,
        })
    }
}
