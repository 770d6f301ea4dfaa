use crate::ast::Root;
use crate::lexer::{Scanner, Token, TokenKind};
use log::debug;
use mash_source::{Source, SyntaxError};
use std::mem;

mod expr;
mod stmt;

/// Result of a sub-parse. The error is recorded by the closest statement list, which substitutes a
/// [`crate::ast::Stmt::Error`] for the failed statement.
pub type ParseResult<T> = Result<T, SyntaxError>;

pub struct Parser<'a> {
    /// The token being parsed.
    current_token: Token,
    /// Cached token for peeking.
    peek_token: Token,
    scanner: Scanner<'a>,
    /// Source code
    source: &'a Source<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a Source<'a>) -> Self {
        let mut scanner = Scanner::new(source.content);
        let current_token = scanner.next_token();
        let peek_token = scanner.next_token();
        Self {
            current_token,
            peek_token,
            scanner,
            source,
        }
    }

    /// Parses the whole input.
    /// Statements that fail to parse are kept as [`crate::ast::Stmt::Error`] and their diagnostics are
    /// accumulated in the [`Source`]; parsing resumes after the failed statement.
    pub fn parse_program(&mut self) -> Root {
        let mut stmts = Vec::new();
        while !self.current_is(TokenKind::Eof) {
            stmts.push(self.parse_stmt_or_recover());
            self.next();
        }
        Root { stmts }
    }

    /// Returns the messages of every diagnostic reported so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.source.errors.messages()
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    fn next(&mut self) {
        let peek = mem::replace(&mut self.peek_token, self.scanner.next_token());
        self.current_token = peek;
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the next token is of kind `kind`. Otherwise returns an "expected" error and does not advance.
    fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_is(kind) {
            self.next();
            Ok(())
        } else {
            Err(self.unexpected_peek(kind))
        }
    }

    /// Eats the next token if it is of kind `kind`.
    fn eat_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next();
            true
        } else {
            false
        }
    }

    fn unexpected_peek(&self, expected: TokenKind) -> SyntaxError {
        SyntaxError::new(
            format!(
                "expected next token to be {}, got {} instead",
                expected, self.peek_token.kind
            ),
            self.peek_token.span.clone(),
        )
    }

    /// Records a diagnostic.
    fn report(&self, error: SyntaxError) {
        debug!("recovering from syntax error: {}", error);
        self.source.errors.add_error(error)
    }

    /// Skips the rest of a failed statement, including any nested `{ .. }`.
    /// Stops on the statement's `;`, or before the end of input or an unmatched `}` (the one closing the
    /// enclosing block).
    fn synchronize(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current_token.kind {
                TokenKind::Eof => return,
                TokenKind::Semicolon if depth == 0 => return,
                TokenKind::OpenBrace => depth += 1,
                TokenKind::CloseBrace => depth = depth.saturating_sub(1),
                _ => {}
            }
            if self.peek_is(TokenKind::Eof) || (depth == 0 && self.peek_is(TokenKind::CloseBrace)) {
                return;
            }
            self.next();
        }
    }
}
