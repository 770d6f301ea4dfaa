use logos::{Lexer, Logos};
use std::{fmt, ops::Range};

/// Lowest binding power. Any token that is not an infix operator has this precedence.
pub const LOWEST: u8 = 1;

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // literals
    #[regex("[a-zA-Z]+")]
    Ident,
    #[token("\"", scan_string)]
    Str,

    // operators
    #[token("=")]
    Assign,
    #[token("+")]
    Add,
    #[token("==")]
    Eq,

    // delimiters
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // keywords
    #[token("fun")]
    Fun,
    #[token("var")]
    Var,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,

    // misc
    #[regex(r"[ \t\n\r]+", logos::skip)]
    #[error]
    Illegal,

    /// Only generated by [`Scanner`] when the underlying lexer is exhausted.
    Eof,
}

/// Consumes a string literal up to and including the closing quote.
/// An unterminated string runs to the end of input.
fn scan_string(lex: &mut Lexer<TokenKind>) -> bool {
    let remainder = lex.remainder();
    let len = match remainder.find('"') {
        Some(end) => end + 1,
        None => remainder.len(),
    };
    lex.bump(len);
    true
}

impl TokenKind {
    /// Returns the infix binding power of the token kind.
    /// `==` binds looser than `+`, and call application via `(` binds tightest.
    pub fn precedence(self) -> u8 {
        match self {
            TokenKind::Eq => 2,
            TokenKind::Add => 3,
            TokenKind::OpenParen => 4,
            _ => LOWEST,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Str => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Add => "+",
            TokenKind::Eq => "==",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::Fun => "fun",
            TokenKind::Var => "var",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
        };
        f.write_str(s)
    }
}

/// A lexical unit: its kind, the literal text and where it was found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    fn eof(at: usize) -> Self {
        Self::new(TokenKind::Eof, "", at..at)
    }
}

/// Turns a line of text into tokens, one at a time.
pub struct Scanner<'a> {
    lexer: Lexer<'a, TokenKind>,
    /// Set once [`Iterator::next`] has yielded [`TokenKind::Eof`].
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: TokenKind::lexer(input),
            finished: false,
        }
    }

    /// Returns the next token. Once the input is exhausted, every call returns a [`TokenKind::Eof`] token.
    pub fn next_token(&mut self) -> Token {
        let kind = match self.lexer.next() {
            Some(kind) => kind,
            None => return Token::eof(self.lexer.source().len()),
        };

        let slice = self.lexer.slice();
        let literal = match kind {
            TokenKind::Str => {
                // strip the opening quote, and the closing one if the string is terminated
                let body = &slice[1..];
                body.strip_suffix('"').unwrap_or(body)
            }
            _ => slice,
        };
        Token::new(kind, literal, self.lexer.span())
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    /// Yields every token up to and including the first [`TokenKind::Eof`].
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Scanner::new(input).map(|token| token.kind).collect()
    }

    #[test]
    fn test_var_statement() {
        let tokens: Vec<Token> = Scanner::new(r#"var x = "ab" + "cd";"#).collect();
        let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Var,
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::Str,
                TokenKind::Add,
                TokenKind::Str,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[1].literal, "x");
        assert_eq!(tokens[3].literal, "ab");
        assert_eq!(tokens[5].literal, "cd");
        assert_eq!(tokens[7].literal, "");
    }

    #[test]
    fn test_equals_longest_match() {
        assert_eq!(
            kinds("a == b = c"),
            vec![
                TokenKind::Ident,
                TokenKind::Eq,
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("==="),
            vec![TokenKind::Eq, TokenKind::Assign, TokenKind::Eof]
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("fun var true false if else"),
            vec![
                TokenKind::Fun,
                TokenKind::Var,
                TokenKind::True,
                TokenKind::False,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::Eof,
            ]
        );
        // keywords are only reserved as whole words
        assert_eq!(
            kinds("funny variable iff"),
            vec![
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_delimiters_and_whitespace() {
        assert_eq!(
            kinds("f(a,\tb)\r\n{ }"),
            vec![
                TokenKind::Ident,
                TokenKind::OpenParen,
                TokenKind::Ident,
                TokenKind::Comma,
                TokenKind::Ident,
                TokenKind::CloseParen,
                TokenKind::OpenBrace,
                TokenKind::CloseBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_illegal_characters() {
        let tokens: Vec<Token> = Scanner::new("a1-").collect();
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "1", 1..2));
        assert_eq!(tokens[2], Token::new(TokenKind::Illegal, "-", 2..3));
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_unterminated_string() {
        let tokens: Vec<Token> = Scanner::new(r#"var s = "oops;"#).collect();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[3].kind, TokenKind::Str);
        assert_eq!(tokens[3].literal, "oops;");
        assert_eq!(tokens[4].kind, TokenKind::Eof);
    }

    #[test]
    fn test_string_keeps_contents_verbatim() {
        let tokens: Vec<Token> = Scanner::new(r#""a + b; var""""#).collect();
        assert_eq!(tokens[0].literal, "a + b; var");
        assert_eq!(tokens[1].kind, TokenKind::Str);
        assert_eq!(tokens[1].literal, "");
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token().kind, TokenKind::Ident);
        for _ in 0..3 {
            assert_eq!(scanner.next_token(), Token::new(TokenKind::Eof, "", 1..1));
        }
    }

    #[test]
    fn test_precedence() {
        assert_eq!(TokenKind::Semicolon.precedence(), LOWEST);
        assert!(TokenKind::Eq.precedence() < TokenKind::Add.precedence());
        assert!(TokenKind::Add.precedence() < TokenKind::OpenParen.precedence());
    }
}
