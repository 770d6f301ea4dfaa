//! Program text and the parse diagnostics collected for it.

use std::{cell::RefCell, fmt, ops::Range};

use thiserror::Error;

/// One program (a REPL line or a whole file) together with the diagnostics reported while parsing it.
pub struct Source<'a> {
    pub content: &'a str,
    /// Filled by the parser, in the order problems are found.
    pub errors: ErrorReporter,
}

impl<'a> Source<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            errors: ErrorReporter::new(),
        }
    }

    /// `true` when parsing reported nothing, i.e. the program may be evaluated.
    pub fn has_no_errors(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new(content)
    }
}

/// A parse failure: the message shown to the user and the byte range it points at.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    message: String,
    span: Range<usize>,
}

impl SyntaxError {
    pub fn new(message: impl ToString, span: Range<usize>) -> Self {
        Self {
            message: message.to_string(),
            span,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// Diagnostics of one [`Source`]. Appended to through a shared reference, since the parser only borrows
/// the `Source`.
pub struct ErrorReporter {
    errors: RefCell<Vec<SyntaxError>>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            errors: RefCell::new(Vec::new()),
        }
    }

    pub fn add_error(&self, error: SyntaxError) {
        self.errors.borrow_mut().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    /// Messages only, without positions. This is what the REPL lists under ` parser errors:`.
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .borrow()
            .iter()
            .map(|error| error.message().to_string())
            .collect()
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.errors.borrow();
        for error in errors.iter() {
            writeln!(
                f,
                "ERROR: {message} at position {position}",
                message = error.message(),
                position = error.span().start
            )?;
        }

        Ok(())
    }
}
