use crate::Source;
use crate::SyntaxErrorKind;
use std::sync::Arc;

/// A positioned syntax error raised by the lexer or the parser.
///
/// Carries the [`Source`] it was raised in, the 0-based byte offset where
/// scanning or parsing stopped, a human-readable message, and a categorized
/// [`SyntaxErrorKind`] for programmatic handling.
///
/// Errors are raised at the point of detection and propagate uncaught to the
/// top-level [`parse`](crate::parse) caller; when an error is returned, no
/// [`Document`](crate::ast::Document) — not even a partial one — exists.
/// Line/column for display can be derived externally from
/// `(source.body(), position)`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Syntax error in {} at {position}: {message}", .src.name())]
pub struct SyntaxError {
    // Named `src` so thiserror does not treat the parsed input as an error
    // cause chain.
    src: Arc<Source>,
    position: usize,
    message: String,
    kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub(crate) fn new(
        source: Arc<Source>,
        position: usize,
        message: impl Into<String>,
        kind: SyntaxErrorKind,
    ) -> Self {
        Self {
            src: source,
            position,
            message: message.into(),
            kind,
        }
    }

    /// Returns the source the error was raised in.
    pub fn source(&self) -> &Arc<Source> {
        &self.src
    }

    /// Returns the 0-based byte offset where the error was detected.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }
}
