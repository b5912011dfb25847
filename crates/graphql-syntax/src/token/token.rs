use crate::token::TokenKind;
use serde::Deserialize;
use serde::Serialize;

/// A classified span of source text.
///
/// `start` and `end` are 0-based byte offsets into the source body, with
/// `start <= end`. The `value` is `Some` only for `Name`, `Int`, `Float`,
/// and `String` tokens; punctuators are fully described by their kind. For
/// string tokens the value is the decoded text (escape sequences resolved),
/// for the rest it is the raw slice of source text.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub value: Option<String>,
}

impl Token {
    /// Creates a token without a value (punctuators, `Eof`).
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            value: None,
        }
    }

    /// Creates a token carrying a decoded value.
    pub fn with_value(kind: TokenKind, start: usize, end: usize, value: impl Into<String>) -> Self {
        Self {
            kind,
            start,
            end,
            value: Some(value.into()),
        }
    }

    /// Returns the description used in error messages, e.g. `Name "foo"`
    /// for a valued token or `}` for a punctuator.
    pub fn desc(&self) -> String {
        match &self.value {
            Some(value) => format!("{} \"{}\"", self.kind.desc(), value),
            None => self.kind.desc().to_string(),
        }
    }
}
