use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// The kind of a lexed token.
///
/// Punctuators and `Eof` are fully described by their kind; `Name`, `Int`,
/// `Float`, and `String` tokens additionally carry a decoded value on the
/// [`Token`](crate::token::Token) itself.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum TokenKind {
    /// End of input. The token's `start` always equals its `end`.
    Eof,
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `{`
    BraceOpen,
    /// `|`
    Pipe,
    /// `}`
    BraceClose,
    /// `[_A-Za-z][_0-9A-Za-z]*`
    Name,
    /// An integer literal; the token value holds the raw digits text.
    Int,
    /// A float literal; the token value holds the raw text.
    Float,
    /// A string literal; the token value holds the decoded text.
    String,
}

impl TokenKind {
    /// Returns the description used in error messages: the punctuator text
    /// itself, or a capitalized kind name for valued tokens.
    pub fn desc(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Bang => "!",
            TokenKind::Dollar => "$",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::Spread => "...",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::At => "@",
            TokenKind::BracketOpen => "[",
            TokenKind::BracketClose => "]",
            TokenKind::BraceOpen => "{",
            TokenKind::Pipe => "|",
            TokenKind::BraceClose => "}",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.desc())
    }
}
