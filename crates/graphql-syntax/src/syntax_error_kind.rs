/// Categorizes syntax errors for programmatic handling.
///
/// Each variant carries the minimal structured data needed for tooling to
/// pattern-match on error types without parsing message strings. The
/// human-readable message lives in [`SyntaxError`](crate::SyntaxError).
///
/// The first four variants are lexical (raised while scanning a single
/// token); the rest are syntactic (raised while matching tokens against the
/// grammar). Both families propagate identically: the first error aborts the
/// whole parse.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// A character that cannot begin any token.
    ///
    /// Also covers an incomplete spread: `..` without a third `.` fails on
    /// the first dot.
    #[error("unexpected character `{found}`")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
    },

    /// A numeric literal that violates the number grammar: a digit after a
    /// leading `0`, a fraction or exponent with no digits, or a lone `-`.
    #[error("invalid number")]
    InvalidNumber,

    /// A string literal that reached end of input or an unescaped line
    /// terminator before its closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// A `\` escape inside a string that is not one of the recognized
    /// single-character escapes or a well-formed 4-digit `\uXXXX` escape.
    #[error("bad escape sequence")]
    BadEscapeSequence,

    /// The grammar required one specific token kind and found another.
    #[error("unexpected token: expected {expected}, found `{found}`")]
    UnexpectedToken {
        /// Description of the expected token kind (e.g. `"Name"`, `":"`).
        expected: String,
        /// Description of what was found (e.g. `"}"` or `Name "foo"`).
        found: String,
    },

    /// The grammar required a specific keyword (a Name token with exact
    /// text, e.g. `fragment` or `on`) and found something else.
    #[error("expected keyword `{keyword}`")]
    ExpectedKeyword {
        /// The required keyword text.
        keyword: String,
        /// Description of what was found.
        found: String,
    },

    /// No grammar alternative matched at a dispatch point (e.g. a token that
    /// can start neither a definition nor a value).
    #[error("unexpected syntax: `{found}`")]
    UnexpectedSyntax {
        /// Description of the unexpected token.
        found: String,
    },

    /// A field name repeated within a single input object literal.
    #[error("duplicate input object field `{name}`")]
    DuplicateObjectField {
        /// The repeated field name.
        name: String,
    },

    /// A name with special grammatical meaning used where it is not allowed.
    ///
    /// `on` introduces type conditions, so a fragment named `on` could never
    /// be spread; the parser rejects the definition outright.
    #[error("reserved name: `{name}`")]
    ReservedName {
        /// The reserved name that was used.
        name: String,
    },
}

impl SyntaxErrorKind {
    /// Returns `true` if this error was raised by the lexer while scanning a
    /// single token, `false` if it was raised by the parser while matching
    /// the grammar.
    pub fn is_lexical(&self) -> bool {
        match self {
            SyntaxErrorKind::UnexpectedCharacter { .. }
            | SyntaxErrorKind::InvalidNumber
            | SyntaxErrorKind::UnterminatedString
            | SyntaxErrorKind::BadEscapeSequence => true,

            SyntaxErrorKind::UnexpectedToken { .. }
            | SyntaxErrorKind::ExpectedKeyword { .. }
            | SyntaxErrorKind::UnexpectedSyntax { .. }
            | SyntaxErrorKind::DuplicateObjectField { .. }
            | SyntaxErrorKind::ReservedName { .. } => false,
        }
    }
}
