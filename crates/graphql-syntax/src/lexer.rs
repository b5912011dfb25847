//! The lexical scanner.
//!
//! Scanning is a pure function of `(body, offset)`: [`next_token_at`] takes
//! a byte offset and returns the next [`Token`] after it, skipping any
//! ignored characters in between. [`Lexer`] is a thin resumable cursor over
//! that function — it only remembers the end offset of the last token it
//! returned, so the parser can also re-scan from the exact end of any
//! previously consumed token.
//!
//! Every lexical error is returned immediately as a positioned
//! [`SyntaxError`]; the scanner never skips bad input or recovers.

use crate::Source;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::token::Token;
use crate::token::TokenKind;
use std::sync::Arc;

/// A resumable cursor over [`next_token_at`].
///
/// `next_token()` continues after the last token returned; `next_token_at()`
/// re-scans from an arbitrary offset. Either way the scan itself depends
/// only on `(body, offset)`, so one lexer per parse is all the state there
/// is.
pub struct Lexer {
    source: Arc<Source>,
    prev_position: usize,
}

impl Lexer {
    pub fn new(source: Arc<Source>) -> Self {
        Self {
            source,
            prev_position: 0,
        }
    }

    /// Returns the next token after the last one returned.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.next_token_at(self.prev_position)
    }

    /// Scans the next token starting exactly at `position`.
    pub fn next_token_at(&mut self, position: usize) -> Result<Token, SyntaxError> {
        let token = next_token_at(&self.source, position)?;
        self.prev_position = token.end;
        Ok(token)
    }
}

/// Scans the next token in `source` at or after `position`.
///
/// `position` is a 0-based byte offset and must lie on a `char` boundary
/// (offsets produced by this crate always do). Ignored characters —
/// whitespace, commas, and `#` comments — are skipped first; at end of input
/// an `Eof` token with `start == end` is returned.
pub fn next_token_at(source: &Arc<Source>, position: usize) -> Result<Token, SyntaxError> {
    let body = source.body();
    let pos = position_after_ignored(body, position.min(body.len()));

    if pos >= body.len() {
        return Ok(Token::new(TokenKind::Eof, pos, pos));
    }

    let bytes = body.as_bytes();
    match bytes[pos] {
        b'!' => Ok(Token::new(TokenKind::Bang, pos, pos + 1)),
        b'$' => Ok(Token::new(TokenKind::Dollar, pos, pos + 1)),
        b'(' => Ok(Token::new(TokenKind::ParenOpen, pos, pos + 1)),
        b')' => Ok(Token::new(TokenKind::ParenClose, pos, pos + 1)),
        b':' => Ok(Token::new(TokenKind::Colon, pos, pos + 1)),
        b'=' => Ok(Token::new(TokenKind::Equals, pos, pos + 1)),
        b'@' => Ok(Token::new(TokenKind::At, pos, pos + 1)),
        b'[' => Ok(Token::new(TokenKind::BracketOpen, pos, pos + 1)),
        b']' => Ok(Token::new(TokenKind::BracketClose, pos, pos + 1)),
        b'{' => Ok(Token::new(TokenKind::BraceOpen, pos, pos + 1)),
        b'|' => Ok(Token::new(TokenKind::Pipe, pos, pos + 1)),
        b'}' => Ok(Token::new(TokenKind::BraceClose, pos, pos + 1)),
        b'.' => {
            // A spread requires three consecutive dots; anything less is an
            // unexpected character at the first dot.
            if bytes[pos..].starts_with(b"...") {
                Ok(Token::new(TokenKind::Spread, pos, pos + 3))
            } else {
                Err(unexpected_character(source, pos, '.'))
            }
        }
        b'_' | b'A'..=b'Z' | b'a'..=b'z' => Ok(read_name(body, pos)),
        b'-' | b'0'..=b'9' => read_number(source, pos),
        b'"' => read_string(source, pos),
        _ => {
            let found = char_at(body, pos);
            Err(unexpected_character(source, pos, found))
        }
    }
}

// =============================================================================
// Ignored characters
// =============================================================================

/// Advances past whitespace, commas, and comments, returning the offset of
/// the first lexable character (or the body length).
///
/// Ignored characters are: space, comma, no-break space (U+00A0), line and
/// paragraph separators (U+2028, U+2029), and the control range
/// U+0009..=U+000D (tab through carriage return).
fn position_after_ignored(body: &str, start: usize) -> usize {
    let bytes = body.as_bytes();
    let mut pos = start;
    while pos < bytes.len() {
        match bytes[pos] {
            b' ' | b',' | 0x09..=0x0D => pos += 1,
            b'#' => pos = position_after_comment(body, pos + 1),
            // U+00A0 NO-BREAK SPACE
            0xC2 if bytes.get(pos + 1) == Some(&0xA0) => pos += 2,
            0xE2 if is_line_or_paragraph_separator(bytes, pos) => pos += 3,
            _ => break,
        }
    }
    pos
}

/// Scans past a `#` comment body, returning the offset of its terminating
/// line terminator (which the caller then skips as whitespace) or the body
/// length when the comment runs to end of input.
///
/// The byte scan looks for `\n`, `\r`, or the 0xE2 lead byte shared by
/// U+2028/U+2029.
fn position_after_comment(body: &str, start: usize) -> usize {
    let bytes = body.as_bytes();
    let mut pos = start;
    while let Some(found) = memchr::memchr3(b'\n', b'\r', 0xE2, &bytes[pos..]) {
        let at = pos + found;
        if bytes[at] != 0xE2 || is_line_or_paragraph_separator(bytes, at) {
            return at;
        }
        pos = at + 1;
    }
    bytes.len()
}

/// Returns `true` if the bytes at `pos` encode U+2028 LINE SEPARATOR or
/// U+2029 PARAGRAPH SEPARATOR (`E2 80 A8` / `E2 80 A9`).
fn is_line_or_paragraph_separator(bytes: &[u8], pos: usize) -> bool {
    bytes.get(pos) == Some(&0xE2)
        && bytes.get(pos + 1) == Some(&0x80)
        && matches!(bytes.get(pos + 2).copied(), Some(0xA8 | 0xA9))
}

// =============================================================================
// Names
// =============================================================================

/// Reads a `[_A-Za-z][_0-9A-Za-z]*` name starting at `pos`.
fn read_name(body: &str, pos: usize) -> Token {
    let bytes = body.as_bytes();
    let mut end = pos + 1;
    while end < bytes.len() && matches!(bytes[end], b'_' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
    {
        end += 1;
    }
    Token::with_value(TokenKind::Name, pos, end, &body[pos..end])
}

// =============================================================================
// Numbers
// =============================================================================

/// Reads an int or float literal starting at `pos`.
///
/// Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? (e -? [0-9]+)?`. A digit
/// following a leading `0` is an error, as are a fraction or exponent with
/// no digits. Presence of a fraction or exponent makes the token a `Float`;
/// otherwise it is an `Int`. The value is the raw slice text.
fn read_number(source: &Arc<Source>, start: usize) -> Result<Token, SyntaxError> {
    let body = source.body();
    let bytes = body.as_bytes();
    let mut pos = start;
    let mut is_float = false;

    if bytes[pos] == b'-' {
        pos += 1;
    }

    match bytes.get(pos).copied() {
        Some(b'0') => {
            pos += 1;
            if matches!(bytes.get(pos).copied(), Some(b'0'..=b'9')) {
                return Err(invalid_number(source, pos));
            }
        }
        Some(b'1'..=b'9') => {
            pos += 1;
            while matches!(bytes.get(pos).copied(), Some(b'0'..=b'9')) {
                pos += 1;
            }
        }
        _ => return Err(invalid_number(source, pos)),
    }

    if bytes.get(pos) == Some(&b'.') {
        is_float = true;
        pos += 1;
        if !matches!(bytes.get(pos).copied(), Some(b'0'..=b'9')) {
            return Err(invalid_number(source, pos));
        }
        while matches!(bytes.get(pos).copied(), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    if bytes.get(pos) == Some(&b'e') {
        is_float = true;
        pos += 1;
        if bytes.get(pos) == Some(&b'-') {
            pos += 1;
        }
        if !matches!(bytes.get(pos).copied(), Some(b'0'..=b'9')) {
            return Err(invalid_number(source, pos));
        }
        while matches!(bytes.get(pos).copied(), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    let kind = if is_float {
        TokenKind::Float
    } else {
        TokenKind::Int
    };
    Ok(Token::with_value(kind, start, pos, &body[start..pos]))
}

// =============================================================================
// Strings
// =============================================================================

/// Reads a double-quoted string literal starting at `pos`, decoding escape
/// sequences into the token value.
///
/// Content runs until the closing quote. A raw line terminator (LF, CR,
/// U+2028, U+2029) or end of input before the closing quote is an
/// "Unterminated string" error at the offset where scanning stopped.
/// Recognized escapes: `\" \/ \\ \b \f \n \r \t` and `\uXXXX` with exactly
/// four hex digits.
fn read_string(source: &Arc<Source>, start: usize) -> Result<Token, SyntaxError> {
    let body = source.body();
    let bytes = body.as_bytes();
    let mut pos = start + 1;
    let mut chunk_start = pos;
    let mut value = String::new();

    loop {
        match bytes.get(pos).copied() {
            Some(b'"') => break,
            None | Some(b'\n') | Some(b'\r') => {
                return Err(unterminated_string(source, pos));
            }
            Some(0xE2) if is_line_or_paragraph_separator(bytes, pos) => {
                return Err(unterminated_string(source, pos));
            }
            Some(b'\\') => {
                value.push_str(&body[chunk_start..pos]);
                let escape_pos = pos + 1;
                match bytes.get(escape_pos).copied() {
                    Some(b'"') => value.push('"'),
                    Some(b'/') => value.push('/'),
                    Some(b'\\') => value.push('\\'),
                    Some(b'b') => value.push('\u{0008}'),
                    Some(b'f') => value.push('\u{000C}'),
                    Some(b'n') => value.push('\n'),
                    Some(b'r') => value.push('\r'),
                    Some(b't') => value.push('\t'),
                    Some(b'u') => {
                        match decode_unicode_escape(bytes, escape_pos + 1) {
                            Some(decoded) => value.push(decoded),
                            None => return Err(bad_escape(source, escape_pos)),
                        }
                        pos += 4;
                    }
                    _ => return Err(bad_escape(source, escape_pos)),
                }
                pos += 2;
                chunk_start = pos;
            }
            Some(_) => pos += 1,
        }
    }

    value.push_str(&body[chunk_start..pos]);
    Ok(Token::with_value(TokenKind::String, start, pos + 1, value))
}

/// Decodes the four hex digits of a `\uXXXX` escape starting at `pos`.
///
/// Returns `None` if fewer than four bytes remain, any of them is not a hex
/// digit, or the code point is not a valid `char` (surrogate range).
fn decode_unicode_escape(bytes: &[u8], pos: usize) -> Option<char> {
    let hex = bytes.get(pos..pos + 4)?;
    let mut code_point: u32 = 0;
    for &byte in hex {
        let digit = (byte as char).to_digit(16)?;
        code_point = (code_point << 4) | digit;
    }
    char::from_u32(code_point)
}

// =============================================================================
// Error constructors
// =============================================================================

fn unexpected_character(source: &Arc<Source>, position: usize, found: char) -> SyntaxError {
    SyntaxError::new(
        Arc::clone(source),
        position,
        format!("Unexpected character \"{found}\""),
        SyntaxErrorKind::UnexpectedCharacter { found },
    )
}

fn invalid_number(source: &Arc<Source>, position: usize) -> SyntaxError {
    SyntaxError::new(
        Arc::clone(source),
        position,
        "Invalid number",
        SyntaxErrorKind::InvalidNumber,
    )
}

fn unterminated_string(source: &Arc<Source>, position: usize) -> SyntaxError {
    SyntaxError::new(
        Arc::clone(source),
        position,
        "Unterminated string",
        SyntaxErrorKind::UnterminatedString,
    )
}

fn bad_escape(source: &Arc<Source>, position: usize) -> SyntaxError {
    SyntaxError::new(
        Arc::clone(source),
        position,
        "Bad character escape sequence",
        SyntaxErrorKind::BadEscapeSequence,
    )
}

/// Returns the `char` starting at byte offset `pos`.
fn char_at(body: &str, pos: usize) -> char {
    match body[pos..].chars().next() {
        Some(ch) => ch,
        // pos < body.len() and on a char boundary, per the caller.
        None => unreachable!("offset {pos} is past the end of the source body"),
    }
}
