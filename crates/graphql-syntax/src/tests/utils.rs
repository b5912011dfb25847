//! Shared test helpers.

use crate::Lexer;
use crate::ParseOptions;
use crate::Source;
use crate::SyntaxError;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::token::Token;
use crate::token::TokenKind;
use std::sync::Arc;

/// Parses with locations disabled, panicking on error. Most structural
/// assertions don't care about spans, and `loc: None` keeps expected nodes
/// easy to write.
pub fn parse_no_loc(body: &str) -> Document {
    crate::parse(
        Source::new(body),
        ParseOptions::default().without_locations(),
    )
    .unwrap_or_else(|error| panic!("parse of {body:?} failed: {error}"))
}

/// Parses with default options, panicking on error.
pub fn parse_with_loc(body: &str) -> Document {
    crate::parse(Source::new(body), ParseOptions::default())
        .unwrap_or_else(|error| panic!("parse of {body:?} failed: {error}"))
}

/// Parses expecting a failure, returning the error.
pub fn parse_err(body: &str) -> SyntaxError {
    match crate::parse(Source::new(body), ParseOptions::default()) {
        Ok(_) => panic!("expected a syntax error for {body:?}"),
        Err(error) => error,
    }
}

/// Lexes the whole body into tokens, including the final `Eof` token,
/// panicking on a lexical error.
pub fn lex_all(body: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(Arc::new(Source::new(body)));
    let mut tokens = Vec::new();
    loop {
        let token = lexer
            .next_token()
            .unwrap_or_else(|error| panic!("lexing of {body:?} failed: {error}"));
        let at_end = token.kind == TokenKind::Eof;
        tokens.push(token);
        if at_end {
            return tokens;
        }
    }
}

/// Lexes the whole body, returning just the token kinds.
pub fn lex_kinds(body: &str) -> Vec<TokenKind> {
    lex_all(body).into_iter().map(|token| token.kind).collect()
}

/// Lexes until the first lexical error, panicking if none occurs.
pub fn lex_err(body: &str) -> SyntaxError {
    let mut lexer = Lexer::new(Arc::new(Source::new(body)));
    loop {
        match lexer.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                panic!("expected a lexical error for {body:?}")
            }
            Ok(_) => continue,
            Err(error) => return error,
        }
    }
}

/// Returns the document's only definition as an operation.
pub fn only_operation(document: &Document) -> &OperationDefinition {
    assert_eq!(document.definitions.len(), 1);
    match &document.definitions[0] {
        crate::ast::Definition::Operation(operation) => operation,
        other => panic!("expected an operation definition, got {other:?}"),
    }
}

/// Returns the document's only definition as a fragment definition.
pub fn only_fragment(document: &Document) -> &FragmentDefinition {
    assert_eq!(document.definitions.len(), 1);
    match &document.definitions[0] {
        crate::ast::Definition::Fragment(fragment) => fragment,
        other => panic!("expected a fragment definition, got {other:?}"),
    }
}

/// Returns the first selection of a selection set as a field.
pub fn first_field(selection_set: &SelectionSet) -> &Field {
    match &selection_set.selections[0] {
        Selection::Field(field) => field,
        other => panic!("expected a field selection, got {other:?}"),
    }
}
