//! A lexer and recursive descent parser for the GraphQL query language.
//!
//! This crate turns GraphQL query text into an AST with source-location
//! tracking, for consumption by downstream validators and executors. It
//! covers executable documents only — operations, fragments, selections,
//! values, directives, and type references — not schema definitions.
//!
//! # Example
//!
//! ```
//! use graphql_syntax::ast;
//! use graphql_syntax::parse_document;
//!
//! let document = parse_document("query Hero { hero { name } }")?;
//!
//! let ast::Definition::Operation(operation) = &document.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! assert_eq!(operation.operation, ast::OperationKind::Query);
//! assert_eq!(operation.name.as_ref().map(|n| n.value.as_str()), Some("Hero"));
//! # Ok::<(), graphql_syntax::SyntaxError>(())
//! ```
//!
//! # Errors
//!
//! The first lexical or syntactic error aborts the parse: [`parse`] returns
//! a [`SyntaxError`] carrying the source, the byte offset where scanning
//! stopped, a message, and a structured [`SyntaxErrorKind`]. There is no
//! error recovery and no partial document.

pub mod ast;
mod lexer;
mod location;
mod parse_options;
mod parser;
mod source;
mod syntax_error;
mod syntax_error_kind;
pub mod token;

pub use lexer::Lexer;
pub use lexer::next_token_at;
pub use location::Location;
pub use parse_options::ParseOptions;
pub use parser::Parser;
pub use parser::parse;
pub use parser::parse_document;
pub use source::Source;
pub use syntax_error::SyntaxError;
pub use syntax_error_kind::SyntaxErrorKind;

#[cfg(test)]
mod tests;
