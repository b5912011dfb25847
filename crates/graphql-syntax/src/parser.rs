//! Recursive descent parser for GraphQL query-language documents.
//!
//! One token of lookahead drives every choice point. The parser owns a
//! [`Lexer`] cursor and two pieces of state: the current [`Token`] and the
//! end offset of the previously consumed token. Lexing always resumes at
//! that exact end offset, and node spans are computed from it — a node's
//! [`Location`] runs from the start of its first token to the end of the
//! last token consumed while parsing it.
//!
//! There is no error recovery: the first lexical or syntactic error aborts
//! the parse and propagates, via `?`, straight out of [`parse`]. No partial
//! document is ever produced.

use crate::Lexer;
use crate::Location;
use crate::ParseOptions;
use crate::Source;
use crate::SyntaxError;
use crate::SyntaxErrorKind;
use crate::ast::Argument;
use crate::ast::ArrayValue;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::EnumValue;
use crate::ast::Field;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::IntValue;
use crate::ast::ListType;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::ObjectField;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::token::Token;
use crate::token::TokenKind;
use smallvec::SmallVec;
use std::sync::Arc;

/// Parses a GraphQL query-language document.
///
/// This is the crate's entry point: it consumes the [`Source`], runs one
/// full parse, and either returns the complete [`Document`] or the first
/// [`SyntaxError`] encountered.
///
/// # Example
///
/// ```
/// use graphql_syntax::{parse, ParseOptions, Source};
///
/// let document = parse(
///     Source::new("{ user { id name } }"),
///     ParseOptions::default(),
/// )?;
/// assert_eq!(document.definitions.len(), 1);
/// # Ok::<(), graphql_syntax::SyntaxError>(())
/// ```
pub fn parse(source: Source, options: ParseOptions) -> Result<Document, SyntaxError> {
    let mut parser = Parser::new(Arc::new(source), options)?;
    parser.parse_document()
}

/// Convenience wrapper around [`parse`]: default-named [`Source`], default
/// [`ParseOptions`].
pub fn parse_document(body: &str) -> Result<Document, SyntaxError> {
    parse(Source::new(body), ParseOptions::default())
}

/// A single-use recursive descent parser.
///
/// One `Parser` is private to one parse invocation; parsing many documents
/// concurrently means one `Parser` (and one [`Lexer`]) each.
pub struct Parser {
    lexer: Lexer,
    source: Arc<Source>,
    options: ParseOptions,
    /// The one token of lookahead.
    token: Token,
    /// End offset of the most recently consumed token; the resume point for
    /// the lexer and the end bound for node spans.
    prev_end: usize,
}

impl Parser {
    /// Creates a parser primed with the document's first token.
    pub fn new(source: Arc<Source>, options: ParseOptions) -> Result<Self, SyntaxError> {
        let mut lexer = Lexer::new(Arc::clone(&source));
        let token = lexer.next_token()?;
        Ok(Self {
            lexer,
            source,
            options,
            token,
            prev_end: 0,
        })
    }

    // =========================================================================
    // Parser primitives
    // =========================================================================

    /// Builds the [`Location`] for a node that started at `start` and ended
    /// with the previously consumed token, honoring the parse options.
    fn loc(&self, start: usize) -> Option<Location> {
        if self.options.no_location {
            None
        } else if self.options.no_source {
            Some(Location::new(start, self.prev_end))
        } else {
            Some(Location::with_source(
                start,
                self.prev_end,
                Arc::clone(&self.source),
            ))
        }
    }

    /// Consumes the current token, resumes the lexer at its end offset, and
    /// returns the consumed token.
    fn advance(&mut self) -> Result<Token, SyntaxError> {
        self.prev_end = self.token.end;
        let next = self.lexer.next_token_at(self.prev_end)?;
        Ok(std::mem::replace(&mut self.token, next))
    }

    /// Determines if the current token is of the given kind, without
    /// consuming it.
    fn peek(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    /// Consumes the current token iff it is of the given kind; returns
    /// whether it matched.
    fn skip(&mut self, kind: TokenKind) -> Result<bool, SyntaxError> {
        if self.token.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes and returns the current token iff it is of the given kind;
    /// raises otherwise.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.token.kind == kind {
            self.advance()
        } else {
            Err(self.error(
                self.token.start,
                format!("Expected {}, found {}", kind.desc(), self.token.desc()),
                SyntaxErrorKind::UnexpectedToken {
                    expected: kind.desc().to_string(),
                    found: self.token.desc(),
                },
            ))
        }
    }

    /// Consumes and returns the current token iff it is a Name token with
    /// exactly the given text; raises otherwise.
    fn expect_keyword(&mut self, keyword: &str) -> Result<Token, SyntaxError> {
        if self.token.kind == TokenKind::Name && self.token.value.as_deref() == Some(keyword) {
            self.advance()
        } else {
            Err(self.error(
                self.token.start,
                format!("Expected \"{keyword}\", found {}", self.token.desc()),
                SyntaxErrorKind::ExpectedKeyword {
                    keyword: keyword.to_string(),
                    found: self.token.desc(),
                },
            ))
        }
    }

    /// The error for a token that matches no grammar alternative at a
    /// dispatch point.
    fn unexpected(&self) -> SyntaxError {
        self.error(
            self.token.start,
            format!("Unexpected {}", self.token.desc()),
            SyntaxErrorKind::UnexpectedSyntax {
                found: self.token.desc(),
            },
        )
    }

    fn error(&self, position: usize, message: impl Into<String>, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(Arc::clone(&self.source), position, message, kind)
    }

    // =========================================================================
    // List combinators
    // =========================================================================

    /// Parses a possibly empty list of nodes bracketed between `open` and
    /// `close` tokens, leaving the parser past the closing token.
    ///
    /// The close token is checked before each element, never by count.
    /// Element errors propagate directly.
    fn any<T>(
        &mut self,
        open: TokenKind,
        mut parse_fn: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        close: TokenKind,
    ) -> Result<Vec<T>, SyntaxError> {
        self.expect(open)?;
        let mut nodes = Vec::new();
        while !self.skip(close)? {
            nodes.push(parse_fn(self)?);
        }
        Ok(nodes)
    }

    /// Parses a non-empty list of nodes bracketed between `open` and `close`
    /// tokens, leaving the parser past the closing token.
    ///
    /// The first element is parsed unconditionally, so an empty list
    /// surfaces whatever error its element parser raises on the closing
    /// token.
    fn many<T>(
        &mut self,
        open: TokenKind,
        mut parse_fn: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        close: TokenKind,
    ) -> Result<Vec<T>, SyntaxError> {
        self.expect(open)?;
        let mut nodes = vec![parse_fn(self)?];
        while !self.skip(close)? {
            nodes.push(parse_fn(self)?);
        }
        Ok(nodes)
    }

    /// Converts a Name lex token into a Name parse node.
    fn parse_name(&mut self) -> Result<Name, SyntaxError> {
        let token = self.expect(TokenKind::Name)?;
        Ok(Name {
            loc: self.loc(token.start),
            value: token_value(token),
        })
    }

    // =========================================================================
    // Document
    // =========================================================================

    /// Parses one or more definitions until end of input.
    pub fn parse_document(&mut self) -> Result<Document, SyntaxError> {
        let start = self.token.start;
        let mut definitions = Vec::new();
        loop {
            if self.peek(TokenKind::BraceOpen) {
                definitions.push(Definition::Operation(self.parse_operation_definition()?));
            } else if self.peek(TokenKind::Name) {
                match self.token.value.as_deref() {
                    Some("query") | Some("mutation") => definitions
                        .push(Definition::Operation(self.parse_operation_definition()?)),
                    Some("fragment") => {
                        definitions.push(Definition::Fragment(self.parse_fragment_definition()?))
                    }
                    _ => return Err(self.unexpected()),
                }
            } else {
                return Err(self.unexpected());
            }
            if self.skip(TokenKind::Eof)? {
                break;
            }
        }
        Ok(Document {
            loc: self.loc(start),
            definitions,
        })
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_operation_definition(&mut self) -> Result<OperationDefinition, SyntaxError> {
        let start = self.token.start;

        // Shorthand: a bare selection set is an anonymous query.
        if self.peek(TokenKind::BraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                loc: self.loc(start),
                operation: OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
            });
        }

        let operation = match self.token.value.as_deref() {
            Some("query") => OperationKind::Query,
            Some("mutation") => OperationKind::Mutation,
            _ => return Err(self.unexpected()),
        };
        self.advance()?;

        let name = if self.peek(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            loc: self.loc(start),
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<VariableDefinition>, SyntaxError> {
        if self.peek(TokenKind::ParenOpen) {
            self.many(
                TokenKind::ParenOpen,
                Self::parse_variable_definition,
                TokenKind::ParenClose,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_variable_definition(&mut self) -> Result<VariableDefinition, SyntaxError> {
        let start = self.token.start;
        let variable = self.parse_variable()?;
        self.expect(TokenKind::Colon)?;
        let var_type = self.parse_type()?;
        let default_value = if self.skip(TokenKind::Equals)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };
        Ok(VariableDefinition {
            loc: self.loc(start),
            variable,
            var_type,
            default_value,
        })
    }

    fn parse_variable(&mut self) -> Result<Variable, SyntaxError> {
        let start = self.token.start;
        self.expect(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable {
            loc: self.loc(start),
            name,
        })
    }

    fn parse_selection_set(&mut self) -> Result<SelectionSet, SyntaxError> {
        let start = self.token.start;
        let selections = self.many(
            TokenKind::BraceOpen,
            Self::parse_selection,
            TokenKind::BraceClose,
        )?;
        Ok(SelectionSet {
            loc: self.loc(start),
            selections,
        })
    }

    fn parse_selection(&mut self) -> Result<Selection, SyntaxError> {
        if self.peek(TokenKind::Spread) {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    /// Corresponds to both Field and Alias in the grammar: a Name followed
    /// by `:` was the alias, and the field name follows.
    fn parse_field(&mut self) -> Result<Field, SyntaxError> {
        let start = self.token.start;

        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(TokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };

        let arguments = self.parse_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.peek(TokenKind::BraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            loc: self.loc(start),
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    fn parse_arguments(&mut self) -> Result<Vec<Argument>, SyntaxError> {
        if self.peek(TokenKind::ParenOpen) {
            self.many(
                TokenKind::ParenOpen,
                Self::parse_argument,
                TokenKind::ParenClose,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_argument(&mut self) -> Result<Argument, SyntaxError> {
        let start = self.token.start;
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value(false)?;
        Ok(Argument {
            loc: self.loc(start),
            name,
            value,
        })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// Corresponds to both FragmentSpread and InlineFragment in the grammar.
    ///
    /// After the `...`, the name `on` begins an inline fragment's type
    /// condition; any other name is a spread of that fragment.
    fn parse_fragment(&mut self) -> Result<Selection, SyntaxError> {
        let start = self.token.start;
        self.expect(TokenKind::Spread)?;
        if self.token.kind == TokenKind::Name && self.token.value.as_deref() == Some("on") {
            self.advance()?;
            let type_condition = self.parse_name()?;
            let directives = self.parse_directives()?;
            let selection_set = self.parse_selection_set()?;
            Ok(Selection::InlineFragment(InlineFragment {
                loc: self.loc(start),
                type_condition,
                directives,
                selection_set,
            }))
        } else {
            let name = self.parse_name()?;
            let directives = self.parse_directives()?;
            Ok(Selection::FragmentSpread(FragmentSpread {
                loc: self.loc(start),
                name,
                directives,
            }))
        }
    }

    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition, SyntaxError> {
        let start = self.token.start;
        self.expect_keyword("fragment")?;

        // A fragment named `on` could never be spread: after a `...`, the
        // name `on` always begins an inline fragment.
        let name_start = self.token.start;
        let name = self.parse_name()?;
        if name.value == "on" {
            return Err(self.error(
                name_start,
                "Invalid fragment name \"on\"",
                SyntaxErrorKind::ReservedName {
                    name: name.value,
                },
            ));
        }

        self.expect_keyword("on")?;
        let type_condition = self.parse_name()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            loc: self.loc(start),
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value literal or, when `is_const` is false, a variable
    /// reference.
    fn parse_value(&mut self, is_const: bool) -> Result<Value, SyntaxError> {
        match self.token.kind {
            TokenKind::BracketOpen => self.parse_array(is_const),
            TokenKind::BraceOpen => self.parse_object(is_const),
            TokenKind::Int => {
                let token = self.advance()?;
                Ok(Value::Int(IntValue {
                    loc: self.loc(token.start),
                    value: token_value(token),
                }))
            }
            TokenKind::Float => {
                let token = self.advance()?;
                Ok(Value::Float(FloatValue {
                    loc: self.loc(token.start),
                    value: token_value(token),
                }))
            }
            TokenKind::String => {
                let token = self.advance()?;
                Ok(Value::String(StringValue {
                    loc: self.loc(token.start),
                    value: token_value(token),
                }))
            }
            TokenKind::Name => {
                let token = self.advance()?;
                let start = token.start;
                let value = token_value(token);
                match value.as_str() {
                    "true" | "false" => Ok(Value::Boolean(BooleanValue {
                        loc: self.loc(start),
                        value: value == "true",
                    })),
                    _ => Ok(Value::Enum(EnumValue {
                        loc: self.loc(start),
                        value,
                    })),
                }
            }
            TokenKind::Dollar if !is_const => Ok(Value::Variable(self.parse_variable()?)),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_array(&mut self, is_const: bool) -> Result<Value, SyntaxError> {
        let start = self.token.start;
        let values = self.any(
            TokenKind::BracketOpen,
            |parser| parser.parse_value(is_const),
            TokenKind::BracketClose,
        )?;
        Ok(Value::Array(ArrayValue {
            loc: self.loc(start),
            values,
        }))
    }

    fn parse_object(&mut self, is_const: bool) -> Result<Value, SyntaxError> {
        let start = self.token.start;
        self.expect(TokenKind::BraceOpen)?;
        // Object literals are small; a linear scan over seen names beats a
        // heap-allocated set for realistic documents.
        let mut seen_names: SmallVec<[String; 8]> = SmallVec::new();
        let mut fields = Vec::new();
        while !self.skip(TokenKind::BraceClose)? {
            fields.push(self.parse_object_field(is_const, &mut seen_names)?);
        }
        Ok(Value::Object(ObjectValue {
            loc: self.loc(start),
            fields,
        }))
    }

    fn parse_object_field(
        &mut self,
        is_const: bool,
        seen_names: &mut SmallVec<[String; 8]>,
    ) -> Result<ObjectField, SyntaxError> {
        let start = self.token.start;
        let name = self.parse_name()?;
        if seen_names.iter().any(|seen| *seen == name.value) {
            return Err(self.error(
                start,
                format!("Duplicate input object field {}.", name.value),
                SyntaxErrorKind::DuplicateObjectField { name: name.value },
            ));
        }
        seen_names.push(name.value.clone());
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value(is_const)?;
        Ok(ObjectField {
            loc: self.loc(start),
            name,
            value,
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(&mut self) -> Result<Vec<Directive>, SyntaxError> {
        let mut directives = Vec::new();
        while self.peek(TokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    /// `@name` with an optional `: value`.
    fn parse_directive(&mut self) -> Result<Directive, SyntaxError> {
        let start = self.token.start;
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let value = if self.skip(TokenKind::Colon)? {
            Some(self.parse_value(false)?)
        } else {
            None
        };
        Ok(Directive {
            loc: self.loc(start),
            name,
            value,
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Handles the NamedType, ListType, and NonNullType rules. A single `!`
    /// wraps whichever type it follows; stacked `!` is not part of the
    /// grammar.
    fn parse_type(&mut self) -> Result<Type, SyntaxError> {
        let start = self.token.start;
        let inner = if self.skip(TokenKind::BracketOpen)? {
            let of_type = self.parse_type()?;
            self.expect(TokenKind::BracketClose)?;
            Type::List(ListType {
                loc: self.loc(start),
                of_type: Box::new(of_type),
            })
        } else {
            let name = self.parse_name()?;
            Type::Named(NamedType {
                loc: self.loc(start),
                name,
            })
        };
        if self.skip(TokenKind::Bang)? {
            Ok(Type::NonNull(NonNullType {
                loc: self.loc(start),
                of_type: Box::new(inner),
            }))
        } else {
            Ok(inner)
        }
    }
}

/// Takes the value out of a token kind that always carries one.
fn token_value(token: Token) -> String {
    match token.value {
        Some(value) => value,
        None => unreachable!("{} tokens always carry a value", token.kind),
    }
}
