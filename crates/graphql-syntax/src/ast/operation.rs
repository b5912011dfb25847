use crate::Location;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::ast::Type;
use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// An operation: `query`/`mutation`, or the brace-only shorthand.
///
/// The shorthand form `{ ... }` produces `operation: Query` with no name,
/// no variable definitions, and no directives.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OperationDefinition {
    pub loc: Option<Location>,
    pub operation: OperationKind,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

/// The kind of an operation.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// Returns the keyword that introduces this operation kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `$name: Type (= constant)?` inside an operation's variable definitions.
///
/// The default value, when present, is constant-only: it cannot contain
/// variable references.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct VariableDefinition {
    pub loc: Option<Location>,
    pub variable: Variable,
    pub var_type: Type,
    pub default_value: Option<Value>,
}

/// A `$name` variable reference.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Variable {
    pub loc: Option<Location>,
    pub name: Name,
}
