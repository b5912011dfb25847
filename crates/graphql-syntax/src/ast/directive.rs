use crate::Location;
use crate::ast::Name;
use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;

/// An `@name` annotation with an optional `: value`.
///
/// This grammar predates parenthesized directive argument lists; a directive
/// carries at most one value.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Directive {
    pub loc: Option<Location>,
    pub name: Name,
    pub value: Option<Value>,
}
