use crate::Location;
use crate::ast::Name;
use serde::Deserialize;
use serde::Serialize;

/// A type reference: `Name`, `[Type]`, or `Type!`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

/// A plain named type reference.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NamedType {
    pub loc: Option<Location>,
    pub name: Name,
}

/// `[Type]`
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ListType {
    pub loc: Option<Location>,
    pub of_type: Box<Type>,
}

/// `Type!` — wraps the type the `!` follows.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NonNullType {
    pub loc: Option<Location>,
    pub of_type: Box<Type>,
}
