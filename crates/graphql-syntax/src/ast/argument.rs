use crate::Location;
use crate::ast::Name;
use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;

/// `name: value` inside a field's argument list.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Argument {
    pub loc: Option<Location>,
    pub name: Name,
    pub value: Value,
}
