use crate::Location;
use serde::Deserialize;
use serde::Serialize;

/// An identifier: `[_A-Za-z][_0-9A-Za-z]*`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Name {
    pub loc: Option<Location>,
    pub value: String,
}
