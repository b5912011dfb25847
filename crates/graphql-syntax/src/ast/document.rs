use crate::Location;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use serde::Deserialize;
use serde::Serialize;

/// A parsed GraphQL document: an ordered, non-empty list of definitions.
///
/// Produced whole by one [`parse`](crate::parse) call and handed to
/// downstream consumers; it owns its entire tree exclusively.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Document {
    pub loc: Option<Location>,
    pub definitions: Vec<Definition>,
}

/// A top-level definition in a document.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}
