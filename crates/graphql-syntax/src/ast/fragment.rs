use crate::Location;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::SelectionSet;
use serde::Deserialize;
use serde::Serialize;

/// `...name directives?` — a use of a named fragment inside a selection set.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FragmentSpread {
    pub loc: Option<Location>,
    pub name: Name,
    pub directives: Vec<Directive>,
}

/// `... on TypeCondition directives? selection-set` — an anonymous
/// type-conditioned selection inlined into its parent selection set.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct InlineFragment {
    pub loc: Option<Location>,
    pub type_condition: Name,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}

/// `fragment Name on TypeCondition directives? selection-set` — a top-level
/// reusable fragment.
///
/// The name `on` is rejected at parse time: it introduces type conditions,
/// so a fragment named `on` could never be spread.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FragmentDefinition {
    pub loc: Option<Location>,
    pub name: Name,
    pub type_condition: Name,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
