//! The AST node model.
//!
//! A closed set of node kinds for documents, operations, fragments,
//! selections, values, directives, and type references, grouped into one sum
//! type per grammar category ([`Definition`], [`Selection`], [`Value`],
//! [`Type`]) so that consumers can match exhaustively.
//!
//! Every node is an immutable, fully-constructed value: the parser builds
//! children before their parent and nothing is shared or mutated afterwards.
//! Each node holds a `loc: Option<Location>` — `None` when parsing with
//! [`ParseOptions::no_location`](crate::ParseOptions) — recording the span
//! of source text it was parsed from.

mod argument;
mod directive;
mod document;
mod fragment;
mod name;
mod operation;
mod selection;
mod type_annotation;
mod value;

pub use argument::Argument;
pub use directive::Directive;
pub use document::Definition;
pub use document::Document;
pub use fragment::FragmentDefinition;
pub use fragment::FragmentSpread;
pub use fragment::InlineFragment;
pub use name::Name;
pub use operation::OperationDefinition;
pub use operation::OperationKind;
pub use operation::Variable;
pub use operation::VariableDefinition;
pub use selection::Field;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NonNullType;
pub use type_annotation::Type;
pub use value::ArrayValue;
pub use value::BooleanValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;
