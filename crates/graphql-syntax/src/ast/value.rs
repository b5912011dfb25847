use crate::Location;
use crate::ast::Name;
use crate::ast::Variable;
use serde::Deserialize;
use serde::Serialize;

/// An input value literal, or a variable reference.
///
/// In constant contexts (variable default values) the `Variable` variant is
/// rejected by the parser.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Enum(EnumValue),
    Array(ArrayValue),
    Object(ObjectValue),
}

/// An integer literal. Holds the raw digits text; numeric conversion is the
/// consumer's concern.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IntValue {
    pub loc: Option<Location>,
    pub value: String,
}

/// A float literal. Holds the raw text.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FloatValue {
    pub loc: Option<Location>,
    pub value: String,
}

/// A string literal. Holds the decoded text (escape sequences resolved).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StringValue {
    pub loc: Option<Location>,
    pub value: String,
}

/// `true` or `false`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BooleanValue {
    pub loc: Option<Location>,
    pub value: bool,
}

/// A bare name in value position that is neither `true` nor `false`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnumValue {
    pub loc: Option<Location>,
    pub value: String,
}

/// `[ value* ]`
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ArrayValue {
    pub loc: Option<Location>,
    pub values: Vec<Value>,
}

/// `{ (name: value)* }` — field names are unique within one literal; a
/// duplicate is a syntax error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ObjectValue {
    pub loc: Option<Location>,
    pub fields: Vec<ObjectField>,
}

/// One `name: value` entry of an object literal.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ObjectField {
    pub loc: Option<Location>,
    pub name: Name,
    pub value: Value,
}
