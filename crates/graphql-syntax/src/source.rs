use serde::Deserialize;
use serde::Serialize;

/// A representation of source input to GraphQL.
///
/// The name is mostly useful for clients who store GraphQL documents in
/// source files; for example, if the GraphQL input lives in a file
/// `Foo.graphql`, it might be useful for `name` to be `"Foo.graphql"`.
/// When no name is given it defaults to `"GraphQL"`.
///
/// A `Source` is immutable once constructed. [`Location`](crate::Location)s
/// and [`SyntaxError`](crate::SyntaxError)s reference it (via `Arc`) rather
/// than copying the body text.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Source {
    body: String,
    name: String,
}

impl Source {
    /// Creates a source with the default name `"GraphQL"`.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: "GraphQL".to_string(),
        }
    }

    /// Creates a source with an explicit display name.
    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
        }
    }

    /// Returns the raw GraphQL text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the display name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }
}
