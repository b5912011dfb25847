use crate::Source;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// The span of source text an AST node was parsed from.
///
/// The span is a half-open interval of 0-based byte offsets into
/// [`Source::body`]: `start` is the offset of the node's first character and
/// `end` is the offset immediately past its last token. Offsets always fall
/// on `char` boundaries, so `&body[start..end]` re-slices the original text
/// of the node. Invariant: `start <= end`.
///
/// Line/column derivation is deliberately not provided here; it can be
/// computed from `(body, offset)` alone by whatever diagnostic layer needs
/// it.
///
/// The optional [`Source`] back-reference lets diagnostics re-slice without
/// the caller threading the source around. It is omitted when parsing with
/// [`ParseOptions::no_source`](crate::ParseOptions) to reduce memory
/// retention, and is skipped during serialization.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    #[serde(skip)]
    pub source: Option<Arc<Source>>,
}

impl Location {
    /// Creates a span without a source back-reference.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            source: None,
        }
    }

    /// Creates a span holding a reference to the source it indexes into.
    pub fn with_source(start: usize, end: usize, source: Arc<Source>) -> Self {
        Self {
            start,
            end,
            source: Some(source),
        }
    }

    /// Re-slices the original text of this span, if the span carries its
    /// source.
    pub fn text(&self) -> Option<&str> {
        self.source
            .as_deref()
            .map(|source| &source.body()[self.start..self.end])
    }
}
