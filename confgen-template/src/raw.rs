//! Raw template tree produced by the parser.
//!
//! The raw tree is a faithful, untyped image of the template text: keys in
//! insertion order, annotation strings left uninterpreted. The resolver in
//! `confgen-model` consumes it in a single pass.

use indexmap::IndexMap;
use miette::SourceSpan;

/// A byte range in the template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.offset, span.len).into()
    }
}

/// A node in the raw template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawNode {
    /// A nested object with ordered keyed children.
    Object(RawObject),
    /// A leaf carrying an uninterpreted type-annotation string.
    Leaf(RawLeaf),
}

/// An object level: ordered mapping from key to field.
///
/// Insertion order is semantically significant; it determines the field
/// order of the generated accessor type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawObject {
    pub fields: IndexMap<String, RawField>,
}

impl RawObject {
    /// Iterate fields in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawField)> {
        self.fields.iter().map(|(k, f)| (k.as_str(), f))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// One keyed entry of an object, with the span of its key for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub key_span: Span,
    pub node: RawNode,
}

/// A leaf node: the quoted annotation text (quotes stripped) and its span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLeaf {
    pub annotation: String,
    pub span: Span,
}
