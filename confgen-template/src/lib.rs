//! Template notation parsing for the confgen config-class generator.
//!
//! A template describes the shape of a hierarchical configuration as nested
//! keyed objects whose leaves are quoted type annotations:
//!
//! ```text
//! test {
//!   server: "string?"
//!   port: "int"
//!   length: "duration"
//! }
//! ```
//!
//! Parsing produces a [`Template`]: the raw keyed tree plus the source
//! context used for diagnostics. Nothing is typed at this stage; annotation
//! strings are resolved later by `confgen-model`.

mod error;
mod lexer;
mod parser;
mod raw;
mod template;

pub use error::{Error, Result, SourceContext};
pub use raw::{RawField, RawLeaf, RawNode, RawObject, Span};
pub use template::Template;
