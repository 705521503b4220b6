//! Resolved object-type model for the confgen config-class generator.
//!
//! This crate lowers the raw template tree from `confgen-template` into the
//! typed model consumed by code generators:
//!
//! ```text
//! template text -> confgen-template (RawNode) -> confgen-model (ObjectType) -> codegen
//! ```
//!
//! Resolution settles everything option-dependent about classification
//! (required-ness overrides, the duration representation) and assigns every
//! object level a unique generated type name via [`Namespace`].

mod error;
mod namespace;
mod resolve;
mod types;

pub use error::{Error, Result};
pub use namespace::Namespace;
pub use resolve::{ResolveOpts, resolve};
pub use types::{Field, FieldType, ObjectType, ScalarKind};
