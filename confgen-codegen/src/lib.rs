//! Shared code generation utilities for the confgen config-class generator.
//!
//! Language-agnostic building blocks used by target-language generators
//! (currently only `confgen-codegen-java`): the indentation-aware
//! [`CodeBuilder`] and the per-compilation option snapshot [`GenOpts`].

mod builder;
mod opts;

pub use builder::{CodeBuilder, Indent};
pub use opts::GenOpts;
