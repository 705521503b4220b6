//! Core utilities for the confgen config-class generator.
//!
//! This crate provides fundamental helpers used across the confgen
//! workspace: case conversion for generated type names and the write
//! rules for generated source files.

mod file;
mod utils;

pub use file::{GeneratedFile, write_file};
pub use utils::to_pascal_case;
