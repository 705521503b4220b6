//! Per-compilation namespace for generated type names.
//!
//! Scoped to one resolve call; never process-wide. Names are assigned in a
//! single top-down traversal (root first, then each nested object depth-first
//! in field order), so re-running resolution on an unchanged template always
//! reproduces identical names.

use std::collections::HashSet;

use confgen_core::to_pascal_case;
use indexmap::IndexMap;

use crate::{Error, Result};

/// Mapping from template path to chosen generated type name.
#[derive(Debug)]
pub struct Namespace {
    taken: HashSet<String>,
    assigned: IndexMap<String, String>,
}

impl Namespace {
    /// Create a namespace with the root path already mapped to the
    /// configured class name.
    pub fn new(root_name: impl Into<String>) -> Self {
        let root_name = root_name.into();
        let mut taken = HashSet::new();
        taken.insert(root_name.clone());
        let mut assigned = IndexMap::new();
        assigned.insert(String::new(), root_name);
        Self { taken, assigned }
    }

    /// The name assigned to the root path.
    pub fn root_name(&self) -> &str {
        &self.assigned[""]
    }

    /// Assign a unique type name to a non-root template path.
    ///
    /// The default name is the capitalized form of the path's own last key
    /// (`test` -> `Test`); on collision the smallest unused numeric suffix
    /// starting at 2 is appended (`Test2`, `Test3`, ...).
    pub fn assign(&mut self, path: &[String]) -> Result<String> {
        let key = path.join(".");
        let Some(last) = path.last() else {
            return Err(Box::new(Error::NamingInvariant {
                name: String::new(),
                path: key,
            }));
        };
        if self.assigned.contains_key(&key) {
            return Err(Box::new(Error::NamingInvariant {
                name: self.assigned[&key].clone(),
                path: key,
            }));
        }

        let base = type_base_name(last);
        let mut candidate = base.clone();
        let mut suffix = 2u32;
        while self.taken.contains(&candidate) {
            candidate = format!("{base}{suffix}");
            suffix += 1;
        }

        self.taken.insert(candidate.clone());
        self.assigned.insert(key, candidate.clone());
        Ok(candidate)
    }
}

/// Derive the default type name for a key: sanitize to identifier
/// characters, then PascalCase.
fn type_base_name(key: &str) -> String {
    let cleaned: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect();
    let mut name = to_pascal_case(&cleaned);
    if name.is_empty() {
        name.push_str("Obj");
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_root_name() {
        let ns = Namespace::new("TestConfig");
        assert_eq!(ns.root_name(), "TestConfig");
    }

    #[test]
    fn test_capitalizes_own_key() {
        let mut ns = Namespace::new("TestConfig");
        assert_eq!(ns.assign(&path(&["test"])).unwrap(), "Test");
        assert_eq!(ns.assign(&path(&["test", "sub_section"])).unwrap(), "SubSection");
    }

    #[test]
    fn test_collision_suffixes() {
        let mut ns = Namespace::new("Root");
        assert_eq!(ns.assign(&path(&["test"])).unwrap(), "Test");
        assert_eq!(ns.assign(&path(&["a", "test"])).unwrap(), "Test2");
        assert_eq!(ns.assign(&path(&["b", "test"])).unwrap(), "Test3");
    }

    #[test]
    fn test_collision_with_root_name() {
        let mut ns = Namespace::new("Test");
        assert_eq!(ns.assign(&path(&["test"])).unwrap(), "Test2");
    }

    #[test]
    fn test_reassigning_path_is_invariant_violation() {
        let mut ns = Namespace::new("Root");
        ns.assign(&path(&["test"])).unwrap();
        let err = ns.assign(&path(&["test"])).unwrap_err();
        assert!(matches!(*err, Error::NamingInvariant { .. }));
    }

    #[test]
    fn test_odd_keys_sanitized() {
        let mut ns = Namespace::new("Root");
        assert_eq!(ns.assign(&path(&["my key"])).unwrap(), "MyKey");
        assert_eq!(ns.assign(&path(&["2fast"])).unwrap(), "_2fast");
    }
}
