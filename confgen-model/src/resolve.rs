//! Lowering from the raw template tree to the resolved object-type model.

use confgen_template::{RawLeaf, RawNode, RawObject, SourceContext, Template};

use crate::{
    Error, Result,
    namespace::Namespace,
    types::{Field, FieldType, ObjectType, ScalarKind},
};

/// Options that influence resolution, taken once per compilation.
#[derive(Debug, Clone)]
pub struct ResolveOpts {
    /// Generated name of the root accessor type.
    pub root_name: String,
    /// Force every field required, ignoring `?` suffixes.
    pub all_required: bool,
    /// Resolve `duration` to a first-class duration kind; when false it
    /// falls back to a millisecond number.
    pub use_durations: bool,
}

/// Resolve a parsed template into the object-type tree.
///
/// The namespace is constructed fresh here and discarded with the call, so
/// independent compilations cannot interfere.
pub fn resolve(template: &Template, opts: &ResolveOpts) -> Result<ObjectType> {
    let mut namespace = Namespace::new(opts.root_name.clone());
    let resolver = Resolver {
        source: template.source(),
        opts,
    };
    let mut path = Vec::new();
    resolver.resolve_object(opts.root_name.clone(), template.root(), &mut namespace, &mut path)
}

struct Resolver<'a> {
    source: &'a SourceContext,
    opts: &'a ResolveOpts,
}

impl Resolver<'_> {
    fn resolve_object(
        &self,
        type_name: String,
        raw: &RawObject,
        namespace: &mut Namespace,
        path: &mut Vec<String>,
    ) -> Result<ObjectType> {
        let mut fields = Vec::with_capacity(raw.len());

        for (key, raw_field) in raw.iter() {
            let field = match &raw_field.node {
                RawNode::Leaf(leaf) => {
                    let (kind, optional) = self.resolve_annotation(key, leaf, path)?;
                    Field {
                        name: key.to_string(),
                        ty: FieldType::Scalar(kind),
                        required: self.opts.all_required || !optional,
                    }
                }
                RawNode::Object(object) => {
                    path.push(key.to_string());
                    let name = namespace.assign(path)?;
                    let nested = self.resolve_object(name, object, namespace, path)?;
                    path.pop();
                    // An object with no required member behaves like an
                    // optional section: absence yields the empty shape
                    // instead of a failure.
                    let required =
                        self.opts.all_required || nested.fields.iter().any(|f| f.required);
                    Field {
                        name: key.to_string(),
                        ty: FieldType::Nested(nested),
                        required,
                    }
                }
            };
            fields.push(field);
        }

        Ok(ObjectType { type_name, fields })
    }

    /// Parse an annotation string as `<keyword>["?"]`.
    fn resolve_annotation(
        &self,
        key: &str,
        leaf: &RawLeaf,
        path: &[String],
    ) -> Result<(ScalarKind, bool)> {
        let text = leaf.annotation.trim();
        let (keyword, optional) = match text.strip_suffix('?') {
            Some(keyword) => (keyword.trim_end(), true),
            None => (text, false),
        };

        let kind = match keyword {
            "string" => ScalarKind::String,
            "int" => ScalarKind::Int,
            "long" => ScalarKind::Long,
            "double" => ScalarKind::Double,
            "boolean" => ScalarKind::Boolean,
            "duration" if self.opts.use_durations => ScalarKind::Duration,
            "duration" => ScalarKind::Long,
            _ => {
                let mut full_path = path.join(".");
                if !full_path.is_empty() {
                    full_path.push('.');
                }
                full_path.push_str(key);
                return Err(Box::new(Error::UnknownType {
                    src: self.source.named_source(),
                    span: leaf.span.into(),
                    path: full_path,
                    annotation: leaf.annotation.clone(),
                }));
            }
        };
        Ok((kind, optional))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ResolveOpts {
        ResolveOpts {
            root_name: "TestConfig".to_string(),
            all_required: false,
            use_durations: false,
        }
    }

    fn resolve_str(template: &str, opts: &ResolveOpts) -> Result<ObjectType> {
        let template: Template = template.parse().unwrap();
        resolve(&template, opts)
    }

    fn field<'a>(object: &'a ObjectType, name: &str) -> &'a Field {
        object
            .fields
            .iter()
            .find(|f| f.name == name)
            .unwrap_or_else(|| panic!("no field '{name}'"))
    }

    const TEMPLATE: &str = "test {\n  server: \"string?\"\n  port: \"int\"\n  length: \"duration\"\n}";

    #[test]
    fn test_concrete_scenario() {
        let root = resolve_str(TEMPLATE, &opts()).unwrap();
        assert_eq!(root.type_name, "TestConfig");
        assert_eq!(root.fields.len(), 1);

        let FieldType::Nested(test) = &field(&root, "test").ty else {
            panic!("expected nested object");
        };
        assert_eq!(test.type_name, "Test");

        let server = field(test, "server");
        assert_eq!(server.ty, FieldType::Scalar(ScalarKind::String));
        assert!(!server.required);

        let port = field(test, "port");
        assert_eq!(port.ty, FieldType::Scalar(ScalarKind::Int));
        assert!(port.required);

        // use_durations = false falls back to a millisecond number.
        let length = field(test, "length");
        assert_eq!(length.ty, FieldType::Scalar(ScalarKind::Long));
        assert!(length.required);
    }

    #[test]
    fn test_use_durations_resolves_first_class_kind() {
        let root = resolve_str(TEMPLATE, &ResolveOpts { use_durations: true, ..opts() }).unwrap();
        let FieldType::Nested(test) = &field(&root, "test").ty else {
            panic!("expected nested object");
        };
        assert_eq!(field(test, "length").ty, FieldType::Scalar(ScalarKind::Duration));
    }

    #[test]
    fn test_all_required_overrides_optional_suffix() {
        let root = resolve_str("server: \"string?\"", &ResolveOpts { all_required: true, ..opts() })
            .unwrap();
        assert!(field(&root, "server").required);
    }

    #[test]
    fn test_optional_suffix_with_whitespace() {
        let root = resolve_str("server: \" string ? \"", &opts()).unwrap();
        let server = field(&root, "server");
        assert_eq!(server.ty, FieldType::Scalar(ScalarKind::String));
        assert!(!server.required);
    }

    #[test]
    fn test_field_order_preserved() {
        let root = resolve_str("b: \"int\"\nz: \"string\"\na: \"boolean\"", &opts()).unwrap();
        let names: Vec<&str> = root.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "z", "a"]);
    }

    #[test]
    fn test_unknown_type_names_key_and_annotation() {
        let err = resolve_str("test { port: \"unsigned\" }", &opts()).unwrap_err();
        let Error::UnknownType { path, annotation, .. } = *err else {
            panic!("expected unknown type error");
        };
        assert_eq!(path, "test.port");
        assert_eq!(annotation, "unsigned");
    }

    #[test]
    fn test_list_annotations_are_not_guessed() {
        assert!(resolve_str("xs: \"[int]\"", &opts()).is_err());
        assert!(resolve_str("xs: \"list<int>\"", &opts()).is_err());
    }

    #[test]
    fn test_object_with_only_optional_members_is_optional() {
        let root = resolve_str("section { a: \"string?\"\n b: \"int?\" }", &opts()).unwrap();
        assert!(!field(&root, "section").required);
    }

    #[test]
    fn test_object_with_a_required_member_is_required() {
        let root = resolve_str("section { a: \"string?\"\n b: \"int\" }", &opts()).unwrap();
        assert!(field(&root, "section").required);
    }

    #[test]
    fn test_naming_collisions_are_deterministic() {
        let template = "test { x: \"int\" }\nouter { test { y: \"int\" } }";
        for _ in 0..2 {
            let root = resolve_str(template, &opts()).unwrap();
            let names: Vec<&str> =
                root.nested_types().iter().map(|t| t.type_name.as_str()).collect();
            assert_eq!(names, vec!["Test", "Outer", "Test2"]);
        }
    }

    #[test]
    fn test_collision_with_root_class_name() {
        let root = resolve_str(
            "test { x: \"int\" }",
            &ResolveOpts { root_name: "Test".to_string(), ..opts() },
        )
        .unwrap();
        assert_eq!(root.nested_types()[0].type_name, "Test2");
    }
}
