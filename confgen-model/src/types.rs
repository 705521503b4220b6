//! Resolved type model.
//!
//! These types are the single source of truth between resolution and code
//! generation: annotation strings and option-dependent classification (the
//! duration representation in particular) are settled here, so generators
//! only ever branch on the resolved kind.

/// Scalar kinds a leaf annotation can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Int,
    Long,
    Double,
    Boolean,
    Duration,
}

impl ScalarKind {
    /// The annotation keyword this kind is written as in templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Int => "int",
            ScalarKind::Long => "long",
            ScalarKind::Double => "double",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Duration => "duration",
        }
    }
}

/// The resolved type of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Scalar(ScalarKind),
    Nested(ObjectType),
}

/// One entry of an object type, in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The template key; also the runtime configuration lookup path segment.
    pub name: String,
    pub ty: FieldType,
    pub required: bool,
}

/// A resolved object level with its generated type name.
///
/// Two structurally identical objects at different template paths are
/// distinct `ObjectType`s with distinct names; naming is path-driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub type_name: String,
    pub fields: Vec<Field>,
}

impl ObjectType {
    /// All nested object types below this one, pre-order depth-first in
    /// field order. This is the namespace-assignment order, so generators
    /// can emit in it deterministically.
    pub fn nested_types(&self) -> Vec<&ObjectType> {
        let mut result = Vec::new();
        collect_nested(self, &mut result);
        result
    }
}

fn collect_nested<'a>(object: &'a ObjectType, out: &mut Vec<&'a ObjectType>) {
    for field in &object.fields {
        if let FieldType::Nested(nested) = &field.ty {
            out.push(nested);
            collect_nested(nested, out);
        }
    }
}
