//! Mapping from resolved field types to Java type strings.
//!
//! Required scalars use primitives where one exists; optional fields fall
//! back to the boxed type (nullable) or, with `use_optionals`, to
//! `java.util.Optional` of the boxed type. Emitted types are always fully
//! qualified so the generated unit needs no imports.

use confgen_model::{FieldType, ScalarKind};

/// Java type for a required field of the given scalar kind.
pub fn raw_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::String => "java.lang.String",
        ScalarKind::Int => "int",
        ScalarKind::Long => "long",
        ScalarKind::Double => "double",
        ScalarKind::Boolean => "boolean",
        ScalarKind::Duration => "java.time.Duration",
    }
}

/// Boxed Java type for the given scalar kind (used for nullable and
/// optional-wrapped representations).
pub fn boxed_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::String => "java.lang.String",
        ScalarKind::Int => "java.lang.Integer",
        ScalarKind::Long => "java.lang.Long",
        ScalarKind::Double => "java.lang.Double",
        ScalarKind::Boolean => "java.lang.Boolean",
        ScalarKind::Duration => "java.time.Duration",
    }
}

/// The `Config` accessor method reading a value of the given kind.
pub fn config_getter(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::String => "getString",
        ScalarKind::Int => "getInt",
        ScalarKind::Long => "getLong",
        ScalarKind::Double => "getDouble",
        ScalarKind::Boolean => "getBoolean",
        ScalarKind::Duration => "getDuration",
    }
}

/// Full Java type of a field, honoring required-ness and the optional
/// representation. Nested types are referenced through the root type, whose
/// direct members they are.
pub fn field_type(ty: &FieldType, required: bool, use_optionals: bool, root_name: &str) -> String {
    match ty {
        FieldType::Scalar(kind) => {
            if required {
                raw_type(*kind).to_string()
            } else if use_optionals {
                format!("java.util.Optional<{}>", boxed_type(*kind))
            } else {
                boxed_type(*kind).to_string()
            }
        }
        FieldType::Nested(object) => {
            let nested = format!("{root_name}.{}", object.type_name);
            if !required && use_optionals {
                format!("java.util.Optional<{nested}>")
            } else {
                nested
            }
        }
    }
}
