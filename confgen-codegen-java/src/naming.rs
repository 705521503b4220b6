//! Java-specific naming conventions.
//!
//! Template keys become Java field identifiers; the runtime lookup path
//! always uses the original key, so escaping here never changes what is
//! read from the configuration source.

use std::collections::HashSet;

use confgen_model::Field;

/// Java reserved words (JLS §3.9) plus literals that cannot be identifiers.
const JAVA_RESERVED: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

fn is_java_reserved(name: &str) -> bool {
    JAVA_RESERVED.contains(&name)
}

/// Turn a template key into a valid Java field identifier.
///
/// Invalid characters are replaced with `_`, a leading digit gets an
/// underscore prefix, and reserved words are prefixed with `_`.
pub fn field_identifier(key: &str) -> String {
    let mut ident: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if is_java_reserved(&ident) {
        ident.insert(0, '_');
    }
    ident
}

/// Java field identifiers for an object's fields, in field order.
///
/// Sanitization can collapse distinct sibling keys onto one identifier
/// (`a-b` and `a_b` both become `a_b`); colliding identifiers get the
/// smallest unused numeric suffix starting at 2, the same policy the
/// namespace applies to generated type names.
pub fn field_identifiers(fields: &[Field]) -> Vec<String> {
    let mut taken = HashSet::new();
    fields
        .iter()
        .map(|field| {
            let base = field_identifier(&field.name);
            let mut candidate = base.clone();
            let mut suffix = 2u32;
            while !taken.insert(candidate.clone()) {
                candidate = format!("{base}{suffix}");
                suffix += 1;
            }
            candidate
        })
        .collect()
}

/// Accessor method name for a field identifier (`port` -> `getPort`).
pub fn getter_name(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        None => "get".to_string(),
        Some(c) => format!("get{}{}", c.to_uppercase(), chars.as_str()),
    }
}

/// Render a key as a Java string literal for lookup paths.
pub fn string_literal(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    out.push('"');
    for c in key.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys_unchanged() {
        assert_eq!(field_identifier("server"), "server");
        assert_eq!(field_identifier("maxRetries"), "maxRetries");
    }

    #[test]
    fn test_invalid_characters_replaced() {
        assert_eq!(field_identifier("my-key"), "my_key");
        assert_eq!(field_identifier("my key"), "my_key");
    }

    #[test]
    fn test_leading_digit_prefixed() {
        assert_eq!(field_identifier("2fast"), "_2fast");
    }

    #[test]
    fn test_reserved_words_escaped() {
        assert_eq!(field_identifier("class"), "_class");
        assert_eq!(field_identifier("default"), "_default");
        assert_eq!(field_identifier("true"), "_true");
    }

    #[test]
    fn test_sibling_identifier_collisions_suffixed() {
        use confgen_model::{FieldType, ScalarKind};

        let fields: Vec<Field> = ["a-b", "a_b", "my key", "my_key"]
            .iter()
            .map(|name| Field {
                name: name.to_string(),
                ty: FieldType::Scalar(ScalarKind::Int),
                required: true,
            })
            .collect();
        assert_eq!(field_identifiers(&fields), vec!["a_b", "a_b2", "my_key", "my_key2"]);
    }

    #[test]
    fn test_getter_name() {
        assert_eq!(getter_name("port"), "getPort");
        assert_eq!(getter_name("server"), "getServer");
        assert_eq!(getter_name("_class"), "get_class");
    }

    #[test]
    fn test_string_literal_escaping() {
        assert_eq!(string_literal("plain"), "\"plain\"");
        assert_eq!(string_literal("with \"quote\""), "\"with \\\"quote\\\"\"");
        assert_eq!(string_literal("back\\slash"), "\"back\\\\slash\"");
    }
}
