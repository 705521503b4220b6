//! Emitted runtime helper methods.
//!
//! Required-field reads go through small private static helpers so that a
//! missing or mismatched value is recorded into the validator instead of
//! aborting construction at the first problem. Only helpers actually used
//! by the generated constructors are emitted, in a fixed canonical order.

use confgen_codegen::CodeBuilder;
use confgen_model::ScalarKind;

/// One emittable helper method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum HelperKind {
    RequireStr,
    RequireInt,
    RequireLong,
    RequireDouble,
    RequireBool,
    RequireDuration,
    ChildConfig,
}

impl HelperKind {
    pub(crate) fn for_scalar(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::String => HelperKind::RequireStr,
            ScalarKind::Int => HelperKind::RequireInt,
            ScalarKind::Long => HelperKind::RequireLong,
            ScalarKind::Double => HelperKind::RequireDouble,
            ScalarKind::Boolean => HelperKind::RequireBool,
            ScalarKind::Duration => HelperKind::RequireDuration,
        }
    }

    /// Emitted method name.
    pub(crate) fn method_name(&self) -> &'static str {
        match self {
            HelperKind::RequireStr => "$_requireStr",
            HelperKind::RequireInt => "$_requireInt",
            HelperKind::RequireLong => "$_requireLong",
            HelperKind::RequireDouble => "$_requireDouble",
            HelperKind::RequireBool => "$_requireBool",
            HelperKind::RequireDuration => "$_requireDuration",
            HelperKind::ChildConfig => "$_childConfig",
        }
    }

    fn return_type(&self) -> &'static str {
        match self {
            HelperKind::RequireStr => "java.lang.String",
            HelperKind::RequireInt => "int",
            HelperKind::RequireLong => "long",
            HelperKind::RequireDouble => "double",
            HelperKind::RequireBool => "boolean",
            HelperKind::RequireDuration => "java.time.Duration",
            HelperKind::ChildConfig => "com.typesafe.config.Config",
        }
    }

    fn config_getter(&self) -> &'static str {
        match self {
            HelperKind::RequireStr => "getString",
            HelperKind::RequireInt => "getInt",
            HelperKind::RequireLong => "getLong",
            HelperKind::RequireDouble => "getDouble",
            HelperKind::RequireBool => "getBoolean",
            HelperKind::RequireDuration => "getDuration",
            HelperKind::ChildConfig => "getConfig",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            HelperKind::RequireStr => "null",
            HelperKind::RequireInt => "0",
            HelperKind::RequireLong => "0L",
            HelperKind::RequireDouble => "0.0",
            HelperKind::RequireBool => "false",
            HelperKind::RequireDuration => "null",
            HelperKind::ChildConfig => "null",
        }
    }
}

/// Emit one helper method at the current indentation level.
pub(crate) fn emit_helper(b: CodeBuilder, kind: HelperKind) -> CodeBuilder {
    let name = kind.method_name();
    let ret = kind.return_type();
    let getter = kind.config_getter();
    let placeholder = kind.placeholder();

    let header = format!(
        "private static {ret} {name}(java.lang.String parentPath, com.typesafe.config.Config c, java.lang.String path, $ConfigValidator $v) {{"
    );

    b.block_with_close(&header, "}", |b| {
        let b = if kind == HelperKind::ChildConfig {
            // Absence of a child object is not reported here; the child's
            // own required fields report against the null config.
            b.block_with_close("if (c == null || !c.hasPath(path)) {", "}", |b| {
                b.line(&format!("return {placeholder};"))
            })
        } else {
            b.block_with_close("if (c == null || !c.hasPath(path)) {", "}", |b| {
                b.line("$v.missing(parentPath + path);")
                    .line(&format!("return {placeholder};"))
            })
        };
        b.block_with_close("try {", "} catch (com.typesafe.config.ConfigException e) {", |b| {
            b.line(&format!("return c.{getter}(path);"))
        })
        .indent()
        .line("$v.invalid(parentPath + path, e);")
        .line(&format!("return {placeholder};"))
        .dedent()
        .line("}")
    })
}

/// Emit the validator class that aggregates every missing or mismatched
/// required path into a single failure.
pub(crate) fn emit_validator(b: CodeBuilder) -> CodeBuilder {
    b.block_with_close("private static final class $ConfigValidator {", "}", |b| {
        b.line("private final java.util.List<java.lang.String> problems = new java.util.ArrayList<>();")
            .blank()
            .block_with_close("void missing(java.lang.String path) {", "}", |b| {
                b.line("problems.add(\"'\" + path + \"': missing required value\");")
            })
            .blank()
            .block_with_close(
                "void invalid(java.lang.String path, com.typesafe.config.ConfigException e) {",
                "}",
                |b| b.line("problems.add(\"'\" + path + \"': \" + e.getMessage());"),
            )
            .blank()
            .block_with_close("void validate() {", "}", |b| {
                b.block_with_close("if (!problems.isEmpty()) {", "}", |b| {
                    b.line("throw new com.typesafe.config.ConfigException.Generic(\"invalid configuration: \" + java.lang.String.join(\"; \", problems));")
                })
            })
    })
}
