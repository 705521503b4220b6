//! Java source emission for a resolved object-type tree.
//!
//! One call produces one self-contained compilation unit: the root accessor
//! type plus every nested accessor type as a direct static member, in
//! namespace-assignment order. Emission is a pure function of the resolved
//! tree and the options, so identical inputs yield byte-identical output.

use std::collections::BTreeSet;

use confgen_codegen::{CodeBuilder, GenOpts};
use confgen_model::{Field, FieldType, ObjectType};

use crate::{
    helpers::{HelperKind, emit_helper, emit_validator},
    naming::{field_identifiers, getter_name, string_literal},
    type_mapper::{config_getter, field_type},
};

/// Java code generator.
pub struct Generator {
    opts: GenOpts,
}

impl Generator {
    pub fn new(opts: GenOpts) -> Self {
        Self { opts }
    }

    /// Emit the complete compilation unit for a resolved root type.
    pub fn generate(&self, root: &ObjectType) -> String {
        if self.opts.generate_records {
            self.generate_records(root)
        } else {
            self.generate_classes(root)
        }
    }

    // =========================================================================
    // Class shape (default): public final fields, assignment constructor.
    // =========================================================================

    fn generate_classes(&self, root: &ObjectType) -> String {
        let mut helpers = BTreeSet::new();
        let root_name = root.type_name.as_str();

        let mut b = CodeBuilder::java()
            .line(&format!("package {};", self.opts.package_name))
            .blank()
            .line(&format!("public class {root_name} {{"))
            .indent();

        b = self.class_members(b, root, root_name);

        for nested in root.nested_types() {
            b = b.blank().line(&format!("public static class {} {{", nested.type_name)).indent();
            b = self.class_members(b, nested, root_name);
            b = b.blank();
            b = self.class_constructor(b, nested, root_name, false, &mut helpers);
            b = b.dedent().line("}");
        }

        b = b.blank();
        b = self.class_constructor(b, root, root_name, true, &mut helpers);
        b = self.emit_runtime_support(b, &helpers);
        b.dedent().line("}").build()
    }

    /// Field declarations and, when enabled, getter methods for one type.
    fn class_members(&self, b: CodeBuilder, object: &ObjectType, root_name: &str) -> CodeBuilder {
        let idents = field_identifiers(&object.fields);
        let b = b.each(object.fields.iter().zip(&idents), |b, (field, ident)| {
            let ty = self.field_type(field, root_name);
            b.line(&format!("public final {ty} {ident};"))
        });
        self.getters(b, object, root_name)
    }

    fn class_constructor(
        &self,
        b: CodeBuilder,
        object: &ObjectType,
        root_name: &str,
        at_root: bool,
        helpers: &mut BTreeSet<HelperKind>,
    ) -> CodeBuilder {
        let header = if at_root {
            format!("public {}(com.typesafe.config.Config c) {{", object.type_name)
        } else {
            format!(
                "{}(com.typesafe.config.Config c, java.lang.String parentPath, $ConfigValidator $v) {{",
                object.type_name
            )
        };

        let mut b = b.line(&header).indent();
        if at_root {
            b = b.line("final $ConfigValidator $v = new $ConfigValidator();");
        }
        for (field, ident) in object.fields.iter().zip(field_identifiers(&object.fields)) {
            let expr = self.read_expr(field, root_name, at_root, helpers);
            b = b.line(&format!("this.{ident} = {expr};"));
        }
        if at_root {
            b = b.line("$v.validate();");
        }
        b.dedent().line("}")
    }

    // =========================================================================
    // Record shape: immutable records, canonical-constructor delegation.
    // =========================================================================

    fn generate_records(&self, root: &ObjectType) -> String {
        let mut helpers = BTreeSet::new();
        let root_name = root.type_name.as_str();

        let mut b = CodeBuilder::java()
            .line(&format!("package {};", self.opts.package_name))
            .blank();
        b = self.record_declaration(b, root, root_name, true);

        for nested in root.nested_types() {
            b = b.blank();
            b = self.record_declaration(b, nested, root_name, false);
            b = self.record_constructor(b, nested, root_name, &mut helpers);
            b = self.getters(b, nested, root_name);
            b = b.dedent().line("}");
        }

        b = b
            .blank()
            .block_with_close(
                &format!("public {root_name}(com.typesafe.config.Config c) {{"),
                "}",
                |b| b.line("this(c, new $ConfigValidator());"),
            )
            .blank();
        b = self.record_root_constructor(b, root, root_name, &mut helpers);
        b = self.getters(b, root, root_name);
        b = self.emit_runtime_support(b, &helpers);
        b.dedent().line("}").build()
    }

    /// `public [static] record Name(<components>) {` with the builder left
    /// indented into the record body.
    fn record_declaration(
        &self,
        b: CodeBuilder,
        object: &ObjectType,
        root_name: &str,
        at_root: bool,
    ) -> CodeBuilder {
        let keyword = if at_root { "public record" } else { "public static record" };
        let name = &object.type_name;

        if object.fields.is_empty() {
            return b.line(&format!("{keyword} {name}() {{")).indent();
        }

        let idents = field_identifiers(&object.fields);
        let last = object.fields.len() - 1;
        b.line(&format!("{keyword} {name}("))
            .indent()
            .each(object.fields.iter().zip(&idents).enumerate(), |b, (i, (field, ident))| {
                let ty = self.field_type(field, root_name);
                let comma = if i == last { "" } else { "," };
                b.line(&format!("{ty} {ident}{comma}"))
            })
            .dedent()
            .line(") {")
            .indent()
    }

    /// Package-private `(Config, parentPath, $ConfigValidator)` constructor
    /// delegating to the canonical constructor.
    fn record_constructor(
        &self,
        b: CodeBuilder,
        object: &ObjectType,
        root_name: &str,
        helpers: &mut BTreeSet<HelperKind>,
    ) -> CodeBuilder {
        let header = format!(
            "{}(com.typesafe.config.Config c, java.lang.String parentPath, $ConfigValidator $v) {{",
            object.type_name
        );
        let b = b.line(&header).indent();
        let b = self.canonical_delegation(b, object, root_name, false, helpers);
        b.dedent().line("}")
    }

    /// Private root constructor: delegate to the canonical constructor, then
    /// fail as one aggregate if any required path was missing or mismatched.
    fn record_root_constructor(
        &self,
        b: CodeBuilder,
        root: &ObjectType,
        root_name: &str,
        helpers: &mut BTreeSet<HelperKind>,
    ) -> CodeBuilder {
        let header =
            format!("private {root_name}(com.typesafe.config.Config c, $ConfigValidator $v) {{");
        let b = b.line(&header).indent();
        let b = self.canonical_delegation(b, root, root_name, true, helpers);
        b.line("$v.validate();").dedent().line("}")
    }

    fn canonical_delegation(
        &self,
        b: CodeBuilder,
        object: &ObjectType,
        root_name: &str,
        at_root: bool,
        helpers: &mut BTreeSet<HelperKind>,
    ) -> CodeBuilder {
        if object.fields.is_empty() {
            return b.line("this();");
        }
        let exprs: Vec<String> = object
            .fields
            .iter()
            .map(|field| self.read_expr(field, root_name, at_root, helpers))
            .collect();
        let last = exprs.len() - 1;
        b.line("this(")
            .indent()
            .each(exprs.iter().enumerate(), |b, (i, expr)| {
                let comma = if i == last { "" } else { "," };
                b.line(&format!("{expr}{comma}"))
            })
            .dedent()
            .line(");")
    }

    // =========================================================================
    // Shared pieces.
    // =========================================================================

    fn field_type(&self, field: &Field, root_name: &str) -> String {
        field_type(&field.ty, field.required, self.opts.use_optionals, root_name)
    }

    /// Getter methods for one type, when enabled. Emitted for every shape;
    /// record getters delegate to the canonical accessors' backing fields.
    fn getters(&self, b: CodeBuilder, object: &ObjectType, root_name: &str) -> CodeBuilder {
        let enabled = self.opts.generate_getters && !object.fields.is_empty();
        b.when(enabled, |b| {
            let idents = field_identifiers(&object.fields);
            b.blank().each(object.fields.iter().zip(&idents), |b, (field, ident)| {
                let ty = self.field_type(field, root_name);
                let getter = getter_name(ident);
                b.line(&format!("public {ty} {getter}() {{ return {ident}; }}"))
            })
        })
    }

    /// The expression extracting one field from the configuration source.
    ///
    /// `at_root` selects the path-prefix form: the root constructor has no
    /// `parentPath` variable, so prefixes are inlined literals there.
    fn read_expr(
        &self,
        field: &Field,
        root_name: &str,
        at_root: bool,
        helpers: &mut BTreeSet<HelperKind>,
    ) -> String {
        let key_lit = string_literal(&field.name);
        let parent_arg = if at_root { "\"\"" } else { "parentPath" };

        match &field.ty {
            FieldType::Scalar(kind) => {
                if field.required {
                    let helper = HelperKind::for_scalar(*kind);
                    helpers.insert(helper);
                    format!("{}({parent_arg}, c, {key_lit}, $v)", helper.method_name())
                } else {
                    let getter = config_getter(*kind);
                    let present = format!("c.{getter}({key_lit})");
                    self.optional_expr(&key_lit, &present)
                }
            }
            FieldType::Nested(object) => {
                let child_path = self.child_path(&field.name, at_root);
                let ty = format!("{root_name}.{}", object.type_name);
                if field.required {
                    helpers.insert(HelperKind::ChildConfig);
                    format!(
                        "new {ty}($_childConfig({parent_arg}, c, {key_lit}, $v), {child_path}, $v)"
                    )
                } else {
                    let present = format!("new {ty}(c.getConfig({key_lit}), {child_path}, $v)");
                    self.optional_expr(&key_lit, &present)
                }
            }
        }
    }

    /// Guarded read for an optional field: absence yields the empty value of
    /// the chosen representation instead of a failure.
    fn optional_expr(&self, key_lit: &str, present: &str) -> String {
        if self.opts.use_optionals {
            format!(
                "c != null && c.hasPath({key_lit}) ? java.util.Optional.of({present}) : java.util.Optional.empty()"
            )
        } else {
            format!("c != null && c.hasPath({key_lit}) ? {present} : null")
        }
    }

    /// The `parentPath` argument passed down to a nested type's constructor.
    fn child_path(&self, key: &str, at_root: bool) -> String {
        let segment = string_literal(&format!("{key}."));
        if at_root { segment } else { format!("parentPath + {segment}") }
    }

    /// Used helper methods (canonical order) and the validator class.
    fn emit_runtime_support(&self, b: CodeBuilder, helpers: &BTreeSet<HelperKind>) -> CodeBuilder {
        let b = b.each(helpers.iter().copied(), |b, kind| emit_helper(b.blank(), kind));
        emit_validator(b.blank())
    }
}
