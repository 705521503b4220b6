//! Java code generator for the confgen config-class generator.
//!
//! Consumes the resolved object-type tree from `confgen-model` and emits a
//! single self-contained Java compilation unit: a root accessor type plus
//! one nested accessor type per object level, constructed from a
//! `com.typesafe.config.Config` value at runtime.
//!
//! The emitted constructor aggregates every missing or mismatched required
//! key into one failure; optional fields substitute the empty value of
//! their representation instead.

mod generator;
mod helpers;
mod naming;
mod type_mapper;

use confgen_model::ResolveOpts;
use confgen_template::Template;
use miette::Diagnostic;
use thiserror::Error;

pub use generator::Generator;
pub use type_mapper::{boxed_type, field_type, raw_type};

// Re-exported so callers only need this crate for a full compilation.
pub use confgen_codegen::GenOpts;

/// Any failure of the template-to-source compilation.
///
/// Transparent over the per-stage diagnostics; the compiler never partially
/// emits source on failure.
#[derive(Debug, Error, Diagnostic)]
pub enum CompileError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Template(#[from] Box<confgen_template::Error>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] Box<confgen_model::Error>),
}

/// Compile template text straight to Java source.
pub fn compile(template_text: &str, opts: &GenOpts) -> Result<String, CompileError> {
    let template = Template::from_str_named(template_text, "<template>")?;
    compile_template(&template, opts)
}

/// Compile an already-parsed template to Java source.
pub fn compile_template(template: &Template, opts: &GenOpts) -> Result<String, CompileError> {
    let resolve_opts = ResolveOpts {
        root_name: opts.class_name.clone(),
        all_required: opts.all_required,
        use_durations: opts.use_durations,
    };
    let root = confgen_model::resolve(template, &resolve_opts)?;
    Ok(Generator::new(opts.clone()).generate(&root))
}
