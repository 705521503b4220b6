use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model resolution (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown type '{annotation}' for key '{path}'")]
    #[diagnostic(
        code(confgen::unknown_type),
        help(
            "valid types are: string, int, long, double, boolean, duration; append '?' to mark the field optional"
        )
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type annotation")]
        span: SourceSpan,
        path: String,
        annotation: String,
    },

    /// Should not occur under the documented collision policy; raised only
    /// when the namespace's internal uniqueness contract is broken.
    #[error("generated type name '{name}' for '{path}' violates the naming invariant")]
    #[diagnostic(
        code(confgen::naming_invariant),
        help("this is an internal error in confgen; please report it with the template")
    )]
    NamingInvariant { name: String, path: String },
}
