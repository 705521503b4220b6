//! Template loading from files and strings.

use std::{path::Path, str::FromStr};

use crate::{
    Error, Result,
    error::SourceContext,
    parser,
    raw::RawObject,
};

/// A parsed template: the raw keyed tree plus its source context.
///
/// Built once per compilation and immutable thereafter.
#[derive(Debug, Clone)]
pub struct Template {
    source: SourceContext,
    root: RawObject,
}

impl Template {
    /// Parse a template file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_named(&content, &path.display().to_string())
    }

    /// Parse a template from a string with a custom filename for error
    /// reporting.
    pub fn from_str_named(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let root = parser::parse(&source)?;
        Ok(Self { source, root })
    }

    /// The root object (top-level fields in template order).
    pub fn root(&self) -> &RawObject {
        &self.root
    }

    /// The source context, for attaching later diagnostics to the template
    /// text.
    pub fn source(&self) -> &SourceContext {
        &self.source
    }
}

impl FromStr for Template {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_named(s, "<template>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let template: Template = "test { port: \"int\" }".parse().unwrap();
        assert_eq!(template.root().len(), 1);
        assert_eq!(template.source().filename(), "<template>");
    }

    #[test]
    fn test_from_file_missing() {
        let err = Template::from_file("/nonexistent/dir/app.conf").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
