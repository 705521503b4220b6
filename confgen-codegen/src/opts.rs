//! Generation options.

/// Immutable configuration snapshot for one compilation.
///
/// Constructed once from the caller's settings and threaded read-only
/// through resolution and generation. The code-shape flags are independent
/// decisions; generators compose them rather than branching on the full
/// cross-product.
#[derive(Debug, Clone)]
pub struct GenOpts {
    /// Target package of the emitted source.
    pub package_name: String,
    /// Name of the root accessor type.
    pub class_name: String,
    /// Force every field required, ignoring `?` suffixes.
    pub all_required: bool,
    /// Emit one `getX()` accessor method per field.
    pub generate_getters: bool,
    /// Emit immutable record-shaped types instead of field-holding classes.
    pub generate_records: bool,
    /// Represent optional fields as an optional wrapper instead of a
    /// nullable raw type.
    pub use_optionals: bool,
    /// Represent `duration` fields as first-class duration values instead
    /// of millisecond numbers.
    pub use_durations: bool,
}

impl GenOpts {
    /// Create options with the default code shape (final-field classes,
    /// no getters, nullable optionals, millisecond durations).
    pub fn new(package_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
            all_required: false,
            generate_getters: false,
            generate_records: false,
            use_optionals: false,
            use_durations: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = GenOpts::new("com.test.config", "TestConfig");
        assert_eq!(opts.package_name, "com.test.config");
        assert_eq!(opts.class_name, "TestConfig");
        assert!(!opts.all_required);
        assert!(!opts.generate_getters);
        assert!(!opts.generate_records);
        assert!(!opts.use_optionals);
        assert!(!opts.use_durations);
    }
}
