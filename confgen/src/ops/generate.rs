//! Generate operation - placing compiled source into the package hierarchy.

use std::path::{Path, PathBuf};

use confgen_core::GeneratedFile;
use eyre::{Context, Result};

/// Options for the generate operation.
pub(crate) struct GenerateOptions<'a> {
    /// Output directory the package hierarchy is created under.
    pub output_dir: &'a Path,
    /// Target package, in dotted form.
    pub package_name: &'a str,
    /// Name of the root accessor type.
    pub class_name: &'a str,
    /// Whether to preview without writing the file.
    pub dry_run: bool,
}

/// Outcome of one generate run.
pub(crate) enum GenerateReport {
    Preview { path: PathBuf, content: String },
    Written { path: PathBuf },
}

/// Place compiled source at `<out>/<package as directories>/<Class>.java`.
///
/// The write creates parent directories and always fully replaces any
/// previous file, so nothing from an earlier run survives.
pub(crate) fn generate(code: String, opts: GenerateOptions) -> Result<GenerateReport> {
    let path = output_path(opts.output_dir, opts.package_name, opts.class_name);

    if opts.dry_run {
        return Ok(GenerateReport::Preview { path, content: code });
    }

    GeneratedFile::new(&path, code)
        .write()
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;

    Ok(GenerateReport::Written { path })
}

/// `com.example.cfg` + `AppConfig` under `out` becomes
/// `out/com/example/cfg/AppConfig.java`.
fn output_path(output_dir: &Path, package_name: &str, class_name: &str) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    for segment in package_name.split('.').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push(format!("{class_name}.java"));
    path
}
