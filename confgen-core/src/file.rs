use std::path::{Path, PathBuf};

use eyre::Result;

/// A generated source file waiting to be written.
///
/// Generated config classes are never user-edited stubs, so writing always
/// fully replaces any previous content: nothing from an earlier run may
/// survive in the output file.
pub struct GeneratedFile {
    path: PathBuf,
    content: String,
}

impl GeneratedFile {
    /// Create a new file with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed.
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}

/// Write `content` to `path`, creating parent directories and truncating
/// any existing file.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("Out.java");
        let file = GeneratedFile::new(&path, "content");
        file.write().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_write_overwrites_fully() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Out.java");
        GeneratedFile::new(&path, "first version, quite long").write().unwrap();
        GeneratedFile::new(&path, "second").write().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
