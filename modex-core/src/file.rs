use std::path::{Path, PathBuf};

use eyre::Result;

use crate::Dialect;

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Resolve the destination path for a generated index file.
///
/// An explicit destination is used as given, except that an existing
/// directory receives an `index.<ext>` inside it. With no destination the
/// index lands in the current directory.
pub fn resolve_dest(dest: Option<&Path>, dialect: Dialect) -> PathBuf {
    let index_name = format!("index.{}", dialect.file_extension());
    match dest {
        Some(path) if path.is_dir() => path.join(index_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(index_name),
    }
}

/// A file to be written to disk.
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
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

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file to disk, replacing any previous version.
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}
