use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Materialize the rendered content into a writable [`File`]
    fn to_file(&self, base: &Path) -> File {
        File::with_rules(self.path(base), self.render(), self.rules())
    }
}

async fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    tokio::fs::write(path, content)
        .await
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Read a file, treating a missing file as `None`.
async fn read_existing(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        // Unreadable or not UTF-8: fall through to a plain overwrite
        Err(e) if e.kind() == ErrorKind::InvalidData => Ok(None),
        Err(e) => Err(e).wrap_err_with(|| format!("failed to read '{}'", path.display())),
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had exactly this content
    Unchanged,
    /// File was skipped (already exists)
    Skipped,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::with_rules(path, content, FileRules::default())
    }

    /// Create a new file with explicit write rules
    pub fn with_rules(
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        rules: FileRules,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules,
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Write the file according to its rules.
    ///
    /// Existing files with identical content are left untouched so that
    /// repeated generation does not bump modification times.
    pub async fn write(&self) -> Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                if read_existing(&self.path).await?.as_deref() == Some(self.content.as_str()) {
                    return Ok(WriteResult::Unchanged);
                }
                write_file(&self.path, &self.content).await?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.exists().await {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.content).await?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for files that are only created once (e.g. config scaffolding)
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (scaffolding)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }
}
