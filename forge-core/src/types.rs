use std::path::{Path, PathBuf};

/// A single icon source file discovered by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    /// File name including extension (e.g. `heart.svg`)
    pub file_name: String,
    /// Export name synthesized from the file stem
    pub identifier: String,
    /// Import path relative to the owning directory (e.g. `./heart.svg`)
    pub relative_path: String,
    pub absolute_path: PathBuf,
}

/// A directory that contains at least one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryGroup {
    pub path: PathBuf,
    /// Icons in directory-listing order
    pub icons: Vec<IconFile>,
}

impl DirectoryGroup {
    pub fn new(path: impl Into<PathBuf>, icons: Vec<IconFile>) -> Self {
        Self {
            path: path.into(),
            icons,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Identifier of the first icon, used for the usage example
    pub fn first_identifier(&self) -> Option<&str> {
        self.icons.first().map(|icon| icon.identifier.as_str())
    }
}
