//! Recursive discovery of icon directories.

use std::{
    collections::HashSet,
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
};

use iconforge_codegen::IconNaming;
use iconforge_core::{DirectoryGroup, IconFile, VECTOR_EXTENSION};
use tracing::{debug, warn};

/// Outcome of one scan over the icons tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Directories with at least one icon, in visit order
    pub groups: Vec<DirectoryGroup>,
    /// Visited directories without icons
    pub empty_dirs: Vec<PathBuf>,
    /// Directories that were skipped
    pub warnings: Vec<ScanWarning>,
}

impl ScanResult {
    pub fn icon_count(&self) -> usize {
        self.groups.iter().map(|group| group.icons.len()).sum()
    }
}

/// A directory the scan had to skip, together with its subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub kind: ScanWarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarningKind {
    /// Listing failed (permissions, removed mid-scan, ...)
    Unreadable(String),
    /// Directory resolves to one already visited (symlink loop)
    Cycle,
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ScanWarningKind::Unreadable(reason) => write!(
                f,
                "Could not scan directory: {} ({})",
                self.path.display(),
                reason
            ),
            ScanWarningKind::Cycle => write!(
                f,
                "Skipping directory already visited through a symlink: {}",
                self.path.display()
            ),
        }
    }
}

/// Entries of one directory, split by kind and sorted by name.
struct Listing {
    files: Vec<(OsString, PathBuf)>,
    dirs: Vec<PathBuf>,
}

/// Walk `root` depth-first and group icons per directory.
///
/// A directory's own group is recorded before any of its subdirectories.
/// Unreadable directories and symlink loops are logged once and skipped
/// without aborting the rest of the walk.
pub async fn scan(root: &Path, naming: &IconNaming) -> ScanResult {
    walk(vec![root.to_path_buf()], naming).await
}

/// Drain `stack`, popping from the end.
async fn walk(mut stack: Vec<PathBuf>, naming: &IconNaming) -> ScanResult {
    let mut result = ScanResult::default();
    let mut visited: HashSet<PathBuf> = HashSet::new();

    while let Some(dir) = stack.pop() {
        let canonical = match tokio::fs::canonicalize(&dir).await {
            Ok(canonical) => canonical,
            Err(e) => {
                result.skip(dir, ScanWarningKind::Unreadable(e.to_string()));
                continue;
            }
        };
        if !visited.insert(canonical) {
            result.skip(dir, ScanWarningKind::Cycle);
            continue;
        }

        let listing = match list_directory(&dir).await {
            Ok(listing) => listing,
            Err(e) => {
                result.skip(dir, ScanWarningKind::Unreadable(e.to_string()));
                continue;
            }
        };

        let icons: Vec<IconFile> = listing
            .files
            .iter()
            .filter_map(|(name, path)| icon_file(name, path, naming))
            .collect();

        debug!(dir = %dir.display(), icons = icons.len(), "scanned directory");
        if icons.is_empty() {
            result.empty_dirs.push(dir);
        } else {
            result.groups.push(DirectoryGroup::new(dir, icons));
        }

        // Reversed so the stack yields subdirectories in listing order
        stack.extend(listing.dirs.into_iter().rev());
    }

    result
}

impl ScanResult {
    fn skip(&mut self, path: PathBuf, kind: ScanWarningKind) {
        let warning = ScanWarning { path, kind };
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}

async fn list_directory(dir: &Path) -> std::io::Result<Listing> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let mut file_type = entry.file_type().await?;
        if file_type.is_symlink() {
            match tokio::fs::metadata(&path).await {
                Ok(metadata) => file_type = metadata.file_type(),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "skipping dangling symlink");
                    continue;
                }
            }
        }

        if file_type.is_dir() {
            dirs.push(path);
        } else if file_type.is_file() {
            files.push((entry.file_name(), path));
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    dirs.sort();
    Ok(Listing { files, dirs })
}

fn icon_file(name: &OsString, path: &Path, naming: &IconNaming) -> Option<IconFile> {
    let file_name = Path::new(name);
    if file_name.extension()? != VECTOR_EXTENSION {
        return None;
    }
    let stem = file_name.file_stem()?.to_string_lossy();
    let file_name = name.to_string_lossy().into_owned();

    Some(IconFile {
        identifier: naming.identifier(&stem),
        relative_path: format!("./{}", file_name),
        absolute_path: path.to_path_buf(),
        file_name,
    })
}
