//! Export-name synthesis for icons.

use iconforge_core::{DirectoryGroup, to_pascal_case};
use indexmap::IndexMap;

/// Build the export name for an icon.
///
/// Prefix, base name and suffix are each converted to PascalCase and joined
/// in that order. A base name made only of punctuation contributes nothing.
///
/// ```
/// use iconforge_codegen::synthesize;
///
/// assert_eq!(synthesize("arrow-left", "", "Icon"), "ArrowLeftIcon");
/// assert_eq!(synthesize("star", "app", "Icon"), "AppStarIcon");
/// ```
pub fn synthesize(base_name: &str, prefix: &str, suffix: &str) -> String {
    [prefix, base_name, suffix]
        .iter()
        .map(|part| to_pascal_case(part))
        .collect()
}

/// Prefix and suffix applied to every icon export name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconNaming {
    pub prefix: String,
    pub suffix: String,
}

impl IconNaming {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Export name for a file stem.
    pub fn identifier(&self, stem: &str) -> String {
        synthesize(stem, &self.prefix, &self.suffix)
    }
}

impl Default for IconNaming {
    fn default() -> Self {
        Self::new("", "Icon")
    }
}

/// Several icons in one directory that map to the same export name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub identifier: String,
    /// File names sharing the identifier, in listing order
    pub files: Vec<String>,
}

/// Find export names used by more than one icon in a directory.
///
/// Collisions are returned in order of the first icon involved.
pub fn find_collisions(group: &DirectoryGroup) -> Vec<Collision> {
    let mut by_identifier: IndexMap<&str, Vec<String>> = IndexMap::new();
    for icon in &group.icons {
        by_identifier
            .entry(icon.identifier.as_str())
            .or_default()
            .push(icon.file_name.clone());
    }

    by_identifier
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(identifier, files)| Collision {
            identifier: identifier.to_string(),
            files,
        })
        .collect()
}
