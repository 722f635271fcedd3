//! Barrel module generator.

use std::path::{Path, PathBuf};

use iconforge_core::{
    BARREL_FILE_STEM, DirectoryGroup, GENERATED_MARKER, GeneratedFile, TRANSFORM_MARKER,
    to_slash_path,
};

use crate::{CodeBuilder, ast::Export};

/// Label used in the header when the barrel sits in the icons root itself.
const ROOT_LABEL: &str = "root";

/// Where barrels are written and how application code imports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarrelLocation {
    /// Absolute icons root
    pub icons_root: PathBuf,
    /// Icons directory as configured, relative to the project root
    pub icons_directory: String,
    /// Barrel extension without the dot (e.g. `ts`)
    pub extension: String,
}

impl BarrelLocation {
    /// Path of the barrel inside `dir`.
    pub fn barrel_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", BARREL_FILE_STEM, self.extension))
    }

    /// `dir` relative to the icons root with `/` separators; empty for the root.
    pub fn relative_dir(&self, dir: &Path) -> String {
        match dir.strip_prefix(&self.icons_root) {
            Ok(relative) => to_slash_path(relative),
            Err(_) => to_slash_path(dir),
        }
    }

    /// Public import path for the barrel in `dir`.
    pub fn import_path(&self, dir: &Path) -> String {
        let base = to_slash_path(Path::new(&self.icons_directory));
        let relative = self.relative_dir(dir);
        if relative.is_empty() {
            base
        } else {
            format!("{}/{}", base, relative)
        }
    }
}

/// The generated `index.<ext>` module re-exporting every icon of a directory.
pub struct Barrel<'a> {
    group: &'a DirectoryGroup,
    location: &'a BarrelLocation,
}

impl<'a> Barrel<'a> {
    pub fn new(group: &'a DirectoryGroup, location: &'a BarrelLocation) -> Self {
        Self { group, location }
    }

    /// Whether `content` was produced by this generator.
    pub fn is_generated(content: &str) -> bool {
        content.starts_with(GENERATED_MARKER)
    }

    fn header(&self, builder: CodeBuilder) -> CodeBuilder {
        let relative = self.location.relative_dir(&self.group.path);
        let display = if relative.is_empty() {
            ROOT_LABEL
        } else {
            relative.as_str()
        };
        let example = self.group.first_identifier().unwrap_or("Icon");

        builder
            .line(&format!("{}{}", GENERATED_MARKER, display))
            .comment("Do not edit manually - this file is regenerated when SVGs change")
            .comment("")
            .comment("Usage:")
            .comment(&format!(
                "import {{ {} }} from '{}';",
                example,
                self.location.import_path(&self.group.path)
            ))
    }
}

impl GeneratedFile for Barrel<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.location.barrel_path(base)
    }

    fn render(&self) -> String {
        self.header(CodeBuilder::new())
            .blank()
            .each(&self.group.icons, |builder, icon| {
                Export::new()
                    .from(format!("{}{}", icon.relative_path, TRANSFORM_MARKER))
                    .default_as(&icon.identifier)
                    .render(builder)
            })
            .build()
    }
}
