use std::path::{Path, PathBuf};

use iconforge_codegen::{BarrelLocation, IconNaming};
use iconforge_core::normalize_path;
use iconforge_manifest::{CollisionPolicy, CompileConfig, Manifest, TransformConfig};

/// Configuration with the icons root resolved against the project root.
///
/// Built once per plugin instance and shared by reference with every
/// component; nothing in the engine reads configuration from anywhere else.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub project_root: PathBuf,
    pub naming: IconNaming,
    pub location: BarrelLocation,
    pub collisions: CollisionPolicy,
    pub transform: TransformConfig,
    pub compile: CompileConfig,
}

impl ResolvedConfig {
    /// Resolve `manifest` against `project_root`.
    pub fn resolve(project_root: impl Into<PathBuf>, manifest: &Manifest) -> Self {
        let project_root = project_root.into();
        let icons = &manifest.icons;
        let icons_root = normalize_path(&project_root.join(&icons.directory));

        Self {
            project_root,
            naming: IconNaming::new(&icons.prefix, &icons.suffix),
            location: BarrelLocation {
                icons_root,
                icons_directory: icons.directory.clone(),
                extension: icons.extension.clone(),
            },
            collisions: icons.collisions,
            transform: manifest.transform.clone(),
            compile: manifest.compile.clone(),
        }
    }

    /// Absolute icons root.
    pub fn icons_root(&self) -> &Path {
        &self.location.icons_root
    }

    /// `path` relative to the icons root, for log messages.
    pub fn display_relative(&self, path: &Path) -> String {
        path.strip_prefix(self.icons_root())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = ResolvedConfig::resolve("/app", &Manifest::default());
        assert_eq!(config.icons_root(), Path::new("/app/src/icons"));
        assert_eq!(config.naming, IconNaming::new("", "Icon"));
        assert_eq!(config.location.extension, "ts");
        assert_eq!(config.collisions, CollisionPolicy::Error);
    }

    #[test]
    fn test_resolve_normalizes_directory() {
        let mut manifest = Manifest::default();
        manifest.icons.directory = "./assets/../ui/icons".to_string();

        let config = ResolvedConfig::resolve("/app", &manifest);
        assert_eq!(config.icons_root(), Path::new("/app/ui/icons"));
        assert_eq!(config.location.icons_directory, "./assets/../ui/icons");
    }

    #[test]
    fn test_absolute_directory_wins() {
        let mut manifest = Manifest::default();
        manifest.icons.directory = "/shared/icons".to_string();

        let config = ResolvedConfig::resolve("/app", &manifest);
        assert_eq!(config.icons_root(), Path::new("/shared/icons"));
    }

    #[test]
    fn test_display_relative() {
        let config = ResolvedConfig::resolve("/app", &Manifest::default());
        assert_eq!(
            config.display_relative(Path::new("/app/src/icons/basic/heart.svg")),
            Path::new("basic").join("heart.svg").display().to_string()
        );
    }
}
