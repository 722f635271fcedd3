//! Bundler-facing hooks.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use eyre::Result;
use iconforge_core::{TRANSFORM_MARKER, normalize_path};
use iconforge_manifest::Manifest;
use tracing::{debug, error, info};

use crate::{
    CommandCompiler, CommandTransform, LoadError, ModuleCompiler, Passthrough, RegenerationReport,
    ResolvedConfig, UnconfiguredTransform, VectorTransform, WatchHandle, regenerate_all,
};

/// Module produced for a transform-marked import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModule {
    pub code: String,
    pub map: Option<String>,
}

/// The icon-forge plugin as seen by a bundler.
///
/// Holds the resolved configuration and the two pipeline stages. Cheap to
/// clone; clones share both.
#[derive(Clone)]
pub struct IconForge {
    config: Arc<ResolvedConfig>,
    transform: Arc<dyn VectorTransform>,
    compiler: Arc<dyn ModuleCompiler>,
}

impl IconForge {
    /// Resolve the icons root against `project_root` and set up the pipeline
    /// from the manifest's `[transform]` and `[compile]` sections.
    pub fn on_config_resolved(project_root: impl Into<PathBuf>, manifest: &Manifest) -> Self {
        let config = ResolvedConfig::resolve(project_root, manifest);
        info!("Icons directory: {}", config.icons_root().display());
        debug!("Collision policy: {}", config.collisions);

        let transform: Arc<dyn VectorTransform> = match CommandTransform::from_config(&config.transform) {
            Some(command) => Arc::new(command),
            None => Arc::new(UnconfiguredTransform),
        };
        let compiler: Arc<dyn ModuleCompiler> = match CommandCompiler::from_config(&config.compile) {
            Some(command) => Arc::new(command),
            None => Arc::new(Passthrough),
        };

        Self {
            config: Arc::new(config),
            transform,
            compiler,
        }
    }

    pub fn with_transform(mut self, transform: impl VectorTransform + 'static) -> Self {
        self.transform = Arc::new(transform);
        self
    }

    pub fn with_compiler(mut self, compiler: impl ModuleCompiler + 'static) -> Self {
        self.compiler = Arc::new(compiler);
        self
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Regenerate every barrel before a build.
    pub async fn build_start(&self) -> Result<RegenerationReport> {
        info!("Scanning for SVG directories and generating barrels...");
        regenerate_all(&self.config).await.inspect_err(|e| {
            error!("Error generating barrel files: {:#}", e);
        })
    }

    /// Resolve an import id carrying the transform marker.
    ///
    /// Relative ids are anchored next to the importing module. Marker ids
    /// without an importer, or not starting with `./`, pass through as-is.
    /// Anything without the marker is left to other resolvers.
    pub fn resolve_id(&self, id: &str, importer: Option<&Path>) -> Option<String> {
        if !id.contains(TRANSFORM_MARKER) {
            return None;
        }
        match importer {
            Some(importer) if id.starts_with("./") => {
                let dir = importer.parent().unwrap_or(Path::new(""));
                Some(normalize_path(&dir.join(id)).to_string_lossy().into_owned())
            }
            _ => Some(id.to_string()),
        }
    }

    /// Load a transform-marked module: read the SVG, transform it and
    /// compile the result.
    ///
    /// Returns `Ok(None)` for ids this plugin does not own.
    pub async fn load(&self, id: &str) -> Result<Option<LoadedModule>, LoadError> {
        if !id.contains(TRANSFORM_MARKER) {
            return Ok(None);
        }
        let path = PathBuf::from(id.replacen(TRANSFORM_MARKER, "", 1));

        self.load_path(id, &path).await.map(Some).inspect_err(|e| {
            error!("Error transforming SVG {}: {}", path.display(), error_chain(e));
        })
    }

    async fn load_path(&self, id: &str, path: &Path) -> Result<LoadedModule, LoadError> {
        let svg = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let component = self
            .transform
            .transform(&svg, path)
            .await
            .map_err(|source| LoadError::Transform {
                path: path.to_path_buf(),
                source,
            })?;

        let compiled = self
            .compiler
            .compile(&component, id)
            .await
            .map_err(|source| LoadError::Compile {
                id: id.to_string(),
                source,
            })?;

        Ok(LoadedModule {
            code: compiled.code,
            map: compiled.map,
        })
    }

    /// Start watching the icons root; regeneration runs until the handle is dropped.
    pub async fn on_dev_server_start(&self) -> Result<WatchHandle> {
        WatchHandle::start(Arc::clone(&self.config)).inspect_err(|e| {
            error!("Failed to start icon watcher: {:#}", e);
        })
    }
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use std::fs;

    use async_trait::async_trait;
    use tempfile::TempDir;

    use super::*;
    use crate::{CompiledModule, TransformError};

    struct Uppercase;

    #[async_trait]
    impl VectorTransform for Uppercase {
        async fn transform(&self, svg: &str, _path: &Path) -> Result<String, TransformError> {
            Ok(format!("export default `{}`;", svg.to_uppercase()))
        }
    }

    struct Tagged;

    #[async_trait]
    impl ModuleCompiler for Tagged {
        async fn compile(&self, source: &str, id: &str) -> Result<CompiledModule, TransformError> {
            Ok(CompiledModule {
                code: format!("/* {} */\n{}", id, source),
                map: Some("{}".to_string()),
            })
        }
    }

    fn plugin() -> IconForge {
        IconForge::on_config_resolved("/app", &Manifest::default())
    }

    #[test]
    fn test_resolve_id_relative_to_importer() {
        let resolved = plugin().resolve_id(
            "./heart.svg?icon-forge",
            Some(Path::new("/app/src/icons/basic/index.ts")),
        );
        assert_eq!(
            resolved,
            Some(
                Path::new("/app/src/icons/basic/heart.svg?icon-forge")
                    .to_string_lossy()
                    .into_owned()
            )
        );
    }

    #[test]
    fn test_resolve_id_without_importer_passes_through() {
        assert_eq!(
            plugin().resolve_id("./heart.svg?icon-forge", None),
            Some("./heart.svg?icon-forge".to_string())
        );
        assert_eq!(
            plugin().resolve_id("/abs/heart.svg?icon-forge", Some(Path::new("/app/main.ts"))),
            Some("/abs/heart.svg?icon-forge".to_string())
        );
    }

    #[test]
    fn test_resolve_id_ignores_unmarked_ids() {
        assert_eq!(
            plugin().resolve_id("./heart.svg", Some(Path::new("/app/main.ts"))),
            None
        );
    }

    #[tokio::test]
    async fn test_load_ignores_unmarked_ids() {
        assert_eq!(plugin().load("/app/main.ts").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_runs_both_stages() {
        let temp = TempDir::new().unwrap();
        let svg = temp.path().join("heart.svg");
        fs::write(&svg, "<svg/>").unwrap();
        let id = format!("{}?icon-forge", svg.display());

        let module = plugin()
            .with_transform(Uppercase)
            .with_compiler(Tagged)
            .load(&id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(module.code, format!("/* {} */\nexport default `<SVG/>`;", id));
        assert_eq!(module.map.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_read_error() {
        let err = plugin()
            .with_transform(Uppercase)
            .load("/definitely/missing.svg?icon-forge")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[tokio::test]
    async fn test_load_without_transform_fails() {
        let temp = TempDir::new().unwrap();
        let svg = temp.path().join("heart.svg");
        fs::write(&svg, "<svg/>").unwrap();

        let err = plugin()
            .load(&format!("{}?icon-forge", svg.display()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Transform {
                source: TransformError::NotConfigured { .. },
                ..
            }
        ));
    }
}
