//! Load operation - transform one marked import.

use std::path::Path;

use eyre::{Result, bail};
use iconforge_engine::IconForge;

use crate::reports::LoadReport;

/// Resolve `id` as the bundler would, then load it.
pub async fn load(plugin: &IconForge, id: &str, importer: Option<&Path>) -> Result<LoadReport> {
    let Some(resolved) = plugin.resolve_id(id, importer) else {
        bail!("'{}' is not an icon-forge import", id);
    };

    // Load failures are logged by the plugin and stay downcastable to `LoadError`
    match plugin.load(&resolved).await? {
        Some(module) => Ok(LoadReport {
            code: module.code,
            map: module.map,
        }),
        None => bail!("'{}' is not an icon-forge import", resolved),
    }
}

#[cfg(test)]
mod tests {
    use iconforge_manifest::Manifest;

    use super::*;

    #[tokio::test]
    async fn test_unmarked_id_is_rejected() {
        let plugin = IconForge::on_config_resolved("/app", &Manifest::default());
        let err = load(&plugin, "./heart.svg", None).await.unwrap_err();
        assert!(err.to_string().contains("not an icon-forge import"));
    }

    #[tokio::test]
    async fn test_load_failure_keeps_its_type() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("heart.svg"), "<svg/>").unwrap();

        let plugin = IconForge::on_config_resolved(temp.path(), &Manifest::default());
        let err = load(&plugin, "./heart.svg?icon-forge", Some(&temp.path().join("main.ts")))
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<iconforge_engine::LoadError>().is_some());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_load_with_command_transform() {
        use std::fs;

        let temp = tempfile::TempDir::new().unwrap();
        let svg = temp.path().join("heart.svg");
        fs::write(&svg, "<svg/>").unwrap();

        let manifest: Manifest = r#"
            [transform]
            command = ["cat"]
        "#
        .parse()
        .unwrap();
        let plugin = IconForge::on_config_resolved(temp.path(), &manifest);

        let report = load(
            &plugin,
            "./heart.svg?icon-forge",
            Some(&temp.path().join("main.ts")),
        )
        .await
        .unwrap();
        assert_eq!(report.code, "<svg/>");
        assert_eq!(report.map, None);
    }
}
