//! Generate operation - barrel regeneration and preview.

use eyre::Result;
use iconforge_engine::{IconForge, preview_all};

use super::display_path;
use crate::reports::{GenerateReport, PreviewFile, PreviewReport};

/// Execute one regeneration pass.
pub async fn generate(plugin: &IconForge) -> Result<GenerateReport> {
    let config = plugin.config();
    let root = &config.project_root;
    let report = plugin.build_start().await?;

    Ok(GenerateReport {
        icons_dir: display_path(root, config.icons_root()),
        unscanned: report.warnings.len(),
        collisions: report.collisions.len(),
        written: report
            .written
            .iter()
            .map(|path| display_path(root, path))
            .collect(),
        unchanged: report.unchanged.len(),
        removed: report
            .removed
            .iter()
            .map(|path| display_path(root, path))
            .collect(),
        icon_count: report.icon_count,
    })
}

/// Render every barrel without writing.
pub async fn preview(plugin: &IconForge) -> PreviewReport {
    let config = plugin.config();
    let (previews, collisions) = preview_all(config).await;

    PreviewReport {
        collisions: collisions.len(),
        files: previews
            .into_iter()
            .map(|preview| PreviewFile {
                path: display_path(&config.project_root, &preview.path),
                content: preview.content,
            })
            .collect(),
    }
}
