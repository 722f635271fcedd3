//! Full-tree barrel regeneration.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use iconforge_codegen::{Barrel, Collision, find_collisions};
use iconforge_core::{DirectoryGroup, GeneratedFile, WriteResult};
use iconforge_manifest::CollisionPolicy;
use tracing::{error, info};

use crate::{ResolvedConfig, ScanWarning, scan};

/// Colliding export names that kept a directory's barrel from being written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryCollision {
    pub directory: PathBuf,
    pub collisions: Vec<Collision>,
}

/// What one regeneration pass did.
#[derive(Debug, Default)]
pub struct RegenerationReport {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    /// Stale generated barrels deleted from directories without icons
    pub removed: Vec<PathBuf>,
    pub collisions: Vec<DirectoryCollision>,
    pub warnings: Vec<ScanWarning>,
    pub icon_count: usize,
}

impl RegenerationReport {
    /// Number of barrels present after the pass.
    pub fn barrel_count(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A barrel rendered without touching the filesystem.
#[derive(Debug, Clone)]
pub struct BarrelPreview {
    pub path: PathBuf,
    pub content: String,
    pub icon_count: usize,
}

/// Regenerate every barrel under the icons root.
///
/// Safe to call repeatedly: with no filesystem changes the second pass writes
/// nothing. A write or delete failure stops the pass and is returned; barrels
/// already written stay in place.
pub async fn regenerate_all(config: &ResolvedConfig) -> Result<RegenerationReport> {
    let scanned = scan(config.icons_root(), &config.naming).await;
    let mut report = RegenerationReport {
        icon_count: scanned.icon_count(),
        warnings: scanned.warnings,
        ..Default::default()
    };

    for group in &scanned.groups {
        if let Some(collision) = check_collisions(config, group) {
            report.collisions.push(collision);
            continue;
        }

        let file = Barrel::new(group, &config.location).to_file(&group.path);
        match file.write().await? {
            WriteResult::Written => {
                info!(
                    "Generated barrel: {} ({} icons)",
                    config.display_relative(file.path()),
                    group.icons.len()
                );
                report.written.push(file.path().to_path_buf());
            }
            WriteResult::Unchanged | WriteResult::Skipped => {
                report.unchanged.push(file.path().to_path_buf());
            }
        }
    }

    for dir in &scanned.empty_dirs {
        let barrel = config.location.barrel_path(dir);
        if remove_stale_barrel(&barrel).await? {
            info!("Removed stale barrel: {}", config.display_relative(&barrel));
            report.removed.push(barrel);
        }
    }

    info!(
        "Regenerated {} barrels ({} written, {} unchanged, {} removed) from {} icons",
        report.barrel_count(),
        report.written.len(),
        report.unchanged.len(),
        report.removed.len(),
        report.icon_count
    );
    Ok(report)
}

/// Render every barrel a regeneration pass would write, without writing.
///
/// Directories skipped for collisions are left out of the preview.
pub async fn preview_all(config: &ResolvedConfig) -> (Vec<BarrelPreview>, Vec<DirectoryCollision>) {
    let scanned = scan(config.icons_root(), &config.naming).await;
    let mut previews = Vec::new();
    let mut collisions = Vec::new();

    for group in &scanned.groups {
        if let Some(collision) = check_collisions(config, group) {
            collisions.push(collision);
            continue;
        }
        let barrel = Barrel::new(group, &config.location);
        previews.push(BarrelPreview {
            path: barrel.path(&group.path),
            content: barrel.render(),
            icon_count: group.icons.len(),
        });
    }

    (previews, collisions)
}

fn check_collisions(config: &ResolvedConfig, group: &DirectoryGroup) -> Option<DirectoryCollision> {
    if config.collisions == CollisionPolicy::Allow {
        return None;
    }
    let collisions = find_collisions(group);
    if collisions.is_empty() {
        return None;
    }

    for collision in &collisions {
        error!(
            "Duplicate export '{}' in {}: {}",
            collision.identifier,
            config.display_relative(group.path()),
            collision.files.join(", ")
        );
    }
    Some(DirectoryCollision {
        directory: group.path.clone(),
        collisions,
    })
}

/// Delete `path` if it is a barrel this tool generated.
async fn remove_stale_barrel(path: &Path) -> Result<bool> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::InvalidData) => {
            return Ok(false);
        }
        Err(e) => return Err(e).wrap_err_with(|| format!("failed to read '{}'", path.display())),
    };
    if !Barrel::is_generated(&content) {
        return Ok(false);
    }

    tokio::fs::remove_file(path)
        .await
        .wrap_err_with(|| format!("failed to remove stale barrel '{}'", path.display()))?;
    Ok(true)
}
