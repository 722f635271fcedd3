use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use iconforge_core::{FileRules, GeneratedFile, WriteResult};
use iconforge_manifest::{FILE_NAME, Manifest, TEMPLATE};

/// The starter `icon-forge.toml`, never overwritten.
struct ConfigFile;

impl GeneratedFile for ConfigFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(FILE_NAME)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        TEMPLATE.to_string()
    }
}

#[derive(Args)]
pub struct InitCommand {
    /// Project root to initialize
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

impl InitCommand {
    pub async fn run(&self) -> Result<()> {
        let file = ConfigFile.to_file(&self.root);
        match file.write().await? {
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", file.path().display());
            }
            WriteResult::Written | WriteResult::Unchanged => {
                println!("Created {}", file.path().display());
            }
        }

        let icons = self.root.join(Manifest::default().icons.directory);
        tokio::fs::create_dir_all(&icons)
            .await
            .wrap_err_with(|| format!("Failed to create '{}'", icons.display()))?;

        println!();
        println!("Next steps:");
        println!("  put SVG files under {}", icons.display());
        println!("  icon-forge generate");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_init_writes_template_once() {
        let temp = TempDir::new().unwrap();
        let command = InitCommand {
            root: temp.path().to_path_buf(),
        };

        command.run().await.unwrap();
        let config = temp.path().join(FILE_NAME);
        assert_eq!(fs::read_to_string(&config).unwrap(), TEMPLATE);
        assert!(temp.path().join("src/icons").is_dir());

        fs::write(&config, "[icons]\nprefix = \"app\"\n").unwrap();
        command.run().await.unwrap();
        assert_eq!(
            fs::read_to_string(&config).unwrap(),
            "[icons]\nprefix = \"app\"\n"
        );
    }
}
