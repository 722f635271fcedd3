use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Error, Manifest, Result};

/// Default configuration file name, looked up in the project root.
pub const FILE_NAME: &str = "icon-forge.toml";

/// Starter configuration written by `icon-forge init`. Parses to the defaults.
pub const TEMPLATE: &str = r#"# icon-forge configuration

[icons]
# Icons root, relative to the project root
directory = "src/icons"
prefix = ""
suffix = "Icon"
# Extension of the generated index file in every icon directory
extension = "ts"
# "error" skips a directory whose icons map to the same export name,
# "allow" writes the duplicate exports anyway
collisions = "error"

[transform]
# Reads SVG markup on stdin and prints component source on stdout.
# ICON_FORGE_FILE holds the SVG path, ICON_FORGE_OPTIONS the options as JSON.
# command = ["npx", "@svgr/cli", "--jsx-runtime", "automatic"]

[transform.options]

[compile]
# Reads component source on stdin and prints module code on stdout.
# command = ["npx", "esbuild", "--loader=jsx"]
"#;

/// Represents an icon-forge.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct ForgeToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ForgeToml {
    /// Open and parse an icon-forge.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Open an icon-forge.toml file, falling back to defaults when it does not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match Self::open(path) {
            Err(e) if matches!(&*e, Error::Io { source, .. } if source.kind() == ErrorKind::NotFound) => {
                Ok(Self {
                    path: path.to_path_buf(),
                    content: String::new(),
                    manifest: Manifest::default(),
                })
            }
            other => other,
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the configuration came from defaults rather than a file.
    pub fn is_default(&self) -> bool {
        self.content.is_empty()
    }

    /// Take ownership of the parsed manifest.
    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }
}
