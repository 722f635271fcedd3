//! Manifest parsing from files and strings.

use std::str::FromStr;

use crate::{Error, Manifest, Result, error::SourceContext, file::FILE_NAME, validate};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, FILE_NAME)
    }
}

impl Manifest {
    /// Parse an icon-forge.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate::validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}
