//! Core operations.
//!
//! This module contains the business logic for icon-forge commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod load;

use std::path::Path;

pub use generate::{generate, preview};
pub use load::load;

/// `path` relative to `base` when possible, with `/` separators.
pub(crate) fn display_path(base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    iconforge_core::to_slash_path(relative)
}
