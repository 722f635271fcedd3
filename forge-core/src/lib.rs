//! Core utilities and types for the icon-forge barrel generator.
//!
//! This crate provides fundamental types and utilities used across
//! the icon-forge workspace.

mod consts;
mod file;
mod types;
mod utils;

pub use consts::{BARREL_FILE_STEM, GENERATED_MARKER, TRANSFORM_MARKER, VECTOR_EXTENSION};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Scan model
pub use types::{DirectoryGroup, IconFile};
// String utilities
pub use utils::{normalize_path, split_words, to_pascal_case, to_slash_path};
