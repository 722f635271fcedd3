//! Parsing and validation of `icon-forge.toml`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod overrides;
mod parse;
mod validate;

pub use error::{Error, Result};
pub use file::{FILE_NAME, ForgeToml, TEMPLATE};
pub use manifest::{CollisionPolicy, CompileConfig, IconsConfig, Manifest, TransformConfig};
pub use overrides::Overrides;
