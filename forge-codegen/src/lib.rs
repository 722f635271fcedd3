//! Barrel source generation for icon-forge.
//!
//! # Module Organization
//!
//! - [`CodeBuilder`] - line-oriented builder used by every rendered file
//! - [`ast`] - TypeScript statement builders
//! - [`naming`] - identifier synthesis and collision detection
//! - [`Barrel`] - the generated `index.<ext>` module for one directory

pub mod ast;
mod barrel;
mod code_builder;
pub mod naming;

pub use barrel::{Barrel, BarrelLocation};
pub use code_builder::CodeBuilder;
pub use naming::{Collision, IconNaming, find_collisions, synthesize};
