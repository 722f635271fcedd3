//! Scanning, barrel regeneration and bundler integration for icon-forge.
//!
//! - [`scan`] walks the icons tree and groups icons per directory
//! - [`regenerate_all`] writes one barrel per icon directory and removes stale ones
//! - [`RegenerationQueue`] serializes regeneration runs requested by the watcher
//! - [`IconForge`] exposes the bundler-facing hooks

mod config;
mod error;
mod plugin;
mod regenerate;
mod scanner;
mod transform;
mod watch;

pub use config::ResolvedConfig;
pub use error::{LoadError, TransformError};
pub use plugin::{IconForge, LoadedModule};
pub use regenerate::{
    BarrelPreview, DirectoryCollision, RegenerationReport, preview_all, regenerate_all,
};
pub use scanner::{ScanResult, ScanWarning, ScanWarningKind, scan};
pub use transform::{
    CommandCompiler, CommandTransform, CompiledModule, ModuleCompiler, Passthrough,
    UnconfiguredTransform, VectorTransform,
};
pub use watch::{
    RegenerationQueue, RequestOutcome, WatchAdapter, WatchEvent, WatchEventKind, WatchFilter,
    WatchHandle,
};
