//! Names and markers shared between the generator and the bundler hooks.

/// Query-like suffix appended to icon imports inside a barrel.
///
/// Imports carrying it are routed through the vector transform instead of
/// the bundler's default asset handling.
pub const TRANSFORM_MARKER: &str = "?icon-forge";

/// Extension (without dot) of the files treated as icons. Case-sensitive.
pub const VECTOR_EXTENSION: &str = "svg";

/// File stem of a generated barrel; the extension comes from configuration.
pub const BARREL_FILE_STEM: &str = "index";

/// First line prefix of every generated barrel.
pub const GENERATED_MARKER: &str = "// Auto-generated barrel file for ";
