//! Manifest types for icon-forge.toml files.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

/// Root manifest for icon-forge.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Icon discovery and naming
    #[serde(default)]
    pub icons: IconsConfig,

    /// External SVG to component transform
    #[serde(default)]
    pub transform: TransformConfig,

    /// Compilation of transformed components into host modules
    #[serde(default)]
    pub compile: CompileConfig,
}

/// `[icons]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconsConfig {
    /// Icons root, relative to the project root
    pub directory: String,
    pub prefix: String,
    pub suffix: String,
    /// Barrel file extension, without the dot
    pub extension: String,
    pub collisions: CollisionPolicy,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            directory: "src/icons".to_string(),
            prefix: String::new(),
            suffix: "Icon".to_string(),
            extension: "ts".to_string(),
            collisions: CollisionPolicy::default(),
        }
    }
}

/// What to do when two icons in one directory map to the same export name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Skip that directory's barrel and report the collision
    #[default]
    Error,
    /// Emit the duplicate exports as-is
    Allow,
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::Error => "error",
            CollisionPolicy::Allow => "allow",
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(CollisionPolicy::Error),
            "allow" => Ok(CollisionPolicy::Allow),
            _ => Err(format!(
                "unknown collision policy '{}', expected 'error' or 'allow'",
                s
            )),
        }
    }
}

/// `[transform]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    /// Program and arguments; reads SVG on stdin, writes component source on stdout
    pub command: Option<Vec<String>>,
    /// Opaque options forwarded to the transform
    pub options: IndexMap<String, toml::Value>,
}

impl TransformConfig {
    /// Options as JSON, in declaration order.
    pub fn options_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.options
                .iter()
                .map(|(key, value)| (key.clone(), toml_to_json(value)))
                .collect(),
        )
    }
}

fn toml_to_json(value: &toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s.clone()),
        toml::Value::Integer(i) => serde_json::Value::from(*i),
        toml::Value::Float(f) => serde_json::Value::from(*f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(*b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(items) => items.iter().map(toml_to_json).collect(),
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(key, value)| (key.clone(), toml_to_json(value)))
                .collect(),
        ),
    }
}

/// `[compile]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    /// Program and arguments; reads component source on stdin, writes module code on stdout
    pub command: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_policy_from_str() {
        assert_eq!(
            CollisionPolicy::from_str("error").unwrap(),
            CollisionPolicy::Error
        );
        assert_eq!(
            CollisionPolicy::from_str("Allow").unwrap(),
            CollisionPolicy::Allow
        );
        assert!(CollisionPolicy::from_str("rename").is_err());
    }

    #[test]
    fn test_collision_policy_display() {
        assert_eq!(CollisionPolicy::Error.to_string(), "error");
        assert_eq!(CollisionPolicy::Allow.to_string(), "allow");
    }

    #[test]
    fn test_icons_defaults() {
        let icons = IconsConfig::default();
        assert_eq!(icons.directory, "src/icons");
        assert_eq!(icons.prefix, "");
        assert_eq!(icons.suffix, "Icon");
        assert_eq!(icons.extension, "ts");
        assert_eq!(icons.collisions, CollisionPolicy::Error);
    }

    #[test]
    fn test_options_json_preserves_order() {
        let transform: TransformConfig = toml::from_str(
            r##"
            [options]
            typescript = true
            icon = "1em"
            replaceAttrValues = { "#000" = "currentColor" }
            "##,
        )
        .unwrap();

        let json = transform.options_json();
        assert_eq!(
            json.to_string(),
            r##"{"typescript":true,"icon":"1em","replaceAttrValues":{"#000":"currentColor"}}"##
        );
    }
}
