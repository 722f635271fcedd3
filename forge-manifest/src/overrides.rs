//! Command-line values that take precedence over `icon-forge.toml`.

use miette::SourceSpan;

use crate::{
    CollisionPolicy, Manifest, Result,
    error::SourceContext,
    validate::validate_affix,
};

/// Label used as the source name when an override is rejected.
const SOURCE_NAME: &str = "command line";

/// `[icons]` values given as flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub icons_dir: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Already parsed by the flag, so it needs no validation here
    pub collisions: Option<CollisionPolicy>,
}

impl Overrides {
    /// Rebuild the flags as text, with the span of each value.
    fn to_source(&self) -> (String, Vec<(&'static str, &str, SourceSpan)>) {
        let mut src = String::new();
        let mut spans = Vec::new();
        for (flag, value) in [
            ("icons-dir", &self.icons_dir),
            ("prefix", &self.prefix),
            ("suffix", &self.suffix),
        ] {
            let Some(value) = value else { continue };
            if !src.is_empty() {
                src.push(' ');
            }
            src.push_str("--");
            src.push_str(flag);
            src.push(' ');
            spans.push((flag, value.as_str(), SourceSpan::from((src.len(), value.len()))));
            src.push_str(value);
        }
        (src, spans)
    }
}

impl Manifest {
    /// Apply command-line overrides, validating them like file values.
    pub fn apply_overrides(&mut self, overrides: &Overrides) -> Result<()> {
        let (src, spans) = overrides.to_source();
        let ctx = SourceContext::new(src, SOURCE_NAME);

        for (flag, value, span) in spans {
            match flag {
                "icons-dir" => {
                    if value.trim().is_empty() {
                        return Err(ctx.validation_error("icons directory cannot be empty", Some(span)));
                    }
                    self.icons.directory = value.to_string();
                }
                "prefix" | "suffix" => {
                    let leading = flag == "prefix";
                    if let Some(reason) = validate_affix(value, leading) {
                        return Err(ctx.invalid_affix_error(value, flag, reason, Some(span)));
                    }
                    if leading {
                        self.icons.prefix = value.to_string();
                    } else {
                        self.icons.suffix = value.to_string();
                    }
                }
                _ => {}
            }
        }
        if let Some(policy) = overrides.collisions {
            self.icons.collisions = policy;
        }
        Ok(())
    }
}
