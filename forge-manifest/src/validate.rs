//! Validation of manifest values that the type system cannot express.

use miette::SourceSpan;

use crate::{Manifest, Result, error::SourceContext};

/// Find the span of `key = value` assignments, pointing at the key.
///
/// The search starts after the `[section]` header when one is present, so the
/// same key in different tables resolves to the right one.
pub(crate) fn find_key_span(src: &str, section: &str, key: &str) -> Option<SourceSpan> {
    let header = format!("[{}]", section);
    let offset = src.find(&header).map(|pos| pos + header.len()).unwrap_or(0);
    let rest = &src[offset..];

    rest.lines()
        .scan(offset, |line_start, line| {
            let start = *line_start;
            *line_start += line.len() + 1;
            Some((start, line))
        })
        .find_map(|(start, line)| {
            let trimmed = line.trim_start();
            let indent = line.len() - trimmed.len();
            let after_key = trimmed.strip_prefix(key)?;
            after_key
                .trim_start()
                .starts_with('=')
                .then(|| SourceSpan::from((start + indent, key.len())))
        })
}

/// Validate an identifier prefix or suffix.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_affix(value: &str, leading: bool) -> Option<&'static str> {
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Some("value contains characters that cannot appear in an export name");
    }

    if leading && value.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Some("a prefix starting with a digit produces invalid export names");
    }

    None
}

/// Validate a barrel file extension.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_extension(extension: &str) -> Option<&'static str> {
    if extension.is_empty() {
        return Some("barrel extension cannot be empty");
    }
    if extension.starts_with('.') {
        return Some("barrel extension must be given without the leading dot");
    }
    if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some("barrel extension must be alphanumeric");
    }
    None
}

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let icons = &manifest.icons;
    let span = |section: &str, key: &str| find_key_span(ctx.src(), section, key);

    if icons.directory.trim().is_empty() {
        return Err(ctx.validation_error(
            "icons directory cannot be empty",
            span("icons", "directory"),
        ));
    }

    for (key, value, leading) in [("prefix", &icons.prefix, true), ("suffix", &icons.suffix, false)]
    {
        if let Some(reason) = validate_affix(value, leading) {
            return Err(ctx.invalid_affix_error(value, key, reason, span("icons", key)));
        }
    }

    if let Some(reason) = validate_extension(&icons.extension) {
        return Err(ctx.validation_error(reason, span("icons", "extension")));
    }

    for (section, command) in [
        ("transform", &manifest.transform.command),
        ("compile", &manifest.compile.command),
    ] {
        if command.as_ref().is_some_and(|argv| argv.is_empty()) {
            return Err(ctx.validation_error(
                format!("{} command cannot be empty", section),
                span(section, "command"),
            ));
        }
    }

    Ok(())
}
