//! TypeScript export builder.

use crate::CodeBuilder;

/// A single `name as alias` entry inside `export { ... }`.
#[derive(Debug, Clone)]
struct Specifier {
    name: String,
    alias: String,
}

/// Builder for TypeScript export statements.
#[derive(Debug, Clone, Default)]
pub struct Export {
    from: Option<String>,
    named: Vec<Specifier>,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-export from another module.
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.from = Some(module.into());
        self
    }

    /// Export a named item under another name (`name as alias`).
    pub fn named_as(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.named.push(Specifier {
            name: name.into(),
            alias: alias.into(),
        });
        self
    }

    /// Re-export the default export of the source module under `alias`.
    pub fn default_as(self, alias: impl Into<String>) -> Self {
        self.named_as("default", alias)
    }

    /// Render the export to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let specifiers = self
            .named
            .iter()
            .map(|s| format!("{} as {}", s.name, s.alias))
            .collect::<Vec<_>>()
            .join(", ");

        let export_str = match (&self.from, self.named.is_empty()) {
            // Re-export all: export * from 'module'
            (Some(from), true) => format!("export * from '{}';", from),
            // Re-export named: export { a as b } from 'module'
            (Some(from), false) => format!("export {{ {} }} from '{}';", specifiers, from),
            // Export named: export { a as b }
            (None, false) => format!("export {{ {} }};", specifiers),
            (None, true) => return builder,
        };

        builder.line(&export_str)
    }
}
