//! Code builder utility for generating line-oriented source.

/// Fluent API for building generated source text.
///
/// # Example
///
/// ```
/// use iconforge_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .comment("Generated")
///     .blank()
///     .line("export {};")
///     .build();
///
/// assert_eq!(code, "// Generated\n\nexport {};\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code.
    pub fn line(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `//` line comment. An empty text renders a bare `//`.
    pub fn comment(mut self, text: &str) -> Self {
        self.buffer.push_str("//");
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::new().line("export {};").build();
        assert_eq!(code, "export {};\n");
    }

    #[test]
    fn test_comment() {
        let code = CodeBuilder::new().comment("Usage:").comment("").build();
        assert_eq!(code, "// Usage:\n//\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::new()
            .each(["a", "b"], |b, name| b.line(&format!("export {{ {} }};", name)))
            .build();

        assert_eq!(code, "export { a };\nexport { b };\n");
    }
}
