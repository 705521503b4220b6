//! Code builder utility for generating properly indented code.

/// Indentation unit used by a [`CodeBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// 2-space indentation, the convention of the emitted Java sources.
    pub const JAVA: Indent = Indent("  ");
    /// 4-space indentation.
    pub const WIDE: Indent = Indent("    ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use confgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .line("class Foo {")
///     .indent()
///     .line("int x;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "class Foo {\n  int x;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (Java default).
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use confgen_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::java()
    ///     .block_with_close("void run() {", "}", |b| b.line("work();"))
    ///     .build();
    /// assert_eq!(code, "void run() {\n  work();\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
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

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::java().line("int x = 1;").build();
        assert_eq!(code, "int x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::java()
            .line("class Foo {")
            .indent()
            .line("int x;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "class Foo {\n  int x;\n}\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::java()
            .block_with_close("void run() {", "}", |b| b.line("work();"))
            .build();

        assert_eq!(code, "void run() {\n  work();\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::java()
            .line("package a.b;")
            .blank()
            .line("class Foo {}")
            .build();

        assert_eq!(code, "package a.b;\n\nclass Foo {}\n");
    }

    #[test]
    fn test_conditional() {
        let with_getter = CodeBuilder::java()
            .when(true, |b| b.line("int getX() { return x; }"))
            .build();
        let without_getter = CodeBuilder::java()
            .when(false, |b| b.line("int getX() { return x; }"))
            .build();

        assert_eq!(with_getter, "int getX() { return x; }\n");
        assert_eq!(without_getter, "");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::java()
            .line("enum Color {")
            .indent()
            .each(["RED", "GREEN", "BLUE"], |b, color| b.line(&format!("{},", color)))
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "enum Color {\n  RED,\n  GREEN,\n  BLUE,\n}\n");
    }

    #[test]
    fn test_wide_indent() {
        let code = CodeBuilder::new(Indent::WIDE)
            .line("class Foo {")
            .indent()
            .line("int x;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "class Foo {\n    int x;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::java().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }
}
