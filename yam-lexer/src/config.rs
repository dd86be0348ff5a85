/// Switches for lexer behavior that goes beyond plain YAML.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    c_style_comments: bool,
    collect_diagnostics: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            c_style_comments: true,
            collect_diagnostics: true,
        }
    }
}

impl LexerConfig {
    /// Recognize `// line` and `/* block */` comments in addition to `#`.
    #[must_use]
    pub fn c_style_comments(mut self, enabled: bool) -> Self {
        self.c_style_comments = enabled;
        self
    }

    /// Keep diagnostics for [`crate::Lexer::diagnostics`]. When off they are only logged.
    #[must_use]
    pub fn collect_diagnostics(mut self, enabled: bool) -> Self {
        self.collect_diagnostics = enabled;
        self
    }

    #[must_use]
    pub fn is_c_style_comments(&self) -> bool {
        self.c_style_comments
    }

    #[must_use]
    pub fn is_collect_diagnostics(&self) -> bool {
        self.collect_diagnostics
    }
}
