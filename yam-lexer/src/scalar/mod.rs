//! Readers for the four kinds of value-bearing tokens.
//!
//! Each reader is an `impl` block on [`crate::Lexer`] that appends the decoded bytes to the
//! lexer's scratch buffer. The first character of the token has already been consumed by the
//! dispatcher when a reader runs.

mod block;
mod plain;
mod props;
mod quoted;

/// Whitespace and line breaks seen since the last piece of content.
///
/// Blanks are only kept when more content follows on the same line. Line breaks fold: a single
/// one becomes a space, `n` consecutive ones become `n - 1` newlines.
#[derive(Default)]
pub(crate) struct Folding {
    whitespace: Vec<u8>,
    breaks: usize,
    /// Set by an escaped line break, whose break is dropped instead of folded into a space.
    escaped: bool,
}

impl Folding {
    pub(crate) fn blank(&mut self, chr: u8) {
        // blanks leading a continuation line are never content
        if self.breaks == 0 {
            self.whitespace.push(chr);
        }
    }

    pub(crate) fn newline(&mut self) {
        self.whitespace.clear();
        self.breaks += 1;
    }

    /// Line break that was escaped with `\`. Blanks before the backslash are kept.
    pub(crate) fn escaped_newline(&mut self, out: &mut Vec<u8>) {
        self.flush(out);
        self.breaks = 1;
        self.escaped = true;
    }

    pub(crate) fn has_breaks(&self) -> bool {
        self.breaks > 0
    }

    pub(crate) fn is_escaped(&self) -> bool {
        self.escaped
    }

    /// Writes out whatever separates the previous content from the next.
    pub(crate) fn flush(&mut self, out: &mut Vec<u8>) {
        match self.breaks {
            0 => out.extend_from_slice(&self.whitespace),
            1 if self.escaped => {}
            1 => out.push(b' '),
            n => out.extend(std::iter::repeat(b'\n').take(n - 1)),
        }
        self.whitespace.clear();
        self.breaks = 0;
        self.escaped = false;
    }
}
