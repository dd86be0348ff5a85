use std::io::Read;

use tracing::{debug, trace};
use yam_common::{
    Diagnostic, DiagnosticKind, Marker, TokenInfo, TokenKind, YamlError, YamlResult,
};

use crate::char_utils::{is_blank_or_break, is_blank_or_breakz};
use crate::comment::{comment_start, skip_comment};
use crate::cursor::ByteCursor;
use crate::source::{ByteSource, ReadSource, SliceSource};
use crate::LexerConfig;

/// Pull based tokenizer.
///
/// Every call to [`Lexer::next_token`] yields exactly one token. Block structure is not tracked
/// here: the caller keeps its own stack of indentation levels and passes the innermost one as
/// `reference_indent`, which is how multi-line scalars know where they end.
///
/// ```
/// use yam_lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new_from_str("key: value");
/// let key = lexer.next_token(0);
/// assert_eq!(key.kind, TokenKind::Scalar);
/// assert_eq!(lexer.value(), "key");
/// assert_eq!(lexer.next_token(0).kind, TokenKind::MapKeyDelimiter);
/// assert_eq!(lexer.next_token(0).indent, 5);
/// assert_eq!(lexer.value(), "value");
/// assert_eq!(lexer.next_token(0).kind, TokenKind::EndOfStream);
/// ```
pub struct Lexer<S> {
    pub(crate) cursor: ByteCursor<S>,
    pub(crate) config: LexerConfig,
    /// Bytes of the value being decoded.
    pub(crate) buf: Vec<u8>,
    value: String,
    /// Nesting depth of `{` and `[`. Only decides which characters end a plain scalar.
    pub(crate) flow_depth: u32,
    diagnostics: Vec<Diagnostic>,
}

impl<'input> Lexer<SliceSource<'input>> {
    #[must_use]
    pub fn new_from_str(input: &'input str) -> Self {
        Lexer::new(SliceSource::from(input))
    }

    /// Invalid UTF-8 in values is replaced with U+FFFD.
    #[must_use]
    pub fn new_from_bytes(input: &'input [u8]) -> Self {
        Lexer::new(SliceSource::from(input))
    }
}

impl<R: Read> Lexer<ReadSource<R>> {
    #[must_use]
    pub fn new_from_reader(reader: R) -> Self {
        Lexer::new(ReadSource::new(reader))
    }
}

impl<S: ByteSource> Lexer<S> {
    pub fn new(src: S) -> Self {
        Lexer::with_config(src, LexerConfig::default())
    }

    pub fn with_config(src: S, config: LexerConfig) -> Self {
        Lexer {
            cursor: ByteCursor::new(src),
            config,
            buf: Vec::new(),
            value: String::new(),
            flow_depth: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Reads the next token.
    ///
    /// `reference_indent` is the column of the innermost open construct. It only matters for
    /// scalars that can span lines. Once input is exhausted every call returns
    /// [`TokenKind::EndOfStream`].
    pub fn next_token(&mut self, reference_indent: u32) -> TokenInfo {
        loop {
            self.skip_whitespace();

            let indent = self.cursor.column();
            let start = self.cursor.marker();
            let prev = self.cursor.last();
            let Some(chr) = self.cursor.get() else {
                return self.emit(indent, TokenKind::EndOfStream);
            };

            let c_style = self.config.is_c_style_comments();
            if let Some(comment) = comment_start(&mut self.cursor, chr, prev, c_style) {
                if let Err(kind) = skip_comment(&mut self.cursor, comment) {
                    self.report(kind, start);
                }
                continue;
            }

            let kind = match chr {
                b'-' if is_blank_or_breakz(self.cursor.peek()) => TokenKind::BlockSeqEntry,
                b'?' if is_blank_or_breakz(self.cursor.peek()) => TokenKind::BlockMapEntry,
                b':' => TokenKind::MapKeyDelimiter,
                b'{' => {
                    self.flow_depth += 1;
                    TokenKind::FlowMapBegin
                }
                b'[' => {
                    self.flow_depth += 1;
                    TokenKind::FlowSeqBegin
                }
                b'}' => {
                    self.flow_depth = self.flow_depth.saturating_sub(1);
                    TokenKind::FlowMapEnd
                }
                b']' => {
                    self.flow_depth = self.flow_depth.saturating_sub(1);
                    TokenKind::FlowSeqEnd
                }
                b',' => TokenKind::FlowDelimiter,
                b'"' | b'\'' => {
                    self.buf.clear();
                    self.read_quoted_string(chr, chr == b'"', reference_indent);
                    self.finish_value();
                    TokenKind::Scalar
                }
                b'|' | b'>' => {
                    self.buf.clear();
                    self.read_block_scalar(chr == b'>', reference_indent);
                    self.finish_value();
                    TokenKind::Scalar
                }
                b'*' | b'&' => {
                    self.buf.clear();
                    self.read_anchor_name();
                    self.finish_value();
                    if chr == b'*' {
                        TokenKind::Alias
                    } else {
                        TokenKind::Anchor
                    }
                }
                b'!' => {
                    self.buf.clear();
                    self.read_tag();
                    self.finish_value();
                    TokenKind::Tag
                }
                _ => {
                    self.buf.clear();
                    self.read_plain_scalar(chr, reference_indent);
                    self.finish_value();
                    TokenKind::Scalar
                }
            };
            return self.emit(indent, kind);
        }
    }

    /// Decoded text of the most recent scalar, alias, anchor or tag.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Moves the decoded value out, leaving an empty one behind.
    pub fn take_value(&mut self) -> String {
        std::mem::take(&mut self.value)
    }

    /// Current position of the cursor.
    #[must_use]
    pub fn marker(&self) -> Marker {
        self.cursor.marker()
    }

    #[must_use]
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Consumes the lexer, failing if the input was cut short by an I/O error or if any
    /// diagnostic was collected.
    ///
    /// # Errors
    /// [`YamlError::Io`] first, then [`YamlError::Diagnostics`].
    pub fn finish(mut self) -> YamlResult<()> {
        if let Some(err) = self.cursor.source_mut().take_error() {
            return Err(YamlError::Io(err));
        }
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(YamlError::Diagnostics(self.diagnostics))
        }
    }

    pub(crate) fn report(&mut self, kind: DiagnosticKind, mark: Marker) {
        debug!("{kind} at {mark}");
        if self.config.is_collect_diagnostics() {
            self.diagnostics.push(Diagnostic::new(kind, mark));
        }
    }

    pub(crate) fn report_here(&mut self, kind: DiagnosticKind) {
        let mark = self.cursor.marker();
        self.report(kind, mark);
    }

    fn skip_whitespace(&mut self) {
        while let Some(chr) = self.cursor.peek() {
            if !is_blank_or_break(chr) {
                break;
            }
            self.cursor.get();
        }
    }

    /// Turns the scratch buffer into the current value, reusing the old value's allocation as
    /// the next buffer.
    fn finish_value(&mut self) {
        let mut bytes = std::mem::take(&mut self.value).into_bytes();
        bytes.clear();
        std::mem::swap(&mut bytes, &mut self.buf);
        self.value = match String::from_utf8(bytes) {
            Ok(value) => value,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        };
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn emit(&self, indent: u32, kind: TokenKind) -> TokenInfo {
        if kind.has_value() {
            trace!("{indent} {kind} {:?}", self.value);
        } else {
            trace!("{indent} {kind}");
        }
        TokenInfo::new(indent, kind)
    }
}
