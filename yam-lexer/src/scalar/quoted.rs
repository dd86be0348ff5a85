use yam_common::DiagnosticKind;

use crate::char_utils::{as_hex, is_blank_or_break};
use crate::scalar::Folding;
use crate::source::ByteSource;
use crate::Lexer;

impl<S: ByteSource> Lexer<S> {
    /// Reads a single (`escape == false`) or double quoted scalar up to and including `end`.
    pub(crate) fn read_quoted_string(&mut self, end: u8, escape: bool, reference_indent: u32) {
        let start = self.cursor.marker();
        let mut folding = Folding::default();

        loop {
            let Some(chr) = self.cursor.peek() else {
                self.report(DiagnosticKind::UnterminatedQuotedString, start);
                return;
            };

            // a line continued with `\` may not dedent past the enclosing construct
            if folding.is_escaped()
                && chr != end
                && !is_blank_or_break(chr)
                && self.cursor.column() <= reference_indent
            {
                self.report(DiagnosticKind::UnterminatedQuotedString, start);
                return;
            }

            self.cursor.get();
            match chr {
                b'\'' if chr == end && !escape && self.cursor.peek() == Some(b'\'') => {
                    self.cursor.get();
                    folding.flush(&mut self.buf);
                    self.buf.push(b'\'');
                }
                c if c == end => {
                    folding.flush(&mut self.buf);
                    return;
                }
                b'\\' if escape => match self.cursor.get() {
                    Some(b'\n') => folding.escaped_newline(&mut self.buf),
                    Some(code) => {
                        folding.flush(&mut self.buf);
                        self.read_escape(code);
                    }
                    None => {
                        self.report(DiagnosticKind::UnterminatedQuotedString, start);
                        return;
                    }
                },
                b' ' | b'\t' => folding.blank(chr),
                b'\n' => folding.newline(),
                c => {
                    folding.flush(&mut self.buf);
                    self.buf.push(c);
                }
            }
        }
    }

    /// Decodes the escape sequence whose code character (the one after `\`) was just consumed.
    fn read_escape(&mut self, code: u8) {
        match code {
            b'0' => self.buf.push(b'\0'),
            b'a' => self.buf.push(b'\x07'),
            b'b' => self.buf.push(b'\x08'),
            b't' | b'\t' => self.buf.push(b'\t'),
            b'n' => self.buf.push(b'\n'),
            b'v' => self.buf.push(b'\x0b'),
            b'f' => self.buf.push(b'\x0c'),
            b'r' => self.buf.push(b'\r'),
            b'e' => self.buf.push(b'\x1b'),
            b' ' | b'"' | b'/' | b'\\' => self.buf.push(code),
            b'N' => self.push_code_point(0x85),
            b'_' => self.push_code_point(0xA0),
            b'L' => self.push_code_point(0x2028),
            b'P' => self.push_code_point(0x2029),
            b'x' => self.read_hex_escape(2),
            b'u' => self.read_hex_escape(4),
            b'U' => self.read_hex_escape(8),
            _ => {
                self.report_here(DiagnosticKind::InvalidEscapeSequence);
                self.buf.push(code);
            }
        }
    }

    /// Reads exactly `width` hex digits and appends the code point they spell as UTF-8.
    fn read_hex_escape(&mut self, width: usize) {
        let mut value = 0u32;
        for _ in 0..width {
            match self.cursor.peek().and_then(as_hex) {
                Some(digit) => {
                    self.cursor.get();
                    value = (value << 4) | digit;
                }
                None => {
                    self.report_here(DiagnosticKind::InvalidEscapeSequence);
                    self.buf.extend_from_slice(REPLACEMENT);
                    return;
                }
            }
        }
        self.push_code_point(value);
    }

    fn push_code_point(&mut self, value: u32) {
        match char::from_u32(value) {
            Some(chr) => {
                let mut utf8 = [0u8; 4];
                self.buf
                    .extend_from_slice(chr.encode_utf8(&mut utf8).as_bytes());
            }
            None => {
                self.report_here(DiagnosticKind::InvalidEscapeSequence);
                self.buf.extend_from_slice(REPLACEMENT);
            }
        }
    }
}

/// U+FFFD encoded as UTF-8.
const REPLACEMENT: &[u8] = "\u{FFFD}".as_bytes();

#[cfg(test)]
mod test {
    use yam_common::{DiagnosticKind, TokenKind};

    use crate::Lexer;

    fn quoted(input: &str, reference: u32) -> (String, Vec<DiagnosticKind>) {
        let mut lexer = Lexer::new_from_str(input);
        let tok = lexer.next_token(reference);
        assert_eq!(tok.kind, TokenKind::Scalar);
        let kinds = lexer.diagnostics().iter().map(|d| d.kind).collect();
        (lexer.take_value(), kinds)
    }

    #[test]
    fn test_single_quote_doubling() {
        assert_eq!(quoted("'it''s'", 0).0, "it's");
        assert_eq!(quoted(r"'back\slash'", 0).0, r"back\slash");
    }

    #[test]
    fn test_c_escapes() {
        let (value, diags) = quoted(r#""\0\a\b\t\n\v\f\r\e""#, 0);
        assert_eq!(value, "\0\x07\x08\t\n\x0b\x0c\r\x1b");
        assert!(diags.is_empty());
        assert_eq!(quoted(r#""\"\\\/\ ""#, 0).0, "\"\\/ ");
    }

    #[test]
    fn test_named_escapes() {
        assert_eq!(
            quoted(r#""\N\_\L\P""#, 0).0,
            "\u{85}\u{A0}\u{2028}\u{2029}"
        );
    }

    #[test]
    fn test_hex_boundaries() {
        let cases = [
            (r#""\x7F""#, "\u{7F}"),
            (r#""\x80""#, "\u{80}"),
            (r#""\u07FF""#, "\u{7FF}"),
            (r#""\u0800""#, "\u{800}"),
            (r#""\uFFFF""#, "\u{FFFF}"),
            (r#""\U00010000""#, "\u{10000}"),
            (r#""\U0010ffff""#, "\u{10FFFF}"),
        ];
        for (input, expected) in cases {
            let (value, diags) = quoted(input, 0);
            assert_eq!(value, expected, "Error in case: {input}");
            assert!(diags.is_empty(), "Error in case: {input}");
        }
    }

    #[test]
    fn test_invalid_escapes() {
        let (value, diags) = quoted(r#""a\qb""#, 0);
        assert_eq!(value, "aqb");
        assert_eq!(diags, vec![DiagnosticKind::InvalidEscapeSequence]);

        let (value, diags) = quoted(r#""\x4""#, 0);
        assert_eq!(value, "\u{FFFD}");
        assert_eq!(diags, vec![DiagnosticKind::InvalidEscapeSequence]);

        let (value, diags) = quoted(r#""\uD800""#, 0);
        assert_eq!(value, "\u{FFFD}");
        assert_eq!(diags, vec![DiagnosticKind::InvalidEscapeSequence]);
    }

    #[test]
    fn test_folding() {
        assert_eq!(quoted("\"abc\ndef\"", 0).0, "abc def");
        assert_eq!(quoted("\"abc\n\ndef\"", 0).0, "abc\ndef");
        assert_eq!(quoted("\"abc   \n    def  \"", 0).0, "abc def  ");
        assert_eq!(quoted("'one\n  two\n\n\n  three'", 0).0, "one two\n\nthree");
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(quoted("\"abc \\\n    def\"", 0).0, "abc def");
        assert_eq!(quoted("\"abc\\\n\n  def\"", 0).0, "abc\ndef");
    }

    #[test]
    fn test_continuation_dedent_ends_string() {
        let mut lexer = Lexer::new_from_str("\"abc\\\n  def\"");
        lexer.next_token(2);
        assert_eq!(lexer.value(), "abc");
        assert_eq!(
            lexer.diagnostics()[0].kind,
            DiagnosticKind::UnterminatedQuotedString
        );
        let next = lexer.next_token(0);
        assert_eq!(next.indent, 2);
        assert_eq!(next.kind, TokenKind::Scalar);
    }

    #[test]
    fn test_unterminated() {
        let (value, diags) = quoted("\"never closed  ", 0);
        assert_eq!(value, "never closed");
        assert_eq!(diags, vec![DiagnosticKind::UnterminatedQuotedString]);

        let (_, diags) = quoted("\"dangling\\", 0);
        assert_eq!(diags, vec![DiagnosticKind::UnterminatedQuotedString]);
    }

    #[test]
    fn test_cursor_after_quote() {
        let mut lexer = Lexer::new_from_str("\"a\": b");
        lexer.next_token(0);
        assert_eq!(lexer.value(), "a");
        let delim = lexer.next_token(0);
        assert_eq!(delim.kind, TokenKind::MapKeyDelimiter);
        assert_eq!(delim.indent, 3);
    }
}
