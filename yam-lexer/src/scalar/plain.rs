use crate::char_utils::{is_blank_or_break, is_blank_or_breakz, is_flow};
use crate::scalar::Folding;
use crate::source::ByteSource;
use crate::Lexer;

impl<S: ByteSource> Lexer<S> {
    /// Reads an unquoted scalar whose first character `first` was already consumed.
    ///
    /// Stops before `: `, `//`, a comment, a flow indicator inside flow collections, or a line
    /// that dedents to `reference_indent` or less. Trailing blanks and breaks are dropped.
    pub(crate) fn read_plain_scalar(&mut self, first: u8, reference_indent: u32) {
        let in_flow = self.flow_depth > 0;
        let mut folding = Folding::default();
        self.buf.push(first);

        while let Some(chr) = self.cursor.peek() {
            match chr {
                b' ' | b'\t' => {
                    self.cursor.get();
                    folding.blank(chr);
                }
                b'\n' => {
                    self.cursor.get();
                    folding.newline();
                }
                _ => {
                    if folding.has_breaks() && self.cursor.column() <= reference_indent {
                        break;
                    }
                    if chr == b'#' && self.cursor.last().map_or(true, is_blank_or_break) {
                        break;
                    }
                    if in_flow && is_flow(chr) {
                        break;
                    }

                    self.cursor.get();
                    let ends_scalar = match chr {
                        b':' => is_blank_or_breakz(self.cursor.peek()),
                        b'/' => self.config.is_c_style_comments() && self.cursor.peek() == Some(b'/'),
                        _ => false,
                    };
                    if ends_scalar {
                        self.cursor.unget();
                        break;
                    }

                    folding.flush(&mut self.buf);
                    self.buf.push(chr);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use yam_common::TokenKind;

    use crate::{Lexer, LexerConfig};

    fn plain(input: &str, reference: u32) -> (String, Lexer<crate::SliceSource<'_>>) {
        let mut lexer = Lexer::new_from_str(input);
        let tok = lexer.next_token(reference);
        assert_eq!(tok.kind, TokenKind::Scalar);
        (lexer.value().to_string(), lexer)
    }

    #[test]
    fn test_stops_at_key_delimiter() {
        let (value, mut lexer) = plain("key: value", 0);
        assert_eq!(value, "key");
        let delim = lexer.next_token(0);
        assert_eq!(delim.kind, TokenKind::MapKeyDelimiter);
        assert_eq!(delim.indent, 3);
        let next = lexer.next_token(0);
        assert_eq!(next.indent, 5);
        assert_eq!(lexer.value(), "value");
    }

    #[test]
    fn test_colon_inside_scalar() {
        assert_eq!(plain("a:b c", 0).0, "a:b c");
        assert_eq!(plain("key:", 0).0, "key");
        assert_eq!(plain("key:\n  x", 0).0, "key");
    }

    #[test]
    fn test_multiline_fold() {
        assert_eq!(plain("one  \n  two\n\n  three  \n", 0).0, "one two\nthree");
    }

    #[test]
    fn test_dedent_ends_scalar() {
        let (value, mut lexer) = plain("one\n  two\nthree", 0);
        assert_eq!(value, "one two");
        let next = lexer.next_token(0);
        assert_eq!(next.indent, 0);
        assert_eq!(lexer.value(), "three");
    }

    #[test]
    fn test_comments_end_scalar() {
        assert_eq!(plain("value # comment", 0).0, "value");
        assert_eq!(plain("value#not comment", 0).0, "value#not comment");
        assert_eq!(plain("value // comment", 0).0, "value");
        assert_eq!(plain("http://host", 0).0, "http:");
        assert_eq!(plain("one\n  # comment\n  two", 0).0, "one");
    }

    #[test]
    fn test_c_style_disabled() {
        let config = LexerConfig::default().c_style_comments(false);
        let mut lexer = Lexer::with_config(crate::SliceSource::from("http://host"), config);
        lexer.next_token(0);
        assert_eq!(lexer.value(), "http://host");
    }

    #[test]
    fn test_flow_terminators() {
        let mut lexer = Lexer::new_from_str("[a b, c]");
        assert_eq!(lexer.next_token(0).kind, TokenKind::FlowSeqBegin);
        assert_eq!(lexer.next_token(0).kind, TokenKind::Scalar);
        assert_eq!(lexer.value(), "a b");
        assert_eq!(lexer.next_token(0).kind, TokenKind::FlowDelimiter);
        assert_eq!(lexer.next_token(0).kind, TokenKind::Scalar);
        assert_eq!(lexer.value(), "c");
        assert_eq!(lexer.next_token(0).kind, TokenKind::FlowSeqEnd);

        // flow indicators are plain characters in block context
        assert_eq!(plain("a,b]", 0).0, "a,b]");
    }

    #[test]
    fn test_indicators_without_blank() {
        assert_eq!(plain("-1", 0).0, "-1");
        assert_eq!(plain("?x", 0).0, "?x");
    }
}
