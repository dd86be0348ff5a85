use yam_common::DiagnosticKind;

use crate::char_utils::{
    is_anchor_char, is_blank_or_breakz, is_flow, is_tag_char, is_uri_char, is_word_char,
};
use crate::source::ByteSource;
use crate::Lexer;

impl<S: ByteSource> Lexer<S> {
    /// Name following `&` or `*`. May be empty.
    pub(crate) fn read_anchor_name(&mut self) {
        while let Some(chr) = self.cursor.peek() {
            if !is_anchor_char(chr) {
                break;
            }
            self.cursor.get();
            self.buf.push(chr);
        }
    }

    /// Reads a tag whose leading `!` was already consumed.
    ///
    /// Tags are produced as written: `!<uri>`, `!!str`, `!e!foo` and `!local`.
    pub(crate) fn read_tag(&mut self) {
        if self.cursor.peek() == Some(b'<') {
            self.cursor.get();
            self.buf.extend_from_slice(b"!<");
            self.read_verbatim_tag();
        } else {
            self.read_shorthand_tag();
        }
    }

    fn read_verbatim_tag(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(b'>') => {
                    self.cursor.get();
                    self.buf.push(b'>');
                    return;
                }
                Some(chr) if is_uri_char(chr) => {
                    self.cursor.get();
                    self.buf.push(chr);
                }
                Some(_) => {
                    self.report_here(DiagnosticKind::InvalidTagSyntax);
                    return;
                }
                None => {
                    self.report_here(DiagnosticKind::UnterminatedVerbatimTag);
                    return;
                }
            }
        }
    }

    fn read_shorthand_tag(&mut self) {
        self.buf.push(b'!');
        // the handle is either `!`, `!!` or `!word!`
        let mut in_handle = true;
        while let Some(chr) = self.cursor.peek() {
            if in_handle && chr == b'!' {
                in_handle = false;
            } else if is_tag_char(chr) {
                in_handle &= is_word_char(chr);
            } else {
                break;
            }
            self.cursor.get();
            self.buf.push(chr);
        }

        let next = self.cursor.peek();
        if !is_blank_or_breakz(next) && !next.map_or(false, is_flow) {
            self.report_here(DiagnosticKind::InvalidTagSyntax);
        }
    }
}
