use yam_common::Marker;

use crate::char_utils::is_utf8_continuation;
use crate::source::ByteSource;

/// Reads normalized characters from a [`ByteSource`] while keeping track of position.
///
/// `\r\n` and lone `\r` are both read as `\n`. Column counts characters, not bytes, and is reset
/// after every newline. One byte of pushback is available through [`ByteCursor::unget`].
pub struct ByteCursor<S> {
    src: S,
    mark: Marker,
    pending: Option<u8>,
    last: Option<u8>,
    /// `last` and `mark` as they were before the most recent `get`, restored by `unget`.
    prior: Option<(Option<u8>, Marker)>,
}

impl<S: ByteSource> ByteCursor<S> {
    pub fn new(src: S) -> Self {
        ByteCursor {
            src,
            mark: Marker::default(),
            pending: None,
            last: None,
            prior: None,
        }
    }

    /// Consumes one character. Returns `None` at end of input.
    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub fn get(&mut self) -> Option<u8> {
        let (byte, width) = match self.pending.take() {
            Some(byte) => (byte, 0),
            None => self.read_normalized()?,
        };
        self.prior = Some((self.last, self.mark));
        self.last = Some(byte);
        self.advance(byte, width);
        Some(byte)
    }

    /// Returns the most recently consumed character to the input.
    ///
    /// Only valid immediately after [`ByteCursor::get`], and never twice in a row.
    pub fn unget(&mut self) {
        debug_assert!(self.pending.is_none(), "unget called twice in a row");
        if let (Some(byte), Some((last, mark))) = (self.last, self.prior.take()) {
            self.pending = Some(byte);
            self.last = last;
            // consumed raw bytes stay consumed, only line and column go back
            self.mark.line = mark.line;
            self.mark.col = mark.col;
        }
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub fn peek(&mut self) -> Option<u8> {
        match self.pending {
            Some(byte) => Some(byte),
            None => self.src.peek_byte().map(|b| if b == b'\r' { b'\n' } else { b }),
        }
    }

    pub fn eof(&mut self) -> bool {
        self.pending.is_none() && self.src.peek_byte().is_none()
    }

    /// Most recently consumed character, `None` at start of input.
    pub fn last(&self) -> Option<u8> {
        self.last
    }

    pub fn column(&self) -> u32 {
        self.mark.col
    }

    pub fn marker(&self) -> Marker {
        self.mark
    }

    /// Skips the rest of the current line, leaving the line break unconsumed.
    pub fn skip_line(&mut self) {
        debug_assert!(self.pending.is_none());
        let skipped = self.src.skip_line();
        if skipped.bytes > 0 {
            self.mark.pos += skipped.bytes;
            self.mark.col += skipped.chars;
            self.prior = None;
        }
    }

    pub fn into_source(self) -> S {
        self.src
    }

    pub fn source(&self) -> &S {
        &self.src
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.src
    }

    fn read_normalized(&mut self) -> Option<(u8, usize)> {
        let byte = self.src.next_byte()?;
        if byte != b'\r' {
            return Some((byte, 1));
        }
        if self.src.peek_byte() == Some(b'\n') {
            self.src.next_byte();
            return Some((b'\n', 2));
        }
        Some((b'\n', 1))
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn advance(&mut self, byte: u8, width: usize) {
        self.mark.pos += width;
        if byte == b'\n' {
            self.mark.line += 1;
            self.mark.col = 0;
        } else if !is_utf8_continuation(byte) {
            self.mark.col += 1;
        }
    }
}
