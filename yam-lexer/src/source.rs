use std::io::{self, BufRead, BufReader, Read};

use memchr::memchr2;
use tracing::warn;

use crate::char_utils::{is_break, is_utf8_continuation};

/// Result of [`ByteSource::skip_line`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Skipped {
    /// Raw bytes skipped.
    pub bytes: usize,
    /// Characters skipped, UTF-8 continuation bytes not counted.
    pub chars: u32,
}

impl Skipped {
    fn add_byte(&mut self, byte: u8) {
        self.bytes += 1;
        if !is_utf8_continuation(byte) {
            self.chars += 1;
        }
    }
}

/// A sequential source of raw input bytes.
///
/// Sources never need to seek or unget: the single byte of pushback the lexer needs is held by
/// [`crate::ByteCursor`]. Line endings are passed through untouched, normalizing them is the
/// cursor's job.
///
/// # Methods
/// - `next_byte() -> Option<u8>`: Consumes and returns the next byte, `None` once exhausted.
/// - `peek_byte() -> Option<u8>`: Returns the next byte without consuming it.
/// - `skip_line() -> Skipped`: Skips everything up to, but not including, the next `\n` or `\r`.
/// - `take_error() -> Option<io::Error>`: The error that ended the input early, if any.
pub trait ByteSource {
    fn next_byte(&mut self) -> Option<u8>;

    fn peek_byte(&mut self) -> Option<u8>;

    fn skip_line(&mut self) -> Skipped {
        let mut skipped = Skipped::default();
        while let Some(byte) = self.peek_byte() {
            if is_break(byte) {
                break;
            }
            skipped.add_byte(byte);
            self.next_byte();
        }
        skipped
    }

    fn take_error(&mut self) -> Option<io::Error> {
        None
    }
}

/// In memory input, like a `&str` or a `&[u8]`.
pub struct SliceSource<'input> {
    input: &'input [u8],
    pos: usize,
}

impl<'input> SliceSource<'input> {
    pub fn new(input: &'input [u8]) -> Self {
        SliceSource { input, pos: 0 }
    }
}

impl<'input> From<&'input str> for SliceSource<'input> {
    fn from(value: &'input str) -> Self {
        SliceSource::new(value.as_bytes())
    }
}

impl<'input> From<&'input [u8]> for SliceSource<'input> {
    fn from(value: &'input [u8]) -> Self {
        SliceSource::new(value)
    }
}

impl ByteSource for SliceSource<'_> {
    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.input.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn peek_byte(&mut self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_line(&mut self) -> Skipped {
        let rest = &self.input[self.pos..];
        let len = memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        let chars = rest[..len]
            .iter()
            .filter(|&&byte| !is_utf8_continuation(byte))
            .count();
        self.pos += len;
        Skipped {
            bytes: len,
            chars: chars as u32,
        }
    }
}

/// Input pulled from anything implementing [`Read`].
///
/// An I/O error ends the stream. It is logged and kept so the caller can inspect it with
/// [`ReadSource::error`] once the lexer reports the end of the stream.
pub struct ReadSource<R> {
    reader: BufReader<R>,
    error: Option<io::Error>,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        ReadSource {
            reader: BufReader::new(reader),
            error: None,
        }
    }

    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    fn fill(&mut self) -> Option<u8> {
        if self.error.is_some() {
            return None;
        }
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!("input stopped by i/o error: {err}");
                    self.error = Some(err);
                    return None;
                }
            }
        }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.fill()?;
        self.reader.consume(1);
        Some(byte)
    }

    fn peek_byte(&mut self) -> Option<u8> {
        self.fill()
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}
