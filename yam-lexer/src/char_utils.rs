const BLANK: u8 = 1;
const BREAK: u8 = 1 << 1;
const FLOW: u8 = 1 << 2;
const ANCHOR: u8 = 1 << 3;
const URI: u8 = 1 << 4;
const TAG: u8 = 1 << 5;
const WORD: u8 = 1 << 6;

static CHAR_CLASS: [u8; 256] = build_class_table();

const fn build_class_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let c = i as u8;
        let mut class = 0;
        let blank = c == b' ' || c == b'\t';
        let brk = c == b'\n' || c == b'\r';
        let flow = matches!(c, b',' | b'[' | b']' | b'{' | b'}');
        let printable = c >= 0x21 && c <= 0x7E;

        if blank {
            class |= BLANK;
        }
        if brk {
            class |= BREAK;
        }
        if flow {
            class |= FLOW;
        }
        if !blank && !brk && !flow && c != 0 {
            class |= ANCHOR;
        }
        if printable && !matches!(c, b'"' | b'<' | b'>' | b'\\' | b'^' | b'`' | b'{' | b'}' | b'|')
        {
            class |= URI;
        }
        if printable && !flow && !matches!(c, b'!' | b'<' | b'>') {
            class |= TAG;
        }
        if c.is_ascii_alphanumeric() || c == b'-' {
            class |= WORD;
        }
        table[i] = class;
        i += 1;
    }
    table
}

#[inline]
fn has_class(c: u8, class: u8) -> bool {
    CHAR_CLASS[c as usize] & class != 0
}

#[inline]
pub(crate) fn is_blank(c: u8) -> bool {
    has_class(c, BLANK)
}

#[inline]
pub(crate) fn is_break(c: u8) -> bool {
    has_class(c, BREAK)
}

#[inline]
pub(crate) fn is_blank_or_break(c: u8) -> bool {
    has_class(c, BLANK | BREAK)
}

/// Blank, line break or end of input.
#[inline]
pub(crate) fn is_blank_or_breakz(c: Option<u8>) -> bool {
    c.map_or(true, is_blank_or_break)
}

#[inline]
pub(crate) fn is_flow(c: u8) -> bool {
    has_class(c, FLOW)
}

/// Any byte that is not whitespace, a line break or a flow indicator.
///
/// Bytes of multibyte UTF-8 sequences are anchor characters.
#[inline]
pub(crate) fn is_anchor_char(c: u8) -> bool {
    has_class(c, ANCHOR)
}

/// Check whether the character is allowed inside a verbatim `!<...>` tag.
#[inline]
pub(crate) fn is_uri_char(c: u8) -> bool {
    has_class(c, URI)
}

#[inline]
pub(crate) fn is_tag_char(c: u8) -> bool {
    has_class(c, TAG)
}

/// Characters allowed in a named tag handle, like `e` in `!e!foo`.
#[inline]
pub(crate) fn is_word_char(c: u8) -> bool {
    has_class(c, WORD)
}

/// UTF-8 continuation bytes don't start a new character.
#[inline]
pub(crate) fn is_utf8_continuation(c: u8) -> bool {
    c & 0xC0 == 0x80
}

#[inline]
#[must_use]
pub(crate) fn as_hex(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as u32),
        b'a'..=b'f' => Some((c - b'a') as u32 + 10),
        b'A'..=b'F' => Some((c - b'A') as u32 + 10),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_blank_and_break() {
        assert!(is_blank(b' '));
        assert!(is_blank(b'\t'));
        assert!(!is_blank(b'\n'));
        assert!(is_break(b'\r'));
        assert!(is_blank_or_break(b'\n'));
        assert!(is_blank_or_breakz(None));
        assert!(!is_blank_or_breakz(Some(b'x')));
    }

    #[test]
    fn test_anchor_chars() {
        for c in b",[]{} \t\r\n\0" {
            assert!(!is_anchor_char(*c), "{c} is not an anchor char");
        }
        for c in "a:b*&é".bytes() {
            assert!(is_anchor_char(c));
        }
    }

    #[test]
    fn test_uri_and_tag_chars() {
        for c in b"\"<>\\^` " {
            assert!(!is_uri_char(*c));
        }
        for c in b"tag:yaml.org,2002:str%21#" {
            assert!(is_uri_char(*c));
        }
        assert!(!is_tag_char(b','));
        assert!(!is_tag_char(b'!'));
        assert!(!is_tag_char(b']'));
        assert!(is_tag_char(b'.'));
        assert!(is_word_char(b'-'));
        assert!(!is_word_char(b'.'));
    }

    #[test]
    fn test_hex() {
        assert_eq!(as_hex(b'7'), Some(7));
        assert_eq!(as_hex(b'b'), Some(11));
        assert_eq!(as_hex(b'F'), Some(15));
        assert_eq!(as_hex(b'g'), None);
    }
}
