//! ANSI escape sequence scanning.
//!
//! Splits styled text into escape sequences and visible text runs so that
//! measurement and truncation can treat escapes as zero-width. Recognizes:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-character sequences: `ESC` + single char

use std::borrow::Cow;

const ESC: u8 = 0x1B;

/// A piece of styled text: either an escape sequence or a visible run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A complete (or unterminated trailing) escape sequence.
    Escape(&'a str),
    /// Visible text containing no ESC byte.
    Text(&'a str),
}

/// Iterator over the [`Segment`]s of a string.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    src: &'a str,
    pos: usize,
}

/// Split `s` into escape sequences and visible text runs, in order.
pub fn segments(s: &str) -> Segments<'_> {
    Segments { src: s, pos: 0 }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        // ESC is a single ASCII byte, so every boundary we cut at is a
        // valid char boundary.
        if bytes[start] == ESC {
            self.pos = escape_end(bytes, start);
            return Some(Segment::Escape(&self.src[start..self.pos]));
        }

        let end = bytes[start..]
            .iter()
            .position(|&b| b == ESC)
            .map_or(bytes.len(), |off| start + off);
        self.pos = end;
        Some(Segment::Text(&self.src[start..end]))
    }
}

/// Strip ANSI escape sequences from a string.
///
/// Returns `Cow::Borrowed` when no escape sequences are present.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    for segment in segments(s) {
        if let Segment::Text(text) = segment {
            out.push_str(text);
        }
    }
    Cow::Owned(out)
}

/// Byte index just past the escape sequence starting at `pos`.
fn escape_end(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => csi_end(bytes, next + 1),
        b']' | b'P' | b'^' | b'_' => string_terminated_end(bytes, next + 1),
        // Two-character sequence; the second byte may start a multi-byte
        // char, in which case only the ESC itself is consumed.
        b if b.is_ascii() => next + 1,
        _ => next,
    }
}

/// CSI: parameter bytes (0x30-0x3F), intermediates (0x20-0x2F), final
/// byte (0x40-0x7E). An invalid byte aborts the sequence in place.
fn csi_end(bytes: &[u8], pos: usize) -> usize {
    for (i, &b) in bytes.iter().enumerate().skip(pos) {
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
    }
    bytes.len()
}

/// OSC/DCS/PM/APC: terminated by BEL or ST (`ESC \`).
fn string_terminated_end(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(strip_ansi("hello"), Cow::Borrowed(_)));
        assert_eq!(strip_ansi("hello"), "hello");
    }

    #[test]
    fn strips_sgr_forms() {
        assert_eq!(strip_ansi("\x1b[31mred\x1b[0m"), "red");
        assert_eq!(strip_ansi("\x1b[38;5;196mred\x1b[0m"), "red");
        assert_eq!(strip_ansi("\x1b[48;2;255;0;0mred\x1b[0m"), "red");
    }

    #[test]
    fn strips_osc_with_either_terminator() {
        assert_eq!(strip_ansi("\x1b]0;title\x07text"), "text");
        assert_eq!(strip_ansi("\x1b]0;title\x1b\\text"), "text");
    }

    #[test]
    fn unterminated_sequences_consume_rest() {
        assert_eq!(strip_ansi("ok\x1b[31"), "ok");
        assert_eq!(strip_ansi("ok\x1b]8;;url"), "ok");
        assert_eq!(strip_ansi("text\x1b"), "text");
    }

    #[test]
    fn esc_before_multibyte_char_keeps_char() {
        assert_eq!(strip_ansi("\x1b你"), "你");
    }

    #[test]
    fn segments_alternate_in_order() {
        let parts: Vec<_> = segments("\x1b[1mab\x1b[0mc").collect();
        assert_eq!(
            parts,
            vec![
                Segment::Escape("\x1b[1m"),
                Segment::Text("ab"),
                Segment::Escape("\x1b[0m"),
                Segment::Text("c"),
            ]
        );
    }

    #[test]
    fn segments_of_empty_string() {
        assert_eq!(segments("").count(), 0);
    }
}
