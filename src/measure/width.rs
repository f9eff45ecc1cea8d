//! Cell width of terminal text.
//!
//! Widths follow Unicode East Asian Width, with emoji forced wide and
//! grapheme clusters measured as a unit so ZWJ sequences, flags and skin
//! tone modifiers count as one wide glyph.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::strip_ansi;

/// Display width of a single codepoint in terminal cells.
///
/// `0` for control characters and combining marks, `2` for wide CJK,
/// fullwidth forms and emoji, `1` otherwise.
#[inline]
pub fn char_width(c: char) -> usize {
    match c as u32 {
        // Misc symbols and dingbats rendered as emoji (☀, ✨, ⚡)
        0x2600..=0x27BF => 2,
        // Misc symbols and pictographs, emoticons, transport
        0x1F300..=0x1F64F | 0x1F680..=0x1F6FF => 2,
        // Supplemental pictographs and extended-A
        0x1F900..=0x1F9FF | 0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of a grapheme cluster in terminal cells.
///
/// Emoji sequences (ZWJ, VS16, skin tone) on a pictographic base, keycaps
/// on `0-9`, `#` or `*`, and regional indicator pairs are 2 cells. Any
/// other cluster takes its base character's width, so marks hanging off
/// plain text never widen it.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    let keycap = matches!(first, '0'..='9' | '#' | '*') && grapheme.contains('\u{20E3}');
    let emoji_sequence = is_pictographic(first)
        && chars.any(|c| matches!(c as u32, 0x200D | 0xFE0F | 0x1F3FB..=0x1F3FF));
    if keycap || emoji_sequence {
        2
    } else {
        char_width(first)
    }
}

/// Characters that can start an emoji presentation sequence.
fn is_pictographic(c: char) -> bool {
    matches!(
        c as u32,
        0x00A9 | 0x00AE | 0x203C | 0x2049 | 0x2122 | 0x2139
            | 0x2194..=0x21AA
            | 0x231A..=0x23FF
            | 0x24C2
            | 0x25AA..=0x25FE
            | 0x2600..=0x27BF
            | 0x2934..=0x2935
            | 0x2B05..=0x2B55
            | 0x3030 | 0x303D | 0x3297 | 0x3299
            | 0x1F000..=0x1FAFF
    )
}

/// Width of a single line of text, ignoring ANSI escapes.
///
/// Newlines are treated as zero-width control characters; use [`width`]
/// for multi-line blocks.
pub fn line_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    // Printable ASCII without escapes: one cell per byte.
    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|&b| (0x20..0x7F).contains(&b)).count();
    }

    strip_ansi(s).graphemes(true).map(grapheme_width).sum()
}

/// Cell width of a block of text: the width of its widest line.
///
/// ANSI escape sequences are zero-width.
pub fn width(s: &str) -> usize {
    s.split('\n').map(line_width).max().unwrap_or(0)
}

/// Number of lines in a block of text. An empty string is one line.
pub fn height(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'\n').count() + 1
}

/// `(width, height)` of a block of text.
pub fn size(s: &str) -> (usize, usize) {
    (width(s), height(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── char_width ──

    #[test]
    fn char_width_basic_classes() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width(' '), 1);
        assert_eq!(char_width('\t'), 0);
        assert_eq!(char_width('\u{0301}'), 0);
        assert_eq!(char_width('你'), 2);
        assert_eq!(char_width('한'), 2);
        assert_eq!(char_width('Ａ'), 2);
        assert_eq!(char_width('😀'), 2);
    }

    // ── grapheme_width ──

    #[test]
    fn grapheme_combining_takes_base_width() {
        assert_eq!(grapheme_width("e\u{0301}"), 1);
    }

    #[test]
    fn grapheme_emoji_sequences_are_wide() {
        assert_eq!(grapheme_width("👨\u{200D}👩\u{200D}👧"), 2);
        assert_eq!(grapheme_width("👍\u{1F3FD}"), 2);
        assert_eq!(grapheme_width("🇺🇸"), 2);
        assert_eq!(grapheme_width("1\u{FE0F}\u{20E3}"), 2);
    }

    #[test]
    fn joiners_on_plain_text_do_not_widen() {
        assert_eq!(grapheme_width("x\u{200D}"), 1);
        assert_eq!(grapheme_width("a\u{FE0F}"), 1);
        assert_eq!(grapheme_width("x\u{20E3}"), 1);
        assert_eq!(width("x\u{200D}"), 1);
    }

    #[test]
    fn text_symbol_with_vs16_is_wide() {
        assert_eq!(grapheme_width("\u{00A9}\u{FE0F}"), 2);
        assert_eq!(grapheme_width("\u{2764}\u{FE0F}"), 2);
    }

    #[test]
    fn grapheme_empty() {
        assert_eq!(grapheme_width(""), 0);
    }

    // ── line_width / width ──

    #[test]
    fn line_width_ignores_escapes() {
        assert_eq!(line_width("\x1b[1m\x1b[31mBold Red\x1b[0m"), 8);
        assert_eq!(line_width("\x1b[31m你好\x1b[0m"), 4);
    }

    #[test]
    fn line_width_mixed_scripts() {
        assert_eq!(line_width("hi你好😀"), 8);
        assert_eq!(line_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn width_is_widest_line() {
        assert_eq!(width("a\nbbb\ncc"), 3);
        assert_eq!(width(""), 0);
        assert_eq!(width("\x1b[1mab\x1b[0m\nc"), 2);
    }

    // ── height / size ──

    #[test]
    fn height_counts_lines() {
        assert_eq!(height(""), 1);
        assert_eq!(height("a"), 1);
        assert_eq!(height("a\nb\n"), 3);
    }

    #[test]
    fn size_pairs_width_and_height() {
        assert_eq!(size("ab\nc"), (2, 2));
    }
}
