//! ANSI-aware truncation with a configurable suffix.
//!
//! Escape sequences are carried through untouched and never count toward
//! the width budget. Escapes that follow the cut point are still emitted so
//! a trailing reset is never lost.

use unicode_segmentation::UnicodeSegmentation;

use super::ansi::{Segment, segments, strip_ansi};
use super::width::{grapheme_width, line_width};

/// Truncate a line to fit within `max_width` terminal cells.
///
/// Text that already fits is returned unchanged. Otherwise visible
/// graphemes are kept while they fit in `max_width - width(suffix)`, then
/// `suffix` is appended. A suffix wider than `max_width` is itself cut down
/// to `max_width`. The result is never wider than `max_width`.
///
/// ```
/// use spark_gloss::truncate;
///
/// assert_eq!(truncate("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate("\x1b[1mhello\x1b[0m", 4, "…"), "\x1b[1mhel…\x1b[0m");
/// ```
pub fn truncate(s: &str, max_width: usize, suffix: &str) -> String {
    if line_width(s) <= max_width {
        return s.to_string();
    }

    let suffix_width = line_width(suffix);
    if suffix_width > max_width {
        return cut(suffix, max_width, "");
    }

    cut(s, max_width - suffix_width, suffix)
}

/// Keep visible text up to `budget` cells, place `tail` at the cut, and
/// keep every escape sequence.
///
/// Graphemes are segmented on the stripped text, exactly as [`line_width`]
/// measures it, so a cluster split by an escape still counts as one glyph.
fn cut(s: &str, budget: usize, tail: &str) -> String {
    let visible = strip_ansi(s);
    let keep = kept_len(&visible, budget);

    let mut out = String::with_capacity(s.len() + tail.len());
    let mut offset = 0usize;
    let mut tail_placed = false;

    for segment in segments(s) {
        match segment {
            Segment::Escape(seq) => out.push_str(seq),
            Segment::Text(_) if tail_placed => {}
            Segment::Text(text) => {
                let end = offset + text.len();
                if end <= keep {
                    out.push_str(text);
                } else {
                    // `keep` lies on a grapheme boundary of the stripped
                    // text, which is a char boundary inside this run.
                    out.push_str(&text[..keep.saturating_sub(offset)]);
                    out.push_str(tail);
                    tail_placed = true;
                }
                offset = end;
            }
        }
    }

    if !tail_placed {
        out.push_str(tail);
    }
    out
}

/// Byte length of the longest grapheme prefix of `visible` that fits in
/// `budget` cells.
fn kept_len(visible: &str, budget: usize) -> usize {
    let mut used = 0usize;
    for (i, grapheme) in visible.grapheme_indices(true) {
        let gw = grapheme_width(grapheme);
        if used + gw > budget {
            return i;
        }
        used += gw;
    }
    visible.len()
}
