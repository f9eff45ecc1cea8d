//! SGR escape sequences used by the renderer.
//!
//! Every styled run the renderer produces has the shape
//! `<sequences><text>\x1b[0m`, so styling never leaks into the next run or
//! the next line.

use crate::types::Attr;

/// Reset all attributes and colors.
pub const RESET: &str = "\x1b[0m";

// =============================================================================
// Text Attributes
// =============================================================================

/// Push one SGR sequence per enabled attribute, in emission order.
pub fn push_attrs(out: &mut String, attr: Attr) {
    for (flag, attribute) in Attr::ORDERED {
        if attr.contains(flag) {
            out.push_str("\x1b[");
            out.push_str(&attribute.sgr());
            out.push('m');
        }
    }
}

// =============================================================================
// Runs
// =============================================================================

/// Wrap `text` in `prefix` and a reset.
///
/// Empty text or an empty prefix yields the text unchanged, so unstyled
/// renders and empty lines carry no escape codes.
pub fn paint(prefix: &str, text: &str) -> String {
    if text.is_empty() || prefix.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(prefix.len() + text.len() + RESET.len());
    out.push_str(prefix);
    out.push_str(text);
    out.push_str(RESET);
    out
}

/// `cells` blank cells, painted with `prefix` when one is given.
pub fn blank(cells: usize, prefix: Option<&str>) -> String {
    paint(prefix.unwrap_or(""), &" ".repeat(cells))
}
