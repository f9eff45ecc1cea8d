//! Positioning a block inside a larger blank area.

use crate::measure::{line_width, truncate};
use crate::types::Position;

/// Place `content` inside a `width` × `height` area of blank cells.
///
/// The block is offset by `horizontal` and `vertical` (center offsets use
/// integer division and never go negative). Lines and columns falling
/// outside the area are cut. A zero-sized area yields an empty string.
///
/// ```
/// use spark_gloss::{Position, place};
///
/// let out = place(5, 3, Position::Center, Position::Center, "x");
/// assert_eq!(out, "     \n  x  \n     ");
/// ```
pub fn place(
    width: usize,
    height: usize,
    horizontal: Position,
    vertical: Position,
    content: &str,
) -> String {
    if width == 0 || height == 0 {
        return String::new();
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let content_width = lines.iter().map(|l| line_width(l)).max().unwrap_or(0);
    let col = horizontal.offset(width, content_width);
    let row = vertical.offset(height, lines.len());

    (0..height)
        .map(|r| match r.checked_sub(row).and_then(|i| lines.get(i)) {
            Some(line) => {
                let visible = truncate(line, width - col, "");
                let rest = (width - col).saturating_sub(line_width(&visible));
                format!("{}{visible}{}", " ".repeat(col), " ".repeat(rest))
            }
            None => " ".repeat(width),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pad a block out to `width` cells, positioning it as a unit.
///
/// Content already at least `width` wide is returned unchanged.
pub fn place_horizontal(width: usize, position: Position, content: &str) -> String {
    let content_width = crate::measure::width(content);
    if content_width >= width {
        return content.to_string();
    }

    let before = position.offset(width, content_width);
    content
        .split('\n')
        .map(|line| {
            let after = width - before - line_width(line);
            format!("{}{line}{}", " ".repeat(before), " ".repeat(after))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pad a block out to `height` lines of blank cells.
///
/// Content already at least `height` lines tall is returned unchanged.
pub fn place_vertical(height: usize, position: Position, content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() >= height {
        return content.to_string();
    }

    let blank = " ".repeat(crate::measure::width(content));
    let (before, after) = position.split(height - lines.len());

    let mut out: Vec<&str> = Vec::with_capacity(height);
    out.extend(std::iter::repeat_n(blank.as_str(), before));
    out.extend(lines);
    out.extend(std::iter::repeat_n(blank.as_str(), after));
    out.join("\n")
}
