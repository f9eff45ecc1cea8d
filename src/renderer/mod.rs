//! The render pipeline.
//!
//! [`Renderer::render`] turns a [`Style`] and input text into ANSI output in
//! a fixed sequence of stages. Each stage is a no-op when the attributes it
//! reads are unset:
//!
//! ```text
//! text → per-line SGR → horizontal align → vertical align
//!      → padding → border → margin → max height → joined lines
//! ```
//!
//! Every stage works on a `Vec<String>` of rendered lines and measures them
//! with [`line_width`], which ignores escape codes, so later stages can pad
//! and frame output produced by earlier ones.

pub mod ansi;

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::background::{BackgroundHint, EnvBackground};
use crate::border::Border;
use crate::measure::{line_width, truncate};
use crate::style::Style;
use crate::types::{BorderEdges, Position, Sides};

use ansi::{blank, paint, push_attrs};

/// Suffix appended to lines cut by `max_width`.
pub const ELLIPSIS: &str = "...";

/// Renders styles, resolving adaptive colors through a background hint.
///
/// ```rust
/// use spark_gloss::{AdaptiveColor, Renderer, Style};
///
/// let style = Style::new().foreground(AdaptiveColor::new("0", "15").unwrap());
/// let light = Renderer::new(|| true);
/// assert_eq!(light.render(&style, "x"), "\x1b[38;5;0mx\x1b[0m");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer<H = EnvBackground> {
    hint: H,
}

impl<H: BackgroundHint> Renderer<H> {
    pub fn new(hint: H) -> Self {
        Self { hint }
    }

    /// Render `text` with `style`. Never fails.
    pub fn render(&self, style: &Style, text: &str) -> String {
        let text = normalize_newlines(text);
        let padding = style.get_padding();
        let border = style.active_border();

        if text.is_empty() && !padding.any() && border.is_none() {
            return String::new();
        }

        let codes = Codes::resolve(style, &self.hint);
        let mut lines = style_lines(style, &text, &codes.text);
        trace!(lines = lines.len(), "styled lines");

        if let (Some(width), Some(position)) = (style.get_width(), style.get_align()) {
            align_horizontal(&mut lines, width, position, codes.background());
            trace!(width, ?position, "aligned horizontally");
        }

        if let Some(height) = style.get_height() {
            let position = style.get_align_vertical().unwrap_or(Position::Top);
            align_vertical(
                &mut lines,
                height,
                style.get_width(),
                position,
                codes.background(),
            );
            trace!(height, ?position, "aligned vertically");
        }

        if padding.any() {
            lines = pad_block(lines, padding, codes.background());
            trace!(?padding, "padded");
        }

        if let Some((glyphs, edges)) = border {
            lines = frame(lines, glyphs, edges, codes.border.as_deref());
            trace!(?edges, "bordered");
        }

        let margin = style.get_margin();
        if margin.any() {
            lines = pad_block(lines, margin, codes.margin.as_deref());
            trace!(?margin, "margined");
        }

        if let Some(max_height) = style.get_max_height() {
            lines.truncate(max_height);
        }

        lines.join("\n")
    }
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

// =============================================================================
// Resolved escape codes
// =============================================================================

/// Escape sequences for one render, resolved once up front.
#[derive(Debug, Default)]
struct Codes {
    /// Attributes, foreground and background for content text.
    text: String,
    background: Option<String>,
    border: Option<String>,
    margin: Option<String>,
}

impl Codes {
    fn resolve(style: &Style, hint: &dyn BackgroundHint) -> Self {
        let fg = style.get_foreground().map(|c| c.resolve(hint).to_ansi());
        let bg = style
            .get_background()
            .map(|c| c.resolve(hint).to_ansi_background());

        let mut text = String::new();
        push_attrs(&mut text, style.enabled_attrs());
        text.extend(fg.iter().map(String::as_str));
        text.extend(bg.iter().map(String::as_str));

        let border_fg = style
            .get_border_foreground()
            .map(|c| c.resolve(hint).to_ansi());
        let border_bg = style
            .get_border_background()
            .map(|c| c.resolve(hint).to_ansi_background());
        let border = match (border_fg, border_bg) {
            (None, None) => None,
            (fg, bg) => Some(fg.unwrap_or_default() + &bg.unwrap_or_default()),
        };

        let margin = style
            .get_margin_background()
            .map(|c| c.resolve(hint).to_ansi_background());

        Self {
            text,
            background: bg,
            border,
            margin,
        }
    }

    fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }
}

// =============================================================================
// Stages
// =============================================================================

/// Split into lines, cut to `max_width`, and wrap each non-empty line in
/// the text codes.
fn style_lines(style: &Style, text: &str, codes: &str) -> Vec<String> {
    let max_width = style.get_max_width();
    if max_width.is_none() && !text.contains('\n') {
        return vec![paint(codes, text)];
    }

    text.split('\n')
        .map(|line| match max_width {
            Some(max) if line_width(line) > max => {
                debug!(max, width = line_width(line), "truncating line");
                paint(codes, &truncate(line, max, ELLIPSIS))
            }
            _ => paint(codes, line),
        })
        .collect()
}

/// Pad lines narrower than `width` according to `position`. Wider lines
/// are left alone.
fn align_horizontal(lines: &mut [String], width: usize, position: Position, bg: Option<&str>) {
    for line in lines.iter_mut() {
        let w = line_width(line);
        if w >= width {
            continue;
        }
        let (before, after) = position.split(width - w);
        *line = format!("{}{}{}", blank(before, bg), line, blank(after, bg));
    }
}

/// Cut or fill the block to exactly `height` lines.
fn align_vertical(
    lines: &mut Vec<String>,
    height: usize,
    width: Option<usize>,
    position: Position,
    bg: Option<&str>,
) {
    if lines.len() > height {
        lines.truncate(height);
        return;
    }

    let fill_width = width.unwrap_or_else(|| block_width(lines));
    for line in lines.iter_mut() {
        let w = line_width(line);
        if w < fill_width {
            line.push_str(&blank(fill_width - w, bg));
        }
    }

    let (before, after) = position.split(height - lines.len());
    let filler = blank(fill_width, bg);
    let mut filled = Vec::with_capacity(height);
    filled.extend(std::iter::repeat_n(filler.clone(), before));
    filled.append(lines);
    filled.extend(std::iter::repeat_n(filler, after));
    *lines = filled;
}

/// Surround the block with blank cells: used for padding and margin.
fn pad_block(lines: Vec<String>, sides: Sides, bg: Option<&str>) -> Vec<String> {
    let content_width = block_width(&lines);
    let full = blank(sides.left + content_width + sides.right, bg);
    let left = blank(sides.left, bg);

    let mut out = Vec::with_capacity(lines.len() + sides.vertical());
    out.extend(std::iter::repeat_n(full.clone(), sides.top));
    for line in lines {
        let fill = content_width - line_width(&line) + sides.right;
        out.push(format!("{left}{line}{}", blank(fill, bg)));
    }
    out.extend(std::iter::repeat_n(full, sides.bottom));
    out
}

/// Draw the enabled border edges around the block.
fn frame(lines: Vec<String>, border: &Border, edges: BorderEdges, codes: Option<&str>) -> Vec<String> {
    let width = block_width(&lines);
    let glyph = |g: &str| match codes {
        Some(codes) => paint(codes, g),
        None => g.to_string(),
    };

    let edge_line = |left: &str, fill: &str, right: &str| {
        let mut row = String::new();
        if edges.left {
            row.push_str(&glyph(left));
        }
        row.push_str(&glyph(&repeat_to_width(fill, width)));
        if edges.right {
            row.push_str(&glyph(right));
        }
        row
    };

    let mut out = Vec::with_capacity(lines.len() + 2);
    if edges.top {
        out.push(edge_line(border.top_left(), border.top(), border.top_right()));
    }
    for line in lines {
        let mut row = String::new();
        if edges.left {
            row.push_str(&glyph(border.left()));
        }
        let fill = width - line_width(&line);
        row.push_str(&line);
        row.push_str(&" ".repeat(fill));
        if edges.right {
            row.push_str(&glyph(border.right()));
        }
        out.push(row);
    }
    if edges.bottom {
        out.push(edge_line(
            border.bottom_left(),
            border.bottom(),
            border.bottom_right(),
        ));
    }
    out
}

/// Repeat an edge glyph across `width` cells; a glyph wider than one cell
/// leaves the remainder as spaces.
fn repeat_to_width(glyph: &str, width: usize) -> String {
    let glyph_width = line_width(glyph).max(1);
    let mut out = glyph.repeat(width / glyph_width);
    out.push_str(&" ".repeat(width % glyph_width));
    out
}

fn block_width(lines: &[String]) -> usize {
    lines.iter().map(|l| line_width(l)).max().unwrap_or(0)
}
