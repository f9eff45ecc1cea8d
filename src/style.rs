//! Immutable style definitions.
//!
//! A [`Style`] is a plain value. Every setter consumes the receiver and
//! returns a new style with one attribute changed, so a style can be used as
//! a base for any number of independent variations:
//!
//! ```rust
//! use spark_gloss::{Color, Style, rounded_border};
//!
//! let base = Style::new().padding((0, 1)).border(rounded_border());
//! let warn = base.clone().foreground(Color::new("yellow").unwrap());
//! let fail = base.clone().foreground(Color::new("red").unwrap()).bold(true);
//!
//! assert_eq!(base.get_foreground(), None);
//! assert!(warn.render("careful").contains("careful"));
//! assert!(fail.render("broken").starts_with("╭"));
//! ```

use crate::background::EnvBackground;
use crate::border::Border;
use crate::color::TerminalColor;
use crate::renderer::Renderer;
use crate::types::{Attr, BorderEdges, Position, Sides, clamp_size};

/// Per-edge border toggles; `None` means the edge was never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
struct EdgeOverrides {
    top: Option<bool>,
    right: Option<bool>,
    bottom: Option<bool>,
    left: Option<bool>,
}

/// A terminal style definition.
///
/// Every attribute is either unset or set to a value. Unset attributes make
/// their render stage a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    /// Which text attributes were set.
    attrs_set: Attr,
    /// Values of the set text attributes.
    attrs: Attr,

    foreground: Option<TerminalColor>,
    background: Option<TerminalColor>,

    width: Option<usize>,
    height: Option<usize>,
    max_width: Option<usize>,
    max_height: Option<usize>,

    align: Option<Position>,
    align_vertical: Option<Position>,

    padding: Sides,
    margin: Sides,
    margin_background: Option<TerminalColor>,

    border_style: Option<Border>,
    border_edges: EdgeOverrides,
    border_foreground: Option<TerminalColor>,
    border_background: Option<TerminalColor>,
}

impl Style {
    /// An empty style: renders text unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `text` with this style, resolving adaptive colors against the
    /// environment. Use [`Renderer`] to inject a different background hint.
    pub fn render(&self, text: &str) -> String {
        Renderer::new(EnvBackground).render(self, text)
    }

    // =========================================================================
    // Text attributes
    // =========================================================================

    fn set_attr(mut self, attr: Attr, on: bool) -> Self {
        self.attrs_set.insert(attr);
        self.attrs.set(attr, on);
        self
    }

    fn get_attr(&self, attr: Attr) -> Option<bool> {
        self.attrs_set
            .contains(attr)
            .then(|| self.attrs.contains(attr))
    }

    pub fn bold(self, on: bool) -> Self {
        self.set_attr(Attr::BOLD, on)
    }

    pub fn faint(self, on: bool) -> Self {
        self.set_attr(Attr::FAINT, on)
    }

    pub fn italic(self, on: bool) -> Self {
        self.set_attr(Attr::ITALIC, on)
    }

    pub fn underline(self, on: bool) -> Self {
        self.set_attr(Attr::UNDERLINE, on)
    }

    pub fn blink(self, on: bool) -> Self {
        self.set_attr(Attr::BLINK, on)
    }

    pub fn reverse(self, on: bool) -> Self {
        self.set_attr(Attr::REVERSE, on)
    }

    pub fn strikethrough(self, on: bool) -> Self {
        self.set_attr(Attr::STRIKETHROUGH, on)
    }

    pub fn get_bold(&self) -> Option<bool> {
        self.get_attr(Attr::BOLD)
    }

    pub fn get_faint(&self) -> Option<bool> {
        self.get_attr(Attr::FAINT)
    }

    pub fn get_italic(&self) -> Option<bool> {
        self.get_attr(Attr::ITALIC)
    }

    pub fn get_underline(&self) -> Option<bool> {
        self.get_attr(Attr::UNDERLINE)
    }

    pub fn get_blink(&self) -> Option<bool> {
        self.get_attr(Attr::BLINK)
    }

    pub fn get_reverse(&self) -> Option<bool> {
        self.get_attr(Attr::REVERSE)
    }

    pub fn get_strikethrough(&self) -> Option<bool> {
        self.get_attr(Attr::STRIKETHROUGH)
    }

    /// Attributes that are both set and enabled.
    pub(crate) fn enabled_attrs(&self) -> Attr {
        self.attrs & self.attrs_set
    }

    // =========================================================================
    // Colors
    // =========================================================================

    pub fn foreground(mut self, color: impl Into<TerminalColor>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    pub fn background(mut self, color: impl Into<TerminalColor>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn get_foreground(&self) -> Option<&TerminalColor> {
        self.foreground.as_ref()
    }

    pub fn get_background(&self) -> Option<&TerminalColor> {
        self.background.as_ref()
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    /// Minimum width used for horizontal alignment. Negative clamps to 0.
    pub fn width(mut self, cells: i32) -> Self {
        self.width = Some(clamp_size(cells));
        self
    }

    /// Block height for vertical alignment. Negative clamps to 0.
    pub fn height(mut self, lines: i32) -> Self {
        self.height = Some(clamp_size(lines));
        self
    }

    /// Lines wider than this are cut with `"..."`. Negative clamps to 0.
    pub fn max_width(mut self, cells: i32) -> Self {
        self.max_width = Some(clamp_size(cells));
        self
    }

    /// Output is cut to this many lines after all other stages.
    pub fn max_height(mut self, lines: i32) -> Self {
        self.max_height = Some(clamp_size(lines));
        self
    }

    pub fn get_width(&self) -> Option<usize> {
        self.width
    }

    pub fn get_height(&self) -> Option<usize> {
        self.height
    }

    pub fn get_max_width(&self) -> Option<usize> {
        self.max_width
    }

    pub fn get_max_height(&self) -> Option<usize> {
        self.max_height
    }

    // =========================================================================
    // Alignment
    // =========================================================================

    /// Horizontal alignment within `width`.
    pub fn align(mut self, position: Position) -> Self {
        self.align = Some(position);
        self
    }

    /// Vertical alignment within `height`. Unset behaves as `Top`.
    pub fn align_vertical(mut self, position: Position) -> Self {
        self.align_vertical = Some(position);
        self
    }

    pub fn get_align(&self) -> Option<Position> {
        self.align
    }

    pub fn get_align_vertical(&self) -> Option<Position> {
        self.align_vertical
    }

    // =========================================================================
    // Padding and margin
    // =========================================================================

    /// Inner spacing, CSS shorthand: `1`, `(1, 2)` or `(1, 2, 3, 4)`.
    pub fn padding(mut self, sides: impl Into<Sides>) -> Self {
        self.padding = sides.into();
        self
    }

    pub fn padding_top(mut self, cells: i32) -> Self {
        self.padding.top = clamp_size(cells);
        self
    }

    pub fn padding_right(mut self, cells: i32) -> Self {
        self.padding.right = clamp_size(cells);
        self
    }

    pub fn padding_bottom(mut self, cells: i32) -> Self {
        self.padding.bottom = clamp_size(cells);
        self
    }

    pub fn padding_left(mut self, cells: i32) -> Self {
        self.padding.left = clamp_size(cells);
        self
    }

    /// Outer spacing, CSS shorthand: `1`, `(1, 2)` or `(1, 2, 3, 4)`.
    pub fn margin(mut self, sides: impl Into<Sides>) -> Self {
        self.margin = sides.into();
        self
    }

    pub fn margin_top(mut self, cells: i32) -> Self {
        self.margin.top = clamp_size(cells);
        self
    }

    pub fn margin_right(mut self, cells: i32) -> Self {
        self.margin.right = clamp_size(cells);
        self
    }

    pub fn margin_bottom(mut self, cells: i32) -> Self {
        self.margin.bottom = clamp_size(cells);
        self
    }

    pub fn margin_left(mut self, cells: i32) -> Self {
        self.margin.left = clamp_size(cells);
        self
    }

    /// Color of the margin cells. Margins are plain spaces when unset.
    pub fn margin_background(mut self, color: impl Into<TerminalColor>) -> Self {
        self.margin_background = Some(color.into());
        self
    }

    pub fn get_padding(&self) -> Sides {
        self.padding
    }

    pub fn get_margin(&self) -> Sides {
        self.margin
    }

    pub fn get_margin_background(&self) -> Option<&TerminalColor> {
        self.margin_background.as_ref()
    }

    // =========================================================================
    // Border
    // =========================================================================

    /// Set the border glyphs and enable all four edges.
    pub fn border(self, border: Border) -> Self {
        self.border_with(border, BorderEdges::all())
    }

    /// Set the border glyphs and which edges to draw: a single `bool` for all
    /// four, or `(top, right, bottom, left)`.
    pub fn border_with(mut self, border: Border, edges: impl Into<BorderEdges>) -> Self {
        let edges = edges.into();
        self.border_style = Some(border);
        self.border_edges = EdgeOverrides {
            top: Some(edges.top),
            right: Some(edges.right),
            bottom: Some(edges.bottom),
            left: Some(edges.left),
        };
        self
    }

    /// Set the border glyphs only. With no edge toggles ever set, all four
    /// edges are drawn.
    pub fn border_style(mut self, border: Border) -> Self {
        self.border_style = Some(border);
        self
    }

    pub fn border_top(mut self, on: bool) -> Self {
        self.border_edges.top = Some(on);
        self
    }

    pub fn border_right(mut self, on: bool) -> Self {
        self.border_edges.right = Some(on);
        self
    }

    pub fn border_bottom(mut self, on: bool) -> Self {
        self.border_edges.bottom = Some(on);
        self
    }

    pub fn border_left(mut self, on: bool) -> Self {
        self.border_edges.left = Some(on);
        self
    }

    pub fn border_foreground(mut self, color: impl Into<TerminalColor>) -> Self {
        self.border_foreground = Some(color.into());
        self
    }

    pub fn border_background(mut self, color: impl Into<TerminalColor>) -> Self {
        self.border_background = Some(color.into());
        self
    }

    pub fn get_border_style(&self) -> Option<&Border> {
        self.border_style.as_ref()
    }

    pub fn get_border_foreground(&self) -> Option<&TerminalColor> {
        self.border_foreground.as_ref()
    }

    pub fn get_border_background(&self) -> Option<&TerminalColor> {
        self.border_background.as_ref()
    }

    /// Edges that will actually be drawn.
    ///
    /// Explicit toggles win. When no toggle was ever set, every edge is on
    /// if a border style is set and off otherwise.
    pub fn get_border_edges(&self) -> BorderEdges {
        let e = self.border_edges;
        let untouched = e == EdgeOverrides::default();
        let fallback = untouched && self.border_style.is_some();
        BorderEdges::new(
            e.top.unwrap_or(fallback),
            e.right.unwrap_or(fallback),
            e.bottom.unwrap_or(fallback),
            e.left.unwrap_or(fallback),
        )
    }

    /// The border glyphs and edges when a border will be drawn.
    pub(crate) fn active_border(&self) -> Option<(&Border, BorderEdges)> {
        let border = self.border_style.as_ref()?;
        let edges = self.get_border_edges();
        edges.any().then_some((border, edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::{normal_border, rounded_border};
    use crate::color::Color;

    fn red() -> Color {
        Color::new("red").unwrap()
    }

    #[test]
    fn new_style_has_nothing_set() {
        let s = Style::new();
        assert_eq!(s.get_bold(), None);
        assert_eq!(s.get_foreground(), None);
        assert_eq!(s.get_width(), None);
        assert_eq!(s.get_padding(), Sides::default());
        assert_eq!(s.get_border_edges(), BorderEdges::none());
    }

    #[test]
    fn setters_leave_the_original_untouched() {
        let base = Style::new().italic(true);
        let bold = base.clone().bold(true);
        let colored = base.clone().foreground(red());

        assert_eq!(base.get_bold(), None);
        assert_eq!(base.get_foreground(), None);
        assert_eq!(bold.get_bold(), Some(true));
        assert_eq!(bold.get_foreground(), None);
        assert_eq!(colored.get_bold(), None);
        assert_eq!(colored.get_italic(), Some(true));
    }

    #[test]
    fn attribute_set_false_is_distinct_from_unset() {
        let s = Style::new().bold(false);
        assert_eq!(s.get_bold(), Some(false));
        assert!(s.enabled_attrs().is_empty());
    }

    #[test]
    fn sizes_clamp_negative_to_zero() {
        let s = Style::new().width(-5).height(-1).max_width(-2).padding_left(-3);
        assert_eq!(s.get_width(), Some(0));
        assert_eq!(s.get_height(), Some(0));
        assert_eq!(s.get_max_width(), Some(0));
        assert_eq!(s.get_padding().left, 0);
    }

    #[test]
    fn padding_shorthand_and_single_sides() {
        let s = Style::new().padding((1, 2)).padding_bottom(5);
        assert_eq!(s.get_padding(), Sides::new(1, 2, 5, 2));

        let m = Style::new().margin((1, 2, 3, 4));
        assert_eq!(m.get_margin(), Sides::new(1, 2, 3, 4));
    }

    #[test]
    fn border_enables_all_edges() {
        let s = Style::new().border(normal_border());
        assert_eq!(s.get_border_edges(), BorderEdges::all());
    }

    #[test]
    fn border_with_selected_edges() {
        let s = Style::new().border_with(rounded_border(), (true, false, true, false));
        assert_eq!(
            s.get_border_edges(),
            BorderEdges::new(true, false, true, false)
        );
    }

    #[test]
    fn border_style_alone_draws_every_edge() {
        let s = Style::new().border_style(normal_border());
        assert_eq!(s.get_border_edges(), BorderEdges::all());
    }

    #[test]
    fn edge_override_after_border() {
        let s = Style::new().border(normal_border()).border_left(false);
        assert_eq!(
            s.get_border_edges(),
            BorderEdges::new(true, true, true, false)
        );
    }

    #[test]
    fn single_edge_toggle_disables_the_rest() {
        let s = Style::new().border_style(normal_border()).border_top(true);
        assert_eq!(
            s.get_border_edges(),
            BorderEdges::new(true, false, false, false)
        );
    }

    #[test]
    fn no_active_border_when_every_edge_is_off() {
        let s = Style::new().border_with(normal_border(), false);
        assert!(s.active_border().is_none());
        assert!(Style::new().border_top(true).active_border().is_none());
    }

    #[test]
    fn style_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Style>();
    }
}
