//! Box-drawing border glyph sets.

use std::borrow::Cow;

/// The eight glyphs of a border: four edges and four corners.
///
/// No glyph is ever empty; the hidden border uses single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Border {
    top: Cow<'static, str>,
    bottom: Cow<'static, str>,
    left: Cow<'static, str>,
    right: Cow<'static, str>,
    top_left: Cow<'static, str>,
    top_right: Cow<'static, str>,
    bottom_left: Cow<'static, str>,
    bottom_right: Cow<'static, str>,
}

impl Border {
    #[allow(clippy::too_many_arguments)]
    const fn from_static(
        top: &'static str,
        bottom: &'static str,
        left: &'static str,
        right: &'static str,
        top_left: &'static str,
        top_right: &'static str,
        bottom_left: &'static str,
        bottom_right: &'static str,
    ) -> Self {
        Self {
            top: Cow::Borrowed(top),
            bottom: Cow::Borrowed(bottom),
            left: Cow::Borrowed(left),
            right: Cow::Borrowed(right),
            top_left: Cow::Borrowed(top_left),
            top_right: Cow::Borrowed(top_right),
            bottom_left: Cow::Borrowed(bottom_left),
            bottom_right: Cow::Borrowed(bottom_right),
        }
    }

    /// A custom border. Returns `None` if any glyph is empty.
    #[allow(clippy::too_many_arguments)]
    pub fn custom(
        top: impl Into<String>,
        bottom: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
        top_left: impl Into<String>,
        top_right: impl Into<String>,
        bottom_left: impl Into<String>,
        bottom_right: impl Into<String>,
    ) -> Option<Self> {
        let glyphs: [String; 8] = [
            top.into(),
            bottom.into(),
            left.into(),
            right.into(),
            top_left.into(),
            top_right.into(),
            bottom_left.into(),
            bottom_right.into(),
        ];
        if glyphs.iter().any(String::is_empty) {
            return None;
        }
        let [top, bottom, left, right, top_left, top_right, bottom_left, bottom_right] =
            glyphs.map(Cow::<'static, str>::Owned);
        Some(Self {
            top,
            bottom,
            left,
            right,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        })
    }

    pub fn top(&self) -> &str {
        &self.top
    }

    pub fn bottom(&self) -> &str {
        &self.bottom
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn top_left(&self) -> &str {
        &self.top_left
    }

    pub fn top_right(&self) -> &str {
        &self.top_right
    }

    pub fn bottom_left(&self) -> &str {
        &self.bottom_left
    }

    pub fn bottom_right(&self) -> &str {
        &self.bottom_right
    }
}

/// ┌─┐ │ │ └─┘
pub const fn normal_border() -> Border {
    Border::from_static("─", "─", "│", "│", "┌", "┐", "└", "┘")
}

/// ╭─╮ │ │ ╰─╯
pub const fn rounded_border() -> Border {
    Border::from_static("─", "─", "│", "│", "╭", "╮", "╰", "╯")
}

/// ┏━┓ ┃ ┃ ┗━┛
pub const fn thick_border() -> Border {
    Border::from_static("━", "━", "┃", "┃", "┏", "┓", "┗", "┛")
}

/// ╔═╗ ║ ║ ╚═╝
pub const fn double_border() -> Border {
    Border::from_static("═", "═", "║", "║", "╔", "╗", "╚", "╝")
}

/// Every glyph is a full block.
pub const fn block_border() -> Border {
    Border::from_static("█", "█", "█", "█", "█", "█", "█", "█")
}

/// Half blocks drawn just outside the content.
pub const fn outer_half_block_border() -> Border {
    Border::from_static("▀", "▄", "▌", "▐", "▛", "▜", "▙", "▟")
}

/// Half blocks drawn hugging the content.
pub const fn inner_half_block_border() -> Border {
    Border::from_static("▄", "▀", "▐", "▌", "▗", "▖", "▝", "▘")
}

/// Takes up space like a border but draws nothing.
pub const fn hidden_border() -> Border {
    Border::from_static(" ", " ", " ", " ", " ", " ", " ", " ")
}
