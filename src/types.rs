//! Core value types shared by styles, the renderer and layout.

use crossterm::style::Attribute;

// =============================================================================
// Position
// =============================================================================

/// Placement along either axis.
///
/// `Left`/`Right` name the horizontal ends and `Top`/`Bottom` the vertical
/// ends; `Center` is shared. On either axis `Left` and `Top` mean "leading"
/// and `Right` and `Bottom` mean "trailing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    Left,
    Center,
    Right,
    Top,
    Bottom,
}

impl Position {
    /// Split `deficit` blank cells (or lines) into `(before, after)`.
    ///
    /// Leading positions put everything after the content, trailing
    /// positions everything before it. `Center` halves the deficit and gives
    /// the odd cell to the trailing side.
    #[inline]
    pub const fn split(self, deficit: usize) -> (usize, usize) {
        match self {
            Self::Left | Self::Top => (0, deficit),
            Self::Right | Self::Bottom => (deficit, 0),
            Self::Center => {
                let before = deficit / 2;
                (before, deficit - before)
            }
        }
    }

    /// Offset of content of size `content` inside a box of size `outer`,
    /// clamped to zero when the content is larger.
    #[inline]
    pub const fn offset(self, outer: usize, content: usize) -> usize {
        self.split(outer.saturating_sub(content)).0
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`. Iteration order
    /// ([`Attr::ORDERED`]) is the order the renderer emits them in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
    }
}

impl Attr {
    /// Attributes in emission order, paired with their terminal attribute.
    pub const ORDERED: [(Attr, Attribute); 7] = [
        (Attr::BOLD, Attribute::Bold),
        (Attr::FAINT, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::BLINK, Attribute::SlowBlink),
        (Attr::REVERSE, Attribute::Reverse),
        (Attr::STRIKETHROUGH, Attribute::CrossedOut),
    ];
}

// =============================================================================
// Sides - CSS-style spacing
// =============================================================================

/// Spacing on the four sides of a block, in cells.
///
/// Built from one, two or four values with CSS shorthand semantics. Negative
/// inputs clamp to zero.
///
/// ```
/// use spark_gloss::Sides;
///
/// assert_eq!(Sides::from(2), Sides::new(2, 2, 2, 2));
/// assert_eq!(Sides::from((1, 3)), Sides::new(1, 3, 1, 3));
/// assert_eq!(Sides::from((1, 2, 3, -4)), Sides::new(1, 2, 3, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Sides {
    /// Create from explicit top, right, bottom, left values.
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Build from a shorthand slice of 1, 2 or 4 values.
    ///
    /// # Panics
    ///
    /// Panics when `values` has any other length; that is a misuse of the
    /// API rather than bad data.
    pub fn from_shorthand(values: &[i32]) -> Self {
        match *values {
            [all] => Self::from(all),
            [vertical, horizontal] => Self::from((vertical, horizontal)),
            [top, right, bottom, left] => Self::from((top, right, bottom, left)),
            _ => panic!(
                "spacing shorthand takes 1, 2 or 4 values, got {}",
                values.len()
            ),
        }
    }

    /// True if any side is non-zero.
    #[inline]
    pub const fn any(&self) -> bool {
        self.top > 0 || self.right > 0 || self.bottom > 0 || self.left > 0
    }

    /// `left + right`.
    #[inline]
    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }

    /// `top + bottom`.
    #[inline]
    pub const fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

/// Clamp a caller-supplied size to zero or more.
#[inline]
pub(crate) fn clamp_size(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}

impl From<i32> for Sides {
    fn from(all: i32) -> Self {
        let all = clamp_size(all);
        Self::new(all, all, all, all)
    }
}

impl From<(i32, i32)> for Sides {
    fn from((vertical, horizontal): (i32, i32)) -> Self {
        let (v, h) = (clamp_size(vertical), clamp_size(horizontal));
        Self::new(v, h, v, h)
    }
}

impl From<(i32, i32, i32, i32)> for Sides {
    fn from((top, right, bottom, left): (i32, i32, i32, i32)) -> Self {
        Self::new(
            clamp_size(top),
            clamp_size(right),
            clamp_size(bottom),
            clamp_size(left),
        )
    }
}

// =============================================================================
// BorderEdges
// =============================================================================

/// Which edges of a border are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderEdges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl BorderEdges {
    /// Edges in clockwise order from the top.
    pub const fn new(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Every edge enabled.
    pub const fn all() -> Self {
        Self::uniform(true)
    }

    /// Every edge disabled.
    pub const fn none() -> Self {
        Self::uniform(false)
    }

    /// All four edges set to `on`.
    pub const fn uniform(on: bool) -> Self {
        Self::new(on, on, on, on)
    }

    /// Build from 0, 1 or 4 flags: no flags enables every edge, one flag
    /// applies to all four, four flags are top, right, bottom, left.
    ///
    /// # Panics
    ///
    /// Panics on any other number of flags.
    pub fn from_flags(flags: &[bool]) -> Self {
        match *flags {
            [] => Self::all(),
            [on] => Self::uniform(on),
            [top, right, bottom, left] => Self::new(top, right, bottom, left),
            _ => panic!(
                "border edges take 0, 1 or 4 flags, got {}",
                flags.len()
            ),
        }
    }

    /// True if at least one edge is enabled.
    #[inline]
    pub const fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

impl Default for BorderEdges {
    fn default() -> Self {
        Self::all()
    }
}

impl From<bool> for BorderEdges {
    fn from(on: bool) -> Self {
        Self::uniform(on)
    }
}

impl From<(bool, bool, bool, bool)> for BorderEdges {
    fn from((top, right, bottom, left): (bool, bool, bool, bool)) -> Self {
        Self::new(top, right, bottom, left)
    }
}

// =============================================================================
// Tests
// =============================================================================
