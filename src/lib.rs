//! # spark-gloss
//!
//! Declarative styling and layout for terminal text.
//!
//! A [`Style`] describes how a string should look: colors, text attributes,
//! alignment, padding, borders and margins. Rendering applies those
//! attributes in a fixed order and returns a plain `String` of ANSI-escaped
//! text. Styles are immutable values; every setter returns a new style.
//!
//! ```rust
//! use spark_gloss::{Position, Style, join_horizontal, rounded_border};
//!
//! let card = Style::new().border(rounded_border()).padding((0, 1));
//! let left = card.render("left");
//! let right = card.clone().bold(true).render("right");
//!
//! let row = join_horizontal(Position::Top, &[left, right]);
//! assert_eq!(spark_gloss::height(&row), 3);
//! ```
//!
//! ## Modules
//!
//! - [`measure`] - Display width of styled text, escape stripping, truncation
//! - [`color`] - Hex, named and 256-code colors; adaptive light/dark pairs
//! - [`background`] - Light/dark terminal background detection
//! - [`border`] - Border glyph sets
//! - [`types`] - Positions, attribute flags, box sides, border edge toggles
//! - [`style`] - The immutable [`Style`] value and its setters
//! - [`renderer`] - The render pipeline
//! - [`layout`] - Joining and placing rendered blocks
//! - [`error`] - Color parsing errors

pub mod background;
pub mod border;
pub mod color;
pub mod error;
pub mod layout;
pub mod measure;
pub mod renderer;
pub mod style;
pub mod types;

// Re-export commonly used items
pub use background::{BackgroundHint, EnvBackground};

pub use border::{
    Border, block_border, double_border, hidden_border, inner_half_block_border, normal_border,
    outer_half_block_border, rounded_border, thick_border,
};

pub use color::{AdaptiveColor, Color, ColorKind, TerminalColor};

pub use error::{ColorError, ColorResult};

pub use layout::{join_horizontal, join_vertical, place, place_horizontal, place_vertical};

pub use measure::{height, line_width, size, strip_ansi, truncate, width};

pub use renderer::Renderer;

pub use style::Style;

pub use types::{Attr, BorderEdges, Position, Sides};
