//! Composing rendered blocks.
//!
//! Blocks are multi-line strings, usually the output of
//! [`Style::render`](crate::Style::render). Widths are measured in terminal
//! cells with escape sequences ignored, so styled blocks line up the same
//! way plain ones do.

mod join;
mod place;

pub use join::{join_horizontal, join_vertical};
pub use place::{place, place_horizontal, place_vertical};
