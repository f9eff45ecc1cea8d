//! Text measurement for styled terminal output.
//!
//! Everything here treats ANSI escape sequences as zero-width, so rendered
//! output can be measured and cut exactly like plain text.
//!
//! - **Width**: grapheme-aware cell width (CJK and emoji = 2 cells)
//! - **Stripping**: removes CSI, OSC, DCS and two-byte escape sequences
//! - **Truncation**: cuts to a cell budget, keeping escapes intact
//!
//! Built on `unicode-width` for East Asian Width tables and
//! `unicode-segmentation` for UAX #29 grapheme boundaries.

mod ansi;
mod truncate;
mod width;

pub use ansi::{Segment, Segments, segments, strip_ansi};
pub use truncate::truncate;
pub use width::{char_width, grapheme_width, height, line_width, size, width};
