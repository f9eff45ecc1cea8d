//! Light/dark terminal background detection.
//!
//! Adaptive colors need one bit of information about the terminal: is the
//! background light? That bit comes from a [`BackgroundHint`], which callers
//! inject into the renderer. [`EnvBackground`] is the default and reads the
//! `COLORFGBG` variable that rxvt, Konsole and several other terminals
//! export.

use tracing::debug;

/// Environment variable carrying the terminal's `fg;bg` palette indices.
pub const COLORFGBG: &str = "COLORFGBG";

/// Source of the "is the background light?" signal.
pub trait BackgroundHint {
    /// True when the terminal background is light.
    fn is_light_background(&self) -> bool;
}

impl<F> BackgroundHint for F
where
    F: Fn() -> bool,
{
    fn is_light_background(&self) -> bool {
        self()
    }
}

impl BackgroundHint for bool {
    fn is_light_background(&self) -> bool {
        *self
    }
}

/// Background hint read from `COLORFGBG` on every query.
///
/// A background index of 7 (white) or 15 (bright white) means light; a
/// missing or malformed variable means dark.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvBackground;

impl BackgroundHint for EnvBackground {
    fn is_light_background(&self) -> bool {
        let value = std::env::var(COLORFGBG).ok();
        let light = value.as_deref().is_some_and(colorfgbg_is_light);
        debug!(colorfgbg = ?value, light, "background hint from environment");
        light
    }
}

/// Interpret a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
pub fn colorfgbg_is_light(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || bg == 15)
}
