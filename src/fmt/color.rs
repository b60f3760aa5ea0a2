//! The console palette is the basic 8-color ANSI set — every terminal renders it,
//! so no true-color detection is needed.

use crate::level::Level;

/// Foreground colors used by the console formatter; the discriminant is the SGR color index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 1,
    Yellow = 3,
    Blue = 4,
    Cyan = 6,
    Gray = 7,
}

impl Color {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// Unrouted levels (Trace, Fatal) fall through to gray.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Error => Self::Red,
            Level::Warn => Self::Yellow,
            Level::Info => Self::Blue,
            Level::Debug => Self::Cyan,
            _ => Self::Gray,
        }
    }

    /// SGR code for this color as a foreground, e.g. `31` for red.
    #[must_use]
    pub const fn code(self) -> u8 {
        30 + self as u8
    }

    /// The raw `\x1b[3Nm` escape.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[{}m", self.code())
    }
}

/// Wraps `text` in the color's escape and a reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
