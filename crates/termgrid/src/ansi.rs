//! ANSI color and hyperlink wrappers.
//!
//! The strings produced here are exactly the wrappers
//! [`visual_length`](crate::visual_length) recognizes, so painted cells size
//! and align correctly inside tables.

use std::fmt;

use serde::{Deserialize, Serialize};

const CSI: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// The eight base terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColor {
    fn offset(self) -> u8 {
        self as u8
    }
}

/// Foreground color, normal or bright intensity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fg {
    /// SGR 30-37.
    Dark(AnsiColor),
    /// SGR 90-97.
    Bright(AnsiColor),
}

/// Background color, normal or bright intensity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bg {
    /// SGR 40-47.
    Dark(AnsiColor),
    /// SGR 100-107.
    Bright(AnsiColor),
}

impl Default for Bg {
    fn default() -> Self {
        Bg::Dark(AnsiColor::Black)
    }
}

impl Fg {
    /// SGR parameter for this color.
    pub fn code(self) -> u8 {
        match self {
            Fg::Dark(c) => 30 + c.offset(),
            Fg::Bright(c) => 90 + c.offset(),
        }
    }
}

impl Bg {
    /// SGR parameter for this color.
    pub fn code(self) -> u8 {
        match self {
            Bg::Dark(c) => 40 + c.offset(),
            Bg::Bright(c) => 100 + c.offset(),
        }
    }
}

impl fmt::Display for Fg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}m", CSI, self.code())
    }
}

impl fmt::Display for Bg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}m", CSI, self.code())
    }
}

/// Paints `text` with a foreground color on the default black background.
///
/// # Example
///
/// ```rust
/// use termgrid::ansi::{paint, AnsiColor, Fg};
///
/// assert_eq!(paint("ok", Fg::Dark(AnsiColor::Green)), "\x1b[32m\x1b[40mok\x1b[0m");
/// ```
pub fn paint(text: &str, fg: Fg) -> String {
    paint_on(text, fg, Bg::default())
}

/// Paints `text` with explicit foreground and background colors.
pub fn paint_on(text: &str, fg: Fg, bg: Bg) -> String {
    format!("{}{}{}{}", fg, bg, text, RESET)
}

/// Wraps `label` in an OSC 8 hyperlink pointing at `uri`.
pub fn hyperlink(uri: &str, label: &str) -> String {
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::visual_length;

    #[test]
    fn test_codes() {
        assert_eq!(Fg::Dark(AnsiColor::Black).code(), 30);
        assert_eq!(Fg::Bright(AnsiColor::White).code(), 97);
        assert_eq!(Bg::Dark(AnsiColor::Red).code(), 41);
        assert_eq!(Bg::Bright(AnsiColor::Cyan).code(), 106);
    }

    #[test]
    fn test_paint_on() {
        assert_eq!(
            paint_on("x", Fg::Bright(AnsiColor::Yellow), Bg::Dark(AnsiColor::Blue)),
            "\x1b[93m\x1b[44mx\x1b[0m"
        );
    }

    #[test]
    fn test_painted_text_measures_as_label() {
        assert_eq!(visual_length(&paint("warning", Fg::Dark(AnsiColor::Yellow))), 7);
    }

    #[test]
    fn test_hyperlink_measures_as_label() {
        let link = hyperlink("https://docs.rs/termgrid", "docs");
        assert!(link.starts_with("\x1b]8;;https://docs.rs/termgrid\x1b\\"));
        assert_eq!(visual_length(&link), 4);
    }

    #[test]
    fn test_color_names_deserialize() {
        let color: AnsiColor = serde_json::from_str(r#""magenta""#).unwrap();
        assert_eq!(color, AnsiColor::Magenta);
    }
}
