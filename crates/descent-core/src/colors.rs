//! ANSI color codes for rendered trees and trace output.
//!
//! Four semantic colors plus a dim modifier:
//! - Blue: rule (non-terminal) names
//! - Green: terminals and successful attempts
//! - Red: failed attempts and failed productions
//! - Dim: branch glyphs, positions, other structure

/// ANSI color palette for terminal output.
///
/// Uses only standard 16-color ANSI codes so it reads the same on light and
/// dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wraps `text` in `color` and a reset, or returns it unchanged when
    /// colors are off.
    pub fn paint(&self, color: &str, text: &str) -> String {
        if color.is_empty() || text.is_empty() {
            return text.to_owned();
        }
        format!("{color}{text}{}", self.reset)
    }
}
