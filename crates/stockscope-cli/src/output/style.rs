//! ANSI colors for terminal output.

use std::fmt::Display;

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";
pub const GREY: &str = "\x1b[90m";
pub const LIGHT_GREEN: &str = "\x1b[92m";
const RESET: &str = "\x1b[0m";

/// Whether escape codes are emitted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    pub const fn colored() -> Self {
        Self { color: true }
    }

    pub const fn plain() -> Self {
        Self { color: false }
    }

    pub fn paint(self, color: &str, text: impl Display) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_leaves_text_alone() {
        assert_eq!(Style::plain().paint(RED, "boom"), "boom");
        assert_eq!(Style::colored().paint(RED, "boom"), "\x1b[31mboom\x1b[0m");
    }
}
