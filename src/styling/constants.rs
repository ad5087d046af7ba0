//! Style constants and message formatting for diagnostics
//!
//! Diagnostics go to stderr and are formatted with `cformat!` HTML-like tags:
//!
//! ```
//! use color_print::cformat;
//!
//! let option = "ch_chevron";
//! let msg = cformat!("<red>Invalid glyph for <bold>{option}</></>");
//! ```
//!
//! The prompt itself never uses these; it is coloured with the 256-colour
//! helpers in the parent module.

use std::fmt;

use color_print::cformat;

/// Error emoji: `cformat!("{ERROR_EMOJI} <red>message</>")`
pub const ERROR_EMOJI: &str = "❌";

/// Hint emoji: `cformat!("{HINT_EMOJI} <dim>message</>")`
pub const HINT_EMOJI: &str = "💡";

/// A message that has already been formatted with emoji and styling.
///
/// Does not implement `AsRef<str>`, so passing one back into a message
/// function is a compile error rather than a double-formatted string.
#[derive(Debug, Clone)]
pub struct FormattedMessage(String);

impl FormattedMessage {
    /// Borrow the inner string for inspection (e.g., in tests).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormattedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format an error message with emoji and red styling
pub fn error_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{ERROR_EMOJI} <red>{}</>", content.as_ref()))
}

/// Format a hint message with emoji and dim styling
pub fn hint_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{HINT_EMOJI} <dim>{}</>", content.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let msg = error_message("Style option ch_chevron is invalid");
        // Red is ANSI 31
        assert!(msg.as_str().contains("\x1b[31m"));
        assert!(msg.as_str().contains("❌"));
        assert!(msg.as_str().contains("ch_chevron"));
    }

    #[test]
    fn test_hint_message() {
        let msg = hint_message("Check PROMPT_STYLE");
        assert!(msg.as_str().contains("💡"));
        assert!(msg.as_str().contains("Check PROMPT_STYLE"));
    }
}
