//! Consolidated styling module for terminal output.
//!
//! This module uses the anstyle ecosystem:
//! - anstyle for composable styling (256-colour prompt blocks)
//! - anstream for writing with an explicit colour choice
//! - color-print for diagnostics on stderr

mod constants;
pub mod theme;

use anstyle::{Ansi256Color, Color, Style};

pub use constants::*;
pub use theme::{Glyph, ResolvedStyle, StyleOptions};

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

// ============================================================================
// 256-colour helpers
// ============================================================================

/// A palette index as an anstyle colour.
pub const fn color(index: u8) -> Color {
    Color::Ansi256(Ansi256Color(index))
}

/// Foreground-only style - renders as `ESC[38;5;<n>m`
pub const fn fg(index: u8) -> Style {
    Style::new().fg_color(Some(color(index)))
}

/// Foreground and background style for a prompt block.
pub const fn block(fg: u8, bg: u8) -> Style {
    Style::new()
        .fg_color(Some(color(fg)))
        .bg_color(Some(color(bg)))
}
