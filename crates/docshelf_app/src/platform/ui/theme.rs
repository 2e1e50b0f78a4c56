//! Centralized color theme for the docshelf TUI.
//!
//! Views import from here instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent: focused borders, active controls.
pub const PRIMARY: Color = Color::Rgb(0x2E, 0x7D, 0x9B);
/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
/// Muted text: secondary labels, unfocused borders.
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
/// Dim text: disabled items, the empty-state row.
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);
/// Error: failures, destructive confirmations.
pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
/// Success: confirmations.
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
/// Info: in-progress status.
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

/// Primary-colored bold text (titles, active items).
pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Border style depending on focus.
pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(TEXT_MUTED)
    }
}
