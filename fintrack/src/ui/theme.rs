//! Colors, layout constants and shared styles.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Income
pub const COLOR_POSITIVE: Color = Color::Green;

/// Expenses
pub const COLOR_NEGATIVE: Color = Color::Red;

pub const COLOR_ZERO: Color = Color::DarkGray;

pub const COLOR_SELECTION_BG: Color = Color::DarkGray;

pub const COLOR_HEADER: Color = Color::Yellow;

pub const COLOR_HELP_TEXT: Color = Color::Gray;

/// Screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

pub const COLOR_LOADING: Color = Color::Yellow;

/// Border of the "Incomplete Request" dialog
pub const COLOR_BORDER_DANGER: Color = Color::Red;

pub const COLOR_BORDER_INFO: Color = Color::Blue;

pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

pub const COLOR_FORM_FIELD_BG: Color = Color::DarkGray;

/// Dropdowns still showing their "Select ..." placeholder
pub const COLOR_PLACEHOLDER: Color = Color::DarkGray;

// =============================================================================
// Layout Constants
// =============================================================================

pub const SCREEN_MARGIN: u16 = 1;

/// Session bar at the very top of every screen
pub const SESSION_HEADER_HEIGHT: u16 = 1;

pub const TITLE_HEIGHT: u16 = 1;

pub const HELP_BAR_HEIGHT: u16 = 3;

pub const TABLE_COLUMN_SPACING: u16 = 2;

/// Height of one bordered form input
pub const FORM_FIELD_HEIGHT: u16 = 3;

// =============================================================================
// Style Functions
// =============================================================================

pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD)
}

pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_FORM_FIELD_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

/// Form content while the error dialog covers it
pub fn form_hidden_style() -> Style {
    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
}

pub fn placeholder_style() -> Style {
    Style::default().fg(COLOR_PLACEHOLDER)
}

pub fn danger_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_DANGER)
        .add_modifier(Modifier::BOLD)
}

pub fn info_border_style() -> Style {
    Style::default()
        .fg(COLOR_BORDER_INFO)
        .add_modifier(Modifier::BOLD)
}

pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

// =============================================================================
// Amount Color Helper
// =============================================================================

/// Positive = green, negative = red, zero = gray
pub fn amount_color(amount: i64) -> Color {
    if amount > 0 {
        COLOR_POSITIVE
    } else if amount < 0 {
        COLOR_NEGATIVE
    } else {
        COLOR_ZERO
    }
}
