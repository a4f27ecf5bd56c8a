//! Colors, sizes and shared styles for the slip and logs screens.

use genba_portal::common::ScoreTier;
use ratatui::style::{Color, Modifier, Style};

pub const COLOR_OK: Color = Color::Green;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_WARN: Color = Color::Yellow;
/// Unfocused borders, filler rows, trace lines
pub const COLOR_MUTED: Color = Color::DarkGray;

const COLOR_ACCENT: Color = Color::Cyan;
const COLOR_FOCUS: Color = Color::Yellow;

pub const SCREEN_MARGIN: u16 = 2;
pub const TITLE_HEIGHT: u16 = 1;
pub const HELP_BAR_HEIGHT: u16 = 3;
pub const INPUT_HEIGHT: u16 = 3;
pub const TABLE_COLUMN_SPACING: u16 = 2;

pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_MUTED)
        .add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn help_text_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn loading_style() -> Style {
    Style::default().fg(COLOR_WARN)
}

/// Text inside the slip field that has focus
pub fn form_field_focused_style() -> Style {
    Style::default()
        .bg(COLOR_MUTED)
        .add_modifier(Modifier::BOLD)
}

pub fn form_field_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_border_style(focused: bool) -> Style {
    Style::default().fg(if focused { COLOR_FOCUS } else { COLOR_MUTED })
}

pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_ACCENT)
}

/// Badge in front of a suggestion: green, yellow or grey by tier
pub fn score_badge_style(tier: ScoreTier) -> Style {
    let bg = match tier {
        ScoreTier::High => Color::Green,
        ScoreTier::Medium => Color::Yellow,
        ScoreTier::Low => Color::Gray,
    };
    Style::default().fg(Color::Black).bg(bg)
}
