//! Bottom key-hint bar.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Hints shown when a screen has nothing more specific to say
pub const HELP_TEXT_DEFAULT: &str = "F1: help | Ctrl+L: logs | Ctrl+Q: quit";

pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}
