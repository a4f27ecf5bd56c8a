//! Placeholder drawn where a table has no rows yet.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Text},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::theme;

pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, hint: &str) {
    let text = Text::from(vec![
        Line::default(),
        Line::styled(message, theme::loading_style()),
        Line::styled(hint, theme::help_text_style()),
    ])
    .centered();

    f.render_widget(Paragraph::new(text).block(Block::bordered().title(title)), area);
}
