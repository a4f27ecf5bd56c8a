use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};
use throbber_widgets_tui::{Throbber, BRAILLE_EIGHT};

use crate::state::LoadingState;
use crate::ui::theme;

/// One-cell status marker: spinner while loading, check or cross after
pub fn render_loading_indicator(f: &mut Frame, area: Rect, loading_state: &LoadingState) {
    let (text, color) = match loading_state {
        LoadingState::NotStarted => return,
        LoadingState::Loading(throbber_state) => {
            let throbber = Throbber::default().throbber_set(BRAILLE_EIGHT);
            f.render_stateful_widget(throbber, area, &mut throbber_state.clone());
            return;
        }
        LoadingState::Loaded => ("✓", theme::COLOR_OK),
        LoadingState::Error(_) => ("x", theme::COLOR_ERROR),
    };

    let indicator =
        Paragraph::new(Span::styled(text, Style::default().fg(color))).alignment(Alignment::Right);

    f.render_widget(indicator, area);
}
