use genba_portal::AccountSuggestion;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState, BRAILLE_EIGHT};

use crate::ui::{theme, utils};

/// Descriptions longer than this are cut with "..."
pub const DESCRIPTION_MAX_CHARS: usize = 40;

/// Ranked account-title suggestions shown under an input
pub struct SuggestionDropdown<'a> {
    pub items: &'a [AccountSuggestion],
    pub selected_index: usize,
    pub loading: Option<&'a ThrobberState>,
}

impl<'a> SuggestionDropdown<'a> {
    pub fn new(items: &'a [AccountSuggestion]) -> Self {
        Self {
            items,
            selected_index: 0,
            loading: None,
        }
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn loading(mut self, throbber: Option<&'a ThrobberState>) -> Self {
        self.loading = throbber;
        self
    }

    fn content_height(&self) -> usize {
        self.items.len() + usize::from(self.loading.is_some())
    }

    /// Render below `anchor` (the input the dropdown belongs to). An empty,
    /// idle dropdown draws nothing.
    pub fn render(self, f: &mut Frame, anchor: Rect) {
        let content_height = self.content_height();
        if content_height == 0 {
            return;
        }

        // Dropdown dimensions (add 2 for borders)
        let dropdown_height = (content_height + 2) as u16;
        let x = anchor.x;
        let y = anchor.y + anchor.height;

        let frame = f.area();
        let (final_y, final_height) = if y + dropdown_height > frame.height {
            // Not enough room below, position above if possible
            if anchor.y >= dropdown_height {
                (anchor.y - dropdown_height, dropdown_height)
            } else {
                (y, frame.height.saturating_sub(y).max(3))
            }
        } else {
            (y, dropdown_height)
        };

        let width = anchor.width.max(30).min(frame.width.saturating_sub(x));
        let area = Rect::new(x, final_y, width, final_height);

        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" 勘定科目候補 ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut rows = inner;
        if let Some(throbber_state) = self.loading {
            let line = Rect::new(inner.x, inner.y, inner.width, 1.min(inner.height));
            let throbber = Throbber::default()
                .label("候補を検索中...")
                .style(theme::loading_style())
                .throbber_set(BRAILLE_EIGHT);
            f.render_stateful_widget(throbber, line, &mut throbber_state.clone());
            rows.y += 1;
            rows.height = rows.height.saturating_sub(1);
        }

        let list_items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, suggestion)| suggestion_line(suggestion, i == self.selected_index))
            .collect();

        f.render_widget(List::new(list_items), rows);
    }
}

fn suggestion_line(suggestion: &AccountSuggestion, selected: bool) -> ListItem<'static> {
    let style = if selected {
        theme::selection_style()
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(
            format!(" {:>3}% ", suggestion.percent()),
            theme::score_badge_style(suggestion.score_tier()),
        ),
        Span::raw(" "),
        Span::styled(suggestion.account_title.clone(), style),
    ];
    if !suggestion.description.is_empty() {
        spans.push(Span::styled(
            format!(
                "  {}",
                utils::truncate_chars(&suggestion.description, DESCRIPTION_MAX_CHARS)
            ),
            theme::help_text_style(),
        ));
    }

    ListItem::new(Line::from(spans)).style(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn suggestion(title: &str, description: &str, score: f64) -> AccountSuggestion {
        AccountSuggestion {
            account_title: title.to_string(),
            description: description.to_string(),
            score,
        }
    }

    fn render_to_text(items: &[AccountSuggestion]) -> String {
        let backend = TestBackend::new(100, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                SuggestionDropdown::new(items).render(f, Rect::new(0, 0, 90, 3));
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_rounded_percentage() {
        let text = render_to_text(&[suggestion("Travel", "", 0.876)]);
        assert!(text.contains("88%"));
        assert!(text.contains("Travel"));
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let description = "x".repeat(50);
        let text = render_to_text(&[suggestion("Supplies", &description, 0.5)]);
        assert!(text.contains(&format!("{}...", "x".repeat(40))));
        assert!(!text.contains(&"x".repeat(41)));
    }

    #[test]
    fn nothing_to_show_renders_nothing() {
        let text = render_to_text(&[]);
        assert!(text.trim().is_empty());
    }
}
