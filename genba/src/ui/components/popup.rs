//! Modal frame shared by the help popup and the vendor lookup dialog.

use ratatui::prelude::Rect;
use ratatui::{
    style::Style,
    text::Line,
    widgets::{Block, Clear},
    Frame,
};

use crate::ui::layouts;

/// Clear a centered area of `size` (width %, height %), draw a titled border
/// and return the inner area for content.
pub fn render_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    size: (u16, u16),
    title: &str,
    border_style: Style,
) -> Rect {
    let area = layouts::centered_popup(size, parent_area);
    f.render_widget(Clear, area);

    let block = Block::bordered()
        .title(Line::from(title).centered())
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    inner
}
