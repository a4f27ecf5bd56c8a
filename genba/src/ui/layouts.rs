//! Layout builders shared by the screens and dialogs.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

use super::theme::{HELP_BAR_HEIGHT, INPUT_HEIGHT, SCREEN_MARGIN, TITLE_HEIGHT};

/// (title, content, help bar)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let [title, content, help] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Min(10),
        Constraint::Length(HELP_BAR_HEIGHT),
    ])
    .margin(SCREEN_MARGIN)
    .areas(area);

    (title, content, help)
}

/// `count` bordered input rows stacked from the top, then whatever is left.
pub fn input_stack(area: Rect, count: usize) -> (Vec<Rect>, Rect) {
    let constraints = std::iter::repeat_n(Constraint::Length(INPUT_HEIGHT), count)
        .chain(std::iter::once(Constraint::Min(0)));
    let chunks = Layout::vertical(constraints).split(area);

    (chunks[..count].to_vec(), chunks[count])
}

/// Title text on the left, one cell for the throbber on the right.
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let [text, throbber] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
    (text, throbber)
}

/// Rectangle of `(percent_x, percent_y)` of `area`, centered in it.
pub fn centered_popup((percent_x, percent_y): (u16, u16), area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

pub mod popup_sizes {
    /// Help overlay
    pub const LARGE: (u16, u16) = (80, 80);
    /// Vendor lookup dialog
    pub const DIALOG: (u16, u16) = (94, 90);
}
