use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = get_help_items(screen);

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press F1 or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::Slip => {
            items.push(("Tab/Shift+Tab", "Move between slip fields"));
            items.push(("Enter", "Payee: open vendor lookup"));
            items.push(("", "Summary/Account: accept highlighted suggestion"));
            items.push(("↑/↓", "Move through suggestions"));
            items.push(("Esc", "Hide suggestions"));
            items.push(("Ctrl+U", "Clear field"));
            items.push(("F6", "Reload vendor master"));
            items.push(("", ""));
            items.push(("--- Vendor lookup ---", ""));
            items.push(("F2/F3/F4", "Toggle 支払先 / 仕入先 / 外注先"));
            items.push(("F5", "Toggle partial match"));
            items.push(("Tab/Shift+Tab", "Move between search fields"));
            items.push(("↑/↓", "Move row highlight"));
            items.push(("Enter", "Select highlighted vendor"));
            items.push(("F10", "Confirm highlighted vendor"));
            items.push(("Esc", "Close without selecting"));
        }
        Screen::Logs(..) => {
            items.push(("↑", "Scroll up (older logs)"));
            items.push(("↓", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("Home", "Scroll to oldest logs"));
            items.push(("End", "Scroll to newest logs"));
            items.push(("Esc/←", "Back to slip"));
        }
    }

    // Global help
    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("Ctrl+L", "Show logs"));
    items.push(("F1", "Toggle this help"));
    items.push(("Ctrl+Q", "Quit application"));

    items
}
