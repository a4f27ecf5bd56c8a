//! Vendor master lookup dialog.

use genba_portal::{VendorCategory, VendorRecord};
use itertools::Itertools;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::state::vendor_filter::SearchField;
use crate::state::{LoadingState, VendorLookupState};
use crate::ui::{layouts, theme};

use super::{loading_indicator, popup};

/// The result table never shows fewer rows than this
pub const MIN_TABLE_ROWS: usize = 8;

pub fn render_vendor_lookup(
    f: &mut Frame,
    lookup: &VendorLookupState,
    vendors: &[VendorRecord],
    loading: &LoadingState,
) {
    let inner = popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::DIALOG,
        " 支払先マスタ検索 ",
        theme::accent_border_style(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(theme::INPUT_HEIGHT * 2),
            Constraint::Min(MIN_TABLE_ROWS as u16 + 3),
            Constraint::Length(1),
        ])
        .split(inner);

    render_toggles(f, chunks[0], lookup, loading);
    render_inputs(f, chunks[1], lookup);
    render_results(f, chunks[2], lookup, vendors);

    let hint = Paragraph::new(
        "Tab: 項目移動 | ↑↓: 行選択 | Enter: 選択 | F10: 確定 | F6: 再読込 | Esc: 閉じる",
    )
    .style(theme::help_text_style())
    .alignment(Alignment::Center);
    f.render_widget(hint, chunks[3]);
}

fn checkbox(checked: bool, label: &str, key: &str) -> Vec<Span<'static>> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if checked {
        Style::default().fg(theme::COLOR_OK)
    } else {
        Style::default().fg(theme::COLOR_MUTED)
    };
    vec![
        Span::styled(format!("{} {}", mark, label), style),
        Span::styled(format!(" ({})   ", key), theme::help_text_style()),
    ]
}

fn render_toggles(f: &mut Frame, area: Rect, lookup: &VendorLookupState, loading: &LoadingState) {
    let (text_area, indicator_area) = layouts::title_with_loading(area);
    let condition = &lookup.condition;

    let keys = ["F2", "F3", "F4"];
    let mut spans: Vec<Span> = VendorCategory::ALL
        .into_iter()
        .zip(keys)
        .flat_map(|(category, key)| checkbox(condition.includes(category), category.label(), key))
        .collect();
    spans.extend(checkbox(condition.partial_match, "部分一致", "F5"));

    f.render_widget(Paragraph::new(Line::from(spans)), text_area);
    loading_indicator::render_loading_indicator(f, indicator_area, loading);
}

fn render_inputs(f: &mut Frame, area: Rect, lookup: &VendorLookupState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(theme::INPUT_HEIGHT); 2])
        .split(area);

    for (row_area, fields) in rows.iter().zip(SearchField::ALL.chunks(3)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*row_area);

        for (cell, field) in cells.iter().zip(fields) {
            let focused = *field == lookup.focused_field;
            let mut text = lookup.condition.text(*field).to_string();
            if focused {
                text.push('▏');
            }
            let input = Paragraph::new(text)
                .style(if focused {
                    theme::form_field_focused_style()
                } else {
                    theme::form_field_style()
                })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme::input_border_style(focused))
                        .title(field.label()),
                );
            f.render_widget(input, *cell);
        }
    }
}

fn render_results(f: &mut Frame, area: Rect, lookup: &VendorLookupState, vendors: &[VendorRecord]) {
    let filtered = lookup.filtered(vendors);

    let header = Row::new(vec![
        Cell::from("コード"),
        Cell::from("振込先名"),
        Cell::from("フリガナ"),
        Cell::from("区分"),
        Cell::from("銀行名"),
        Cell::from("口座番号"),
        Cell::from("口座名義"),
    ])
    .style(theme::header_style())
    .underlined();

    let rows = filtered
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.vendor_code.clone()),
                Cell::from(record.transfer_base_name.clone()),
                Cell::from(record.vendor_kana.clone()),
                Cell::from(record.category.label()),
                Cell::from(record.bank_name.clone()),
                Cell::from(record.account_no.clone()),
                Cell::from(record.account_name.clone()),
            ])
        })
        .pad_using(MIN_TABLE_ROWS, |_| {
            Row::new(vec![Cell::from("-"); 7]).style(Style::default().fg(theme::COLOR_MUTED))
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Percentage(20),
            Constraint::Percentage(18),
            Constraint::Length(6),
            Constraint::Percentage(14),
            Constraint::Length(9),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .column_spacing(theme::TABLE_COLUMN_SPACING)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" 検索結果 {} / {} 件 ", filtered.len(), vendors.len())),
    )
    .row_highlight_style(theme::selection_style());

    let mut table_state = TableState::default();
    if !filtered.is_empty() {
        table_state.select(Some(lookup.highlighted));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}
