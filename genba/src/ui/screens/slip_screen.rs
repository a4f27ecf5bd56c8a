use genba_portal::VendorRecord;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppState, SlipField, SlipState};
use crate::ui::{
    components::{help_bar, screen_title, suggestion_dropdown::SuggestionDropdown},
    layouts, theme, utils,
};

pub fn render(f: &mut Frame, state: &AppState) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    screen_title::render_screen_title(f, title_area, "支払伝票入力", &state.vendors_loading);

    let (field_areas, detail_area) = layouts::input_stack(content_area, SlipField::ALL.len());
    for (field, area) in SlipField::ALL.iter().zip(field_areas.iter()) {
        render_field(f, *area, &state.slip, *field);
    }
    render_payee_detail(f, detail_area, state.slip.payee.as_ref());

    help_bar::render_help_bar(f, help_area, help_text(&state.slip));

    // Dropdown last so it draws over the fields below it
    if let Some(anchor) = SlipField::ALL
        .iter()
        .position(|field| *field == SlipField::AccountTitle)
        .and_then(|i| field_areas.get(i))
    {
        render_suggestions(f, *anchor, &state.slip);
    }
}

fn render_field(f: &mut Frame, area: Rect, slip: &SlipState, field: SlipField) {
    let focused = slip.current_field == field;

    let text = match field {
        SlipField::Amount => utils::fmt_yen(&slip.amount),
        SlipField::Payee => slip
            .payee
            .as_ref()
            .map(|p| format!("{}  {}", p.vendor_code, p.vendor_name))
            .unwrap_or_default(),
        _ => slip.field_text(field).to_string(),
    };

    let line = if text.is_empty() && !focused {
        Line::from(Span::styled(placeholder(field), theme::help_text_style()))
    } else if focused && field != SlipField::Payee {
        Line::from(vec![Span::raw(text), Span::raw("▏")])
    } else {
        Line::from(text)
    };

    let paragraph = Paragraph::new(line)
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

    f.render_widget(paragraph, area);
}

fn placeholder(field: SlipField) -> &'static str {
    match field {
        SlipField::Payee => "Enter で支払先マスタを検索",
        SlipField::Summary => "2文字以上で勘定科目を提案",
        SlipField::AccountTitle => "候補から選択または入力",
        SlipField::Amount => "0",
    }
}

fn render_payee_detail(f: &mut Frame, area: Rect, payee: Option<&VendorRecord>) {
    let Some(payee) = payee else {
        return;
    };

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<8}", label), theme::header_style()),
            Span::raw(value),
        ])
    };

    let lines = vec![
        row("区分", payee.category.label().to_string()),
        row("振込先", payee.transfer_base_name.clone()),
        row(
            "口座",
            format!(
                "{} {} {}",
                payee.bank_name, payee.account_no, payee.account_name
            ),
        ),
        row(
            "支払条件",
            format!("{}日 {}", payee.terms.pay_date, payee.terms.pay_type),
        ),
        row("登録番号", payee.business_reg_no.clone()),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::COLOR_MUTED))
            .title(" 支払先情報 "),
    );
    f.render_widget(paragraph, area);
}

fn render_suggestions(f: &mut Frame, anchor: Rect, slip: &SlipState) {
    let session = &slip.suggestions;
    let editing = matches!(
        slip.current_field,
        SlipField::Summary | SlipField::AccountTitle
    );
    if !editing || slip.dropdown_dismissed {
        return;
    }

    let items = if slip.is_dropdown_visible() {
        session.suggestions.as_slice()
    } else {
        &[]
    };

    // A failed lookup looks the same as an empty one; the reason is only logged
    SuggestionDropdown::new(items)
        .selected_index(slip.suggestion_index)
        .loading(session.loading.then_some(&slip.suggestion_throbber))
        .render(f, anchor);
}

fn help_text(slip: &SlipState) -> &'static str {
    if slip.is_dropdown_visible() {
        "↑↓: 候補選択 | Enter: 採用 | Esc: 閉じる | Tab: 次の項目"
    } else if slip.current_field == SlipField::Payee {
        "Enter: 支払先検索 | Tab: 次の項目 | F1: help | Ctrl+Q: quit"
    } else {
        help_bar::HELP_TEXT_DEFAULT
    }
}
