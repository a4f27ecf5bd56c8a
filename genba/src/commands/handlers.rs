use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::*;
use crate::ui::screens::Screen;
use genba_portal::VendorCategory;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 1: Help popup swallows everything except its own toggles
    if state.help_visible {
        return match key {
            Key::F(1) | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') if event.modifiers.ctrl => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 2: Global shortcuts
    if event.modifiers.ctrl {
        match key {
            Key::Char('q') | Key::Char('c') => return Some(AppCommand::Quit),
            Key::Char('l') => return Some(AppCommand::NavigateToLogs),
            _ => {}
        }
    }

    match state.current_screen() {
        Screen::Logs(_) => handle_logs_keys(key),
        Screen::Slip => match &state.slip.lookup {
            Some(_) => handle_lookup_keys(event),
            None => handle_slip_keys(event, &state.slip),
        },
    }
}

fn handle_logs_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Up => Some(AppCommand::ScrollLogsUp),
        Key::Down => Some(AppCommand::ScrollLogsDown),
        Key::PageUp => Some(AppCommand::ScrollLogsPageUp),
        Key::PageDown => Some(AppCommand::ScrollLogsPageDown),
        Key::Home => Some(AppCommand::ScrollLogsToTop),
        Key::End => Some(AppCommand::ScrollLogsToBottom),
        Key::Esc | Key::Left => Some(AppCommand::NavigateBack),
        Key::F(1) => Some(AppCommand::ToggleHelp),
        _ => None,
    }
}

/// Vendor lookup dialog is modal over the slip
fn handle_lookup_keys(event: KeyEvent) -> Option<AppCommand> {
    match event.key {
        Key::F(2) => Some(AppCommand::ToggleVendorCategory(VendorCategory::Payee)),
        Key::F(3) => Some(AppCommand::ToggleVendorCategory(VendorCategory::Purchase)),
        Key::F(4) => Some(AppCommand::ToggleVendorCategory(VendorCategory::Outsource)),
        Key::F(5) => Some(AppCommand::TogglePartialMatch),
        Key::F(6) => Some(AppCommand::LoadVendors),
        Key::F(10) => Some(AppCommand::ConfirmVendor),
        Key::Tab => Some(AppCommand::NavigateLookupField { forward: true }),
        Key::BackTab => Some(AppCommand::NavigateLookupField { forward: false }),
        Key::Up => Some(AppCommand::HighlightVendor { up: true }),
        Key::Down => Some(AppCommand::HighlightVendor { up: false }),
        Key::Enter => Some(AppCommand::ActivateVendorRow),
        Key::Esc => Some(AppCommand::CloseVendorLookup),
        Key::Backspace => Some(AppCommand::DeleteLookupChar),
        Key::Char('u') if event.modifiers.ctrl => Some(AppCommand::ClearLookupField),
        Key::Char(c) if !event.modifiers.ctrl && !c.is_control() => {
            Some(AppCommand::AppendLookupChar(c))
        }
        _ => None,
    }
}

fn handle_slip_keys(event: KeyEvent, slip: &SlipState) -> Option<AppCommand> {
    let dropdown = slip.is_dropdown_visible();

    match event.key {
        Key::F(1) => Some(AppCommand::ToggleHelp),
        Key::F(6) => Some(AppCommand::LoadVendors),
        Key::Tab => Some(AppCommand::NavigateSlipField { forward: true }),
        Key::BackTab => Some(AppCommand::NavigateSlipField { forward: false }),
        Key::Up if dropdown => Some(AppCommand::SelectSuggestion { up: true }),
        Key::Down if dropdown => Some(AppCommand::SelectSuggestion { up: false }),
        Key::Enter => {
            if slip.current_field == SlipField::Payee {
                Some(AppCommand::OpenVendorLookup)
            } else if dropdown {
                Some(AppCommand::AcceptSuggestion)
            } else {
                Some(AppCommand::NavigateSlipField { forward: true })
            }
        }
        Key::Esc if dropdown => Some(AppCommand::DismissSuggestions),
        Key::Backspace => Some(AppCommand::DeleteSlipChar),
        Key::Char('u') if event.modifiers.ctrl => Some(AppCommand::ClearSlipField),
        Key::Char(c) if !event.modifiers.ctrl && !c.is_control() => {
            Some(AppCommand::AppendSlipChar { c })
        }
        _ => None,
    }
}
