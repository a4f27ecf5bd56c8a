use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::suggestions::SuggestionDriver;
use crate::state::vendor_filter;
use crate::state::*;
use crate::ui::screens::Screen;
use throbber_widgets_tui::ThrobberState;

const LOG_PAGE_SIZE: usize = 20;

/// Execute a command by spawning background tasks or updating state
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
    driver: &mut dyn SuggestionDriver,
) {
    match command {
        AppCommand::LoadVendors => {
            state.vendors_loading = LoadingState::Loading(ThrobberState::default());

            // Same key as any load still running, so a reload replaces it
            let data_loader = data_loader.clone();
            let future = async move {
                data_loader.load_vendors().await;
            };

            task_manager.spawn_load_task("load_vendors".to_string(), future);
        }

        command => execute_command_sync(command, state, driver),
    }
}

/// Execute a command without spawning loader tasks
///
/// Suggestion timers and requests still go through `driver`, so tests can
/// record them instead of running them.
pub fn execute_command_sync(
    command: AppCommand,
    state: &mut AppState,
    driver: &mut dyn SuggestionDriver,
) {
    match command {
        // Simple state updates
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::NavigateBack => {
            state.navigate_back();
        }
        AppCommand::LoadVendors => {
            state.vendors_loading = LoadingState::Loading(ThrobberState::default());
        }

        // Slip form
        AppCommand::NavigateSlipField { forward } => {
            let slip = &mut state.slip;
            slip.current_field = if forward {
                slip.current_field.next()
            } else {
                slip.current_field.previous()
            };
            slip.suggestion_index = 0;
        }
        AppCommand::AppendSlipChar { c } => {
            let slip = &mut state.slip;
            match slip.current_field {
                // The payee is only ever set from the vendor master
                SlipField::Payee => {}
                SlipField::Summary => {
                    slip.summary.push(c);
                    summary_changed(slip, driver);
                }
                SlipField::AccountTitle => slip.account_title.push(c),
                // Raw digits; the yen formatting is applied when rendering
                SlipField::Amount => {
                    if c.is_ascii_digit() {
                        slip.amount.push(c);
                    }
                }
            }
        }
        AppCommand::DeleteSlipChar => {
            let slip = &mut state.slip;
            match slip.current_field {
                SlipField::Payee => slip.payee = None,
                SlipField::Summary => {
                    slip.summary.pop();
                    summary_changed(slip, driver);
                }
                SlipField::AccountTitle => {
                    slip.account_title.pop();
                }
                SlipField::Amount => {
                    slip.amount.pop();
                }
            }
        }
        AppCommand::ClearSlipField => {
            let slip = &mut state.slip;
            match slip.current_field {
                SlipField::Payee => slip.payee = None,
                SlipField::Summary => {
                    slip.summary.clear();
                    summary_changed(slip, driver);
                }
                SlipField::AccountTitle => slip.account_title.clear(),
                SlipField::Amount => slip.amount.clear(),
            }
        }

        // Suggestion dropdown
        // Wraps at both ends
        AppCommand::SelectSuggestion { up } => {
            let slip = &mut state.slip;
            let len = slip.suggestions.suggestions.len();
            if len > 0 {
                slip.suggestion_index = if up {
                    (slip.suggestion_index + len - 1) % len
                } else {
                    (slip.suggestion_index + 1) % len
                };
            }
        }
        AppCommand::AcceptSuggestion => {
            let slip = &mut state.slip;
            if let Some(suggestion) = slip.suggestions.suggestions.get(slip.suggestion_index) {
                tracing::info!(
                    account_title = %suggestion.account_title,
                    score = suggestion.percent(),
                    "Accepted account suggestion"
                );
                slip.account_title = suggestion.account_title.clone();
                slip.dropdown_dismissed = true;
                slip.current_field = SlipField::Amount;
            }
        }
        AppCommand::DismissSuggestions => state.slip.dropdown_dismissed = true,
        // Follow-up of a fired debounce timer; stale timers issue nothing
        AppCommand::IssueSuggestionRequest { timer } => {
            if let Some(request) = state.slip.suggestions.on_timer(timer, driver) {
                tracing::debug!(request = request.0, "Issued suggestion request");
            }
        }

        // Vendor master
        // Every open starts from the default condition; closing keeps the payee
        AppCommand::OpenVendorLookup => {
            state.slip.lookup = Some(VendorLookupState::default());
        }
        AppCommand::CloseVendorLookup => state.slip.lookup = None,
        AppCommand::ToggleVendorCategory(category) => {
            if let Some(lookup) = state.slip.lookup.as_mut() {
                lookup.condition.toggle(category);
                refilter(lookup, &state.vendors);
            }
        }
        AppCommand::TogglePartialMatch => {
            if let Some(lookup) = state.slip.lookup.as_mut() {
                lookup.condition.partial_match = !lookup.condition.partial_match;
                refilter(lookup, &state.vendors);
            }
        }
        AppCommand::FocusLookupField(field) => {
            if let Some(lookup) = state.slip.lookup.as_mut() {
                lookup.focused_field = field;
            }
        }
        AppCommand::NavigateLookupField { forward } => {
            if let Some(lookup) = state.slip.lookup.as_mut() {
                lookup.focused_field = if forward {
                    lookup.focused_field.next()
                } else {
                    lookup.focused_field.previous()
                };
            }
        }
        AppCommand::AppendLookupChar(c) => {
            if let Some(lookup) = state.slip.lookup.as_mut() {
                lookup.condition.text_mut(lookup.focused_field).push(c);
                refilter(lookup, &state.vendors);
            }
        }
        AppCommand::DeleteLookupChar => {
            if let Some(lookup) = state.slip.lookup.as_mut() {
                lookup.condition.text_mut(lookup.focused_field).pop();
                refilter(lookup, &state.vendors);
            }
        }
        AppCommand::ClearLookupField => {
            if let Some(lookup) = state.slip.lookup.as_mut() {
                lookup.condition.text_mut(lookup.focused_field).clear();
                refilter(lookup, &state.vendors);
            }
        }
        // Clamped to the filtered rows, no wrap
        AppCommand::HighlightVendor { up } => {
            if let Some(lookup) = state.slip.lookup.as_mut() {
                let len = lookup.filtered(&state.vendors).len();
                if len > 0 {
                    lookup.highlighted = if up {
                        lookup.highlighted.saturating_sub(1)
                    } else {
                        (lookup.highlighted + 1).min(len - 1)
                    };
                }
            }
        }
        // Enter on a row and F10 differ only in how they read the highlight
        AppCommand::ActivateVendorRow => {
            pick_vendor(state, vendor_filter::select);
        }
        AppCommand::ConfirmVendor => {
            pick_vendor(state, vendor_filter::confirm);
        }

        // Log screen commands
        AppCommand::NavigateToLogs => {
            // No logging here to avoid a feedback loop on the logs screen
            state.navigate_to(Screen::Logs(LogsState::default()));
        }
        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                // Up goes back in time (larger offset)
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset =
                    (s.scroll_offset + LOG_PAGE_SIZE).min(s.total_entries.saturating_sub(1));
            }
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
            }
        }
        AppCommand::ScrollLogsToTop => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.total_entries.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsToBottom => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = 0;
            }
        }
    }
}

/// Every edit of the summary re-opens the dropdown and re-arms the debounce.
fn summary_changed(slip: &mut SlipState, driver: &mut dyn SuggestionDriver) {
    slip.dropdown_dismissed = false;
    slip.suggestions.on_input(&slip.summary, driver);
}

/// Filtered rows can only shrink or grow; keep the highlight on a real row.
fn refilter(lookup: &mut VendorLookupState, vendors: &[genba_portal::VendorRecord]) {
    let len = lookup.filtered(vendors).len();
    lookup.clamp_highlight(len);
}

type Picker = for<'a> fn(
    &[&'a genba_portal::VendorRecord],
    usize,
) -> Option<&'a genba_portal::VendorRecord>;

/// Set the payee from the lookup dialog and move on to the summary.
///
/// An out-of-range highlight (empty result) leaves the dialog open and the
/// previous payee untouched.
fn pick_vendor(state: &mut AppState, pick: Picker) {
    let Some(lookup) = state.slip.lookup.as_ref() else {
        return;
    };
    let filtered = lookup.filtered(&state.vendors);
    let Some(record) = pick(&filtered, lookup.highlighted).cloned() else {
        tracing::debug!(
            index = lookup.highlighted,
            rows = filtered.len(),
            "No vendor at highlighted row"
        );
        return;
    };

    tracing::info!(vendor_code = %record.vendor_code, "Selected vendor");
    state.slip.payee = Some(record);
    state.slip.lookup = None;
    state.slip.current_field = SlipField::Summary;
}
