pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Pure render dispatcher - routes to appropriate screen renderer
/// This function is read-only and never mutates state
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    match state.current_screen() {
        Screen::Slip => {
            slip_screen::render(f, state);

            if let Some(lookup) = &state.slip.lookup {
                components::vendor_lookup::render_vendor_lookup(
                    f,
                    lookup,
                    &state.vendors,
                    &state.vendors_loading,
                );
            }
        }
        Screen::Logs(logs_state) => {
            logs_screen::render(f, logs_state, log_buffer);
        }
    }

    // Render help popup on top if visible
    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VendorLookupState;
    use genba_portal::common::sample_vendors;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        let buffer = LogBuffer::new(10);
        terminal.draw(|f| render_app(f, state, &buffer)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn lookup_dialog_lists_every_vendor_by_default() {
        let mut state = AppState::default();
        state.vendors = sample_vendors();
        state.slip.lookup = Some(VendorLookupState::default());

        let screen = draw(&state);
        for vendor in &state.vendors {
            assert!(screen.contains(&vendor.vendor_code), "{}", vendor.vendor_code);
        }
    }

    #[test]
    fn degraded_suggestions_show_no_error_text() {
        use crate::state::suggestions::{SuggestionDriver, SuggestionOutcome, TaskHandle, TimerId, RequestId};
        use crate::state::SlipField;
        use genba_portal::SuggestionReply;
        use std::time::Duration;

        struct Detached;
        impl SuggestionDriver for Detached {
            fn schedule(&mut self, _: TimerId, _: Duration) -> TaskHandle {
                TaskHandle::detached()
            }
            fn issue(&mut self, _: RequestId, _: String) -> TaskHandle {
                TaskHandle::detached()
            }
        }

        let mut state = AppState::default();
        state.slip.current_field = SlipField::Summary;
        state.slip.summary = "ボールペン".to_string();
        let session = &mut state.slip.suggestions;
        session.on_input("ボールペン", &mut Detached);
        let request = session.on_timer(TimerId(1), &mut Detached).unwrap();
        session.on_settled(
            request,
            SuggestionOutcome::Reply(SuggestionReply {
                suggestions: Vec::new(),
                error: Some("Embedding API error".to_string()),
            }),
        );

        let screen = draw(&state);
        assert!(!screen.contains("Embedding API error"));
        assert!(!screen.contains("勘定科目候補"));
    }

    #[test]
    fn logs_screen_renders_without_entries() {
        let mut state = AppState::default();
        state.navigate_to(Screen::Logs(Default::default()));
        assert!(draw(&state).contains("No logs yet"));
    }
}
