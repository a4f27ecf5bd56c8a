use super::{AppState, LoadingState};
use crate::events::{AppCommand, DataEvent};
use crate::state::suggestions::Settlement;

/// Pure state transition function for data events
///
/// Returns a follow-up command when the event needs a side effect, which is
/// how a fired debounce timer turns into a request.
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) -> Option<AppCommand> {
    match event {
        DataEvent::VendorsLoaded { vendors } => {
            tracing::info!("Loaded {} vendors", vendors.len());
            state.vendors = vendors;
            state.vendors_loading = LoadingState::Loaded;

            // The open dialog keeps its condition; only the highlight may need to move
            if let Some(lookup) = state.slip.lookup.as_mut() {
                let len = lookup.filtered(&state.vendors).len();
                lookup.clamp_highlight(len);
            }
            None
        }

        DataEvent::VendorsLoadFailed { error } => {
            tracing::error!("Failed to load vendors: {}", error);
            state.vendors_loading = LoadingState::Error(error);
            None
        }

        DataEvent::SuggestionTimerFired { timer } => {
            Some(AppCommand::IssueSuggestionRequest { timer })
        }

        DataEvent::SuggestionsSettled { request, outcome } => {
            let slip = &mut state.slip;
            match slip.suggestions.on_settled(request, outcome) {
                Settlement::Applied => {
                    slip.suggestion_index = 0;
                    slip.dropdown_dismissed = false;
                }
                Settlement::Discarded => {
                    tracing::debug!(request = request.0, "Discarded stale suggestions");
                }
                Settlement::Failed => {}
            }
            None
        }
    }
}
