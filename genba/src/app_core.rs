use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};

/// Trait for handling command execution (production = real loader + tasks, test = mock)
///
/// Tests inject an implementation that records side effects instead of
/// spawning background tasks or calling the portal.
pub trait DataEventHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Testable application core without terminal dependencies
pub struct AppCore<H: DataEventHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    pub fn new(handler: H) -> Self {
        Self::with_state(AppState::default(), handler)
    }

    pub fn with_state(ui_state: AppState, handler: H) -> Self {
        Self { ui_state, handler }
    }

    /// Translate a key press to a command and execute it
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            self.handler.execute_with_context(command, &mut self.ui_state);
        }
    }

    /// Reduce a data event; follow-up commands go straight to the handler
    pub fn handle_data_event(&mut self, event: DataEvent) {
        if let Some(command) = reducer::reduce_data_event(&mut self.ui_state, event) {
            self.handler.execute_with_context(command, &mut self.ui_state);
        }
    }

    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
