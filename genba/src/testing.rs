use std::time::Duration;

use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::suggestions::{RequestId, SuggestionDriver, TaskHandle, TimerId};
use crate::state::AppState;
use crate::ui::screens::Screen;

/// Suggestion driver that only records what it was asked to start
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub scheduled: Vec<(TimerId, Duration)>,
    pub issued: Vec<(RequestId, String)>,
}

impl SuggestionDriver for RecordingDriver {
    fn schedule(&mut self, timer: TimerId, delay: Duration) -> TaskHandle {
        self.scheduled.push((timer, delay));
        TaskHandle::detached()
    }

    fn issue(&mut self, request: RequestId, summary: String) -> TaskHandle {
        self.issued.push((request, summary));
        TaskHandle::detached()
    }
}

/// Mock data event handler for tests (no real async tasks)
///
/// Commands run through execute_command_sync; timers and requests land in
/// the recording driver so tests can fire them by hand.
#[derive(Debug, Default)]
pub struct MockDataHandler {
    pub driver: RecordingDriver,
}

impl MockDataHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command_sync(command, state, &mut self.driver);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            core: AppCore::with_state(state, MockDataHandler::new()),
        }
    }

    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type a string one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Inject a data event (simulate a loader result or a fired timer)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Fire the most recently scheduled debounce timer
    pub fn fire_last_timer(&mut self) {
        if let Some((timer, _)) = self.driver().scheduled.last().copied() {
            self.send_data_event(DataEvent::SuggestionTimerFired { timer });
        }
    }

    pub fn driver(&self) -> &RecordingDriver {
        &self.core.handler().driver
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Assert that the app is on a specific screen type
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Expected different screen. Current: {:?}",
            current
        );
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
