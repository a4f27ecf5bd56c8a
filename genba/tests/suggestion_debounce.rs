//! Debounce and cancellation timing against real tokio tasks on a paused clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use genba::background::suggestions::{SuggestionSource, TokioSuggestionDriver};
use genba::commands::executor::execute_command_sync;
use genba::events::{AppCommand, DataEvent};
use genba::state::reducer::reduce_data_event;
use genba::state::suggestions::SessionPhase;
use genba::state::{AppState, SlipField};
use genba_portal::{AccountSuggestion, SuggestionReply};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Echoes the summary back as the only suggestion after a per-summary delay
struct ScriptedSource {
    calls: Mutex<Vec<String>>,
    delay: fn(&str) -> Duration,
}

impl ScriptedSource {
    fn new(delay: fn(&str) -> Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            delay,
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestionSource for ScriptedSource {
    async fn suggest(&self, summary: &str) -> anyhow::Result<SuggestionReply> {
        self.calls.lock().unwrap().push(summary.to_string());
        tokio::time::sleep((self.delay)(summary)).await;
        Ok(SuggestionReply {
            suggestions: vec![AccountSuggestion {
                account_title: summary.to_string(),
                description: String::new(),
                score: 0.9,
            }],
            error: None,
        })
    }
}

struct Harness {
    state: AppState,
    driver: TokioSuggestionDriver,
    rx: UnboundedReceiver<DataEvent>,
}

impl Harness {
    fn new(source: Arc<ScriptedSource>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        state.slip.current_field = SlipField::Summary;
        Self {
            state,
            driver: TokioSuggestionDriver::new(source, tx),
            rx,
        }
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            execute_command_sync(
                AppCommand::AppendSlipChar { c },
                &mut self.state,
                &mut self.driver,
            );
        }
    }

    fn apply(&mut self, event: DataEvent) {
        if let Some(command) = reduce_data_event(&mut self.state, event) {
            execute_command_sync(command, &mut self.state, &mut self.driver);
        }
    }

    /// Apply everything already delivered
    fn drain(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event);
        }
    }

    /// Apply events until nothing arrives for a (virtual) second
    async fn settle(&mut self) {
        while let Ok(Some(event)) =
            tokio::time::timeout(Duration::from_secs(1), self.rx.recv()).await
        {
            self.apply(event);
        }
    }

    fn titles(&self) -> Vec<String> {
        self.state
            .slip
            .suggestions
            .suggestions
            .iter()
            .map(|s| s.account_title.clone())
            .collect()
    }
}

fn fast(_: &str) -> Duration {
    Duration::from_millis(20)
}

#[tokio::test(start_paused = true)]
async fn keystrokes_inside_the_window_make_one_call() {
    let source = ScriptedSource::new(fast);
    let mut harness = Harness::new(source.clone());

    harness.type_text("経費");
    tokio::time::sleep(Duration::from_millis(50)).await;
    harness.drain();
    harness.type_text("精算");

    harness.settle().await;

    assert_eq!(source.calls(), vec!["経費精算".to_string()]);
    assert_eq!(harness.titles(), vec!["経費精算".to_string()]);
    assert_eq!(harness.state.slip.suggestions.phase(), SessionPhase::Resolved);
}

#[tokio::test(start_paused = true)]
async fn nothing_is_sent_before_the_window_closes() {
    let source = ScriptedSource::new(fast);
    let mut harness = Harness::new(source.clone());

    harness.type_text("会議");
    tokio::time::sleep(Duration::from_millis(299)).await;
    harness.drain();
    assert_eq!(harness.state.slip.suggestions.phase(), SessionPhase::Pending);

    tokio::time::sleep(Duration::from_millis(2)).await;
    harness.drain();
    assert_eq!(harness.state.slip.suggestions.phase(), SessionPhase::InFlight);

    harness.settle().await;
    assert_eq!(source.calls(), vec!["会議".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn newer_input_cancels_slow_request() {
    fn slow_first(summary: &str) -> Duration {
        if summary == "電気" {
            Duration::from_millis(1000)
        } else {
            Duration::from_millis(10)
        }
    }

    let source = ScriptedSource::new(slow_first);
    let mut harness = Harness::new(source.clone());

    harness.type_text("電気");
    tokio::time::sleep(Duration::from_millis(310)).await;
    harness.drain();
    assert!(harness.state.slip.suggestions.loading);

    harness.type_text("代");
    harness.settle().await;

    assert_eq!(
        source.calls(),
        vec!["電気".to_string(), "電気代".to_string()]
    );
    assert_eq!(harness.titles(), vec!["電気代".to_string()]);
    assert!(!harness.state.slip.suggestions.loading);
}

#[tokio::test(start_paused = true)]
async fn teardown_stops_a_pending_timer() {
    let source = ScriptedSource::new(fast);
    let mut harness = Harness::new(source.clone());

    harness.type_text("交際費");
    harness.state.slip.suggestions.teardown();
    harness.settle().await;

    assert!(source.calls().is_empty());
    assert_eq!(harness.state.slip.suggestions.phase(), SessionPhase::Cancelled);
}
