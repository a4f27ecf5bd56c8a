//! Debounced account-title suggestions for the summary field.
//!
//! A [`SuggestionSession`] owns the one live debounce timer and the one
//! live request token for a single input. Timers and requests are started
//! through a [`SuggestionDriver`] and report back by id; anything reporting
//! with an id the session no longer holds is ignored.

use std::time::Duration;

use genba_portal::common::MIN_SUMMARY_CHARS;
use genba_portal::{AccountSuggestion, SuggestionReply};
use tokio::task::AbortHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// Handle to a spawned timer or request. Detached handles cancel nothing.
#[derive(Debug, Default)]
pub struct TaskHandle(Option<AbortHandle>);

impl TaskHandle {
    pub fn new(handle: AbortHandle) -> Self {
        Self(Some(handle))
    }

    pub fn detached() -> Self {
        Self(None)
    }

    pub fn abort(self) {
        if let Some(handle) = self.0 {
            handle.abort();
        }
    }
}

/// Side-effect seam for the session: arm timers and issue requests.
pub trait SuggestionDriver {
    fn schedule(&mut self, timer: TimerId, delay: Duration) -> TaskHandle;
    fn issue(&mut self, request: RequestId, summary: String) -> TaskHandle;
}

/// How a request ended, as reported by whoever ran it.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    Reply(SuggestionReply),
    /// Transport or HTTP failure reaching the portal.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Pending,
    InFlight,
    Resolved,
    Cancelled,
}

/// What [`SuggestionSession::on_settled`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Failed,
    /// The result belonged to a superseded request.
    Discarded,
}

#[derive(Debug)]
struct PendingTimer {
    id: TimerId,
    summary: String,
    handle: TaskHandle,
}

#[derive(Debug)]
struct CancellationToken {
    id: RequestId,
    handle: TaskHandle,
}

#[derive(Debug)]
pub struct SuggestionSession {
    debounce: Duration,
    next_id: u64,
    timer: Option<PendingTimer>,
    current: Option<CancellationToken>,
    phase: SessionPhase,
    pub suggestions: Vec<AccountSuggestion>,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl Default for SuggestionSession {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SuggestionSession {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            next_id: 0,
            timer: None,
            current: None,
            phase: SessionPhase::Idle,
            suggestions: Vec::new(),
            loading: false,
            last_error: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn current_request(&self) -> Option<RequestId> {
        self.current.as_ref().map(|token| token.id)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn clear_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.handle.abort();
        }
    }

    fn cancel_current(&mut self) {
        if let Some(token) = self.current.take() {
            tracing::debug!(request = token.id.0, "Cancelling superseded suggestion request");
            token.handle.abort();
        }
    }

    /// React to a new value of the summary field.
    pub fn on_input(&mut self, text: &str, driver: &mut dyn SuggestionDriver) {
        let summary = text.trim();

        if summary.chars().count() < MIN_SUMMARY_CHARS {
            self.clear_timer();
            self.cancel_current();
            self.suggestions.clear();
            self.loading = false;
            self.last_error = None;
            self.phase = SessionPhase::Idle;
            return;
        }

        self.clear_timer();
        let id = TimerId(self.next_id());
        let handle = driver.schedule(id, self.debounce);
        self.timer = Some(PendingTimer {
            id,
            summary: summary.to_string(),
            handle,
        });
        self.phase = SessionPhase::Pending;
    }

    /// The debounce timer `timer` elapsed. Returns the issued request, if any.
    pub fn on_timer(&mut self, timer: TimerId, driver: &mut dyn SuggestionDriver) -> Option<RequestId> {
        if self.timer.as_ref().map(|t| t.id) != Some(timer) {
            tracing::trace!(timer = timer.0, "Ignoring stale debounce timer");
            return None;
        }
        let pending = self.timer.take()?;

        self.cancel_current();
        let id = RequestId(self.next_id());
        let handle = driver.issue(id, pending.summary);
        self.current = Some(CancellationToken { id, handle });
        self.loading = true;
        self.phase = SessionPhase::InFlight;

        Some(id)
    }

    /// Apply the result of `request`, unless it has been superseded.
    pub fn on_settled(&mut self, request: RequestId, outcome: SuggestionOutcome) -> Settlement {
        if self.current_request() != Some(request) {
            return Settlement::Discarded;
        }
        self.current = None;
        self.loading = false;

        match outcome {
            SuggestionOutcome::Reply(reply) => {
                if let Some(reason) = &reply.error {
                    tracing::warn!(reason = %reason, "Account suggestions unavailable");
                }
                self.suggestions = reply.suggestions;
                self.last_error = reply.error;
                self.phase = SessionPhase::Resolved;
                Settlement::Applied
            }
            SuggestionOutcome::Failed(error) => {
                tracing::error!(error = %error, "Suggestion fetch failed");
                self.last_error = Some(error);
                self.phase = SessionPhase::Resolved;
                Settlement::Failed
            }
        }
    }

    /// Stop everything in flight. Suggestions already shown stay.
    pub fn teardown(&mut self) {
        self.clear_timer();
        self.cancel_current();
        self.loading = false;
        if matches!(self.phase, SessionPhase::Pending | SessionPhase::InFlight) {
            self.phase = SessionPhase::Cancelled;
        }
    }
}

impl Drop for SuggestionSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        scheduled: Vec<(TimerId, Duration)>,
        issued: Vec<(RequestId, String)>,
    }

    impl SuggestionDriver for Recorder {
        fn schedule(&mut self, timer: TimerId, delay: Duration) -> TaskHandle {
            self.scheduled.push((timer, delay));
            TaskHandle::detached()
        }

        fn issue(&mut self, request: RequestId, summary: String) -> TaskHandle {
            self.issued.push((request, summary));
            TaskHandle::detached()
        }
    }

    fn reply(titles: &[(&str, f64)]) -> SuggestionOutcome {
        SuggestionOutcome::Reply(SuggestionReply {
            suggestions: titles
                .iter()
                .map(|(title, score)| AccountSuggestion {
                    account_title: title.to_string(),
                    description: String::new(),
                    score: *score,
                })
                .collect(),
            error: None,
        })
    }

    fn fire_last(session: &mut SuggestionSession, driver: &mut Recorder) -> RequestId {
        let (timer, _) = *driver.scheduled.last().unwrap();
        session.on_timer(timer, driver).unwrap()
    }

    #[test]
    fn short_input_clears_without_scheduling() {
        let mut driver = Recorder::default();
        let mut session = SuggestionSession::default();
        session.suggestions = vec![AccountSuggestion {
            account_title: "旅費交通費".to_string(),
            description: String::new(),
            score: 0.9,
        }];

        session.on_input(" x ", &mut driver);

        assert!(session.suggestions.is_empty());
        assert!(driver.scheduled.is_empty());
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn each_keystroke_rearms_the_timer() {
        let mut driver = Recorder::default();
        let mut session = SuggestionSession::new(Duration::from_millis(250));

        session.on_input("タク", &mut driver);
        session.on_input("タクシ", &mut driver);

        assert_eq!(driver.scheduled.len(), 2);
        assert_eq!(driver.scheduled[1].1, Duration::from_millis(250));
        assert_eq!(session.phase(), SessionPhase::Pending);

        let (first_timer, _) = driver.scheduled[0];
        assert_eq!(session.on_timer(first_timer, &mut driver), None);
        assert!(driver.issued.is_empty());

        fire_last(&mut session, &mut driver);
        assert_eq!(driver.issued.len(), 1);
        assert_eq!(driver.issued[0].1, "タクシ");
        assert!(session.loading);
        assert_eq!(session.phase(), SessionPhase::InFlight);
    }

    #[test]
    fn summary_is_trimmed_before_issue() {
        let mut driver = Recorder::default();
        let mut session = SuggestionSession::default();

        session.on_input("  宿泊費  ", &mut driver);
        fire_last(&mut session, &mut driver);

        assert_eq!(driver.issued[0].1, "宿泊費");
    }

    #[test]
    fn resolved_reply_replaces_suggestions() {
        let mut driver = Recorder::default();
        let mut session = SuggestionSession::default();

        session.on_input("会議費", &mut driver);
        let request = fire_last(&mut session, &mut driver);
        let settled = session.on_settled(request, reply(&[("会議費", 0.93), ("交際費", 0.71)]));

        assert_eq!(settled, Settlement::Applied);
        assert_eq!(session.suggestions.len(), 2);
        assert!(!session.loading);
        assert_eq!(session.phase(), SessionPhase::Resolved);
    }

    #[test]
    fn superseded_result_is_discarded_even_if_late() {
        let mut driver = Recorder::default();
        let mut session = SuggestionSession::default();

        session.on_input("通信", &mut driver);
        let stale = fire_last(&mut session, &mut driver);
        session.on_input("通信費", &mut driver);
        let fresh = fire_last(&mut session, &mut driver);

        assert_eq!(session.on_settled(fresh, reply(&[("通信費", 0.95)])), Settlement::Applied);
        assert_eq!(session.on_settled(stale, reply(&[("雑費", 0.4)])), Settlement::Discarded);

        assert_eq!(session.suggestions.len(), 1);
        assert_eq!(session.suggestions[0].account_title, "通信費");
    }

    #[test]
    fn clearing_the_summary_forgets_the_last_error() {
        let mut driver = Recorder::default();
        let mut session = SuggestionSession::default();

        session.on_input("印刷代", &mut driver);
        let request = fire_last(&mut session, &mut driver);
        session.on_settled(
            request,
            SuggestionOutcome::Reply(SuggestionReply {
                suggestions: Vec::new(),
                error: Some("Embedding API error".to_string()),
            }),
        );
        assert_eq!(session.last_error.as_deref(), Some("Embedding API error"));

        session.on_input("", &mut driver);

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.suggestions.is_empty());
        assert_eq!(session.last_error, None);
    }

    #[test]
    fn transport_failure_keeps_previous_list() {
        let mut driver = Recorder::default();
        let mut session = SuggestionSession::default();

        session.on_input("電気代", &mut driver);
        let first = fire_last(&mut session, &mut driver);
        session.on_settled(first, reply(&[("水道光熱費", 0.88)]));

        session.on_input("電気代金", &mut driver);
        let second = fire_last(&mut session, &mut driver);
        let settled =
            session.on_settled(second, SuggestionOutcome::Failed("connection refused".into()));

        assert_eq!(settled, Settlement::Failed);
        assert_eq!(session.suggestions[0].account_title, "水道光熱費");
        assert!(!session.loading);
        assert_eq!(session.last_error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn degraded_reply_empties_list_and_keeps_reason() {
        let mut driver = Recorder::default();
        let mut session = SuggestionSession::default();

        session.on_input("ガソリン", &mut driver);
        let request = fire_last(&mut session, &mut driver);
        session.on_settled(
            request,
            SuggestionOutcome::Reply(SuggestionReply {
                suggestions: vec![],
                error: Some("Embedding API error".to_string()),
            }),
        );

        assert!(session.suggestions.is_empty());
        assert_eq!(session.last_error.as_deref(), Some("Embedding API error"));
    }

    #[test]
    fn short_input_cancels_in_flight_request() {
        let mut driver = Recorder::default();
        let mut session = SuggestionSession::default();

        session.on_input("切手", &mut driver);
        let request = fire_last(&mut session, &mut driver);
        session.on_input("切", &mut driver);

        assert_eq!(session.current_request(), None);
        assert!(!session.loading);
        assert_eq!(
            session.on_settled(request, reply(&[("通信費", 0.8)])),
            Settlement::Discarded
        );
        assert!(session.suggestions.is_empty());
    }

    #[test]
    fn teardown_disarms_timer_and_token() {
        let mut driver = Recorder::default();
        let mut session = SuggestionSession::default();

        session.on_input("文房具", &mut driver);
        let request = fire_last(&mut session, &mut driver);
        session.on_input("文房具代", &mut driver);
        session.teardown();

        assert!(!session.has_pending_timer());
        assert_eq!(session.current_request(), None);
        assert_eq!(session.phase(), SessionPhase::Cancelled);
        assert_eq!(
            session.on_settled(request, reply(&[("消耗品費", 0.9)])),
            Settlement::Discarded
        );
    }

    #[tokio::test]
    async fn dropping_the_session_aborts_spawned_work() {
        let handle = tokio::spawn(std::future::pending::<()>());

        struct Spawning(Option<AbortHandle>);
        impl SuggestionDriver for Spawning {
            fn schedule(&mut self, _timer: TimerId, _delay: Duration) -> TaskHandle {
                TaskHandle::new(self.0.take().unwrap())
            }
            fn issue(&mut self, _request: RequestId, _summary: String) -> TaskHandle {
                TaskHandle::detached()
            }
        }

        let mut driver = Spawning(Some(handle.abort_handle()));
        let mut session = SuggestionSession::default();
        session.on_input("備品", &mut driver);
        drop(session);

        assert!(handle.await.unwrap_err().is_cancelled());
    }
}
