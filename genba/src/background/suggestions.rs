use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use genba_portal::{PortalClient, SuggestionReply};
use tokio::sync::mpsc;

use crate::events::DataEvent;
use crate::state::suggestions::{
    RequestId, SuggestionDriver, SuggestionOutcome, TaskHandle, TimerId,
};

/// Anything that can turn a summary into ranked account suggestions
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self, summary: &str) -> anyhow::Result<SuggestionReply>;
}

#[async_trait]
impl SuggestionSource for PortalClient {
    async fn suggest(&self, summary: &str) -> anyhow::Result<SuggestionReply> {
        Ok(self.suggest_account(summary).await?)
    }
}

/// Runs debounce timers and suggestion requests as tokio tasks
///
/// Every task reports back through the data channel with the id it was
/// started with; aborting the returned handle stops it before it reports.
pub struct TokioSuggestionDriver {
    source: Arc<dyn SuggestionSource>,
    data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl TokioSuggestionDriver {
    pub fn new(source: Arc<dyn SuggestionSource>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self { source, data_tx }
    }
}

impl SuggestionDriver for TokioSuggestionDriver {
    fn schedule(&mut self, timer: TimerId, delay: Duration) -> TaskHandle {
        let data_tx = self.data_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = data_tx.send(DataEvent::SuggestionTimerFired { timer });
        });
        TaskHandle::new(handle.abort_handle())
    }

    fn issue(&mut self, request: RequestId, summary: String) -> TaskHandle {
        let source = self.source.clone();
        let data_tx = self.data_tx.clone();
        let handle = tokio::spawn(async move {
            tracing::debug!(request = request.0, "Fetching account suggestions");
            let outcome = match source.suggest(&summary).await {
                Ok(reply) => SuggestionOutcome::Reply(reply),
                Err(e) => SuggestionOutcome::Failed(e.to_string()),
            };
            let _ = data_tx.send(DataEvent::SuggestionsSettled { request, outcome });
        });
        TaskHandle::new(handle.abort_handle())
    }
}
