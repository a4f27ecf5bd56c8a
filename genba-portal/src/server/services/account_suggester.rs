use std::sync::Arc;

use genba_api::endpoints::account_titles::MatchedAccountTitle;

use super::upstream::{AccountTitleIndex, Embedder};
use crate::common::{SuggestAccountResponse, SuggestedAccount, MIN_SUMMARY_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradeReason {
    EmbeddingUnavailable,
    IndexUnavailable,
}

impl DegradeReason {
    /// Advisory tag sent to clients in the `error` field.
    pub fn message(&self) -> &'static str {
        match self {
            DegradeReason::EmbeddingUnavailable => "Embedding API error",
            DegradeReason::IndexUnavailable => "Database error",
        }
    }
}

/// Result of one suggestion lookup. `Degraded` always means an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestOutcome {
    Ok(Vec<SuggestedAccount>),
    Degraded { reason: DegradeReason },
}

impl From<SuggestOutcome> for SuggestAccountResponse {
    fn from(outcome: SuggestOutcome) -> Self {
        match outcome {
            SuggestOutcome::Ok(suggestions) => SuggestAccountResponse::ok(suggestions),
            SuggestOutcome::Degraded { reason } => SuggestAccountResponse::failed(reason.message()),
        }
    }
}

pub struct AccountSuggester {
    embedder: Arc<dyn Embedder>,
    index: Arc<dyn AccountTitleIndex>,
    default_top_k: u32,
}

impl AccountSuggester {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        index: Arc<dyn AccountTitleIndex>,
        default_top_k: u32,
    ) -> Self {
        Self {
            embedder,
            index,
            default_top_k,
        }
    }

    /// Embed `summary` and look up the closest account titles.
    ///
    /// Summaries under two characters after trimming return an empty `Ok`
    /// without touching either upstream. Upstream failures are logged and
    /// folded into `Degraded`.
    pub async fn suggest(&self, summary: &str, top_k: Option<u32>) -> SuggestOutcome {
        let text = summary.trim();
        if text.chars().count() < MIN_SUMMARY_CHARS {
            return SuggestOutcome::Ok(Vec::new());
        }

        let embedding = match self.embedder.embed(text).await {
            Ok(embedding) => embedding,
            Err(e) => {
                tracing::error!(error = %e, status = ?e.status(), "Embedding request failed");
                return SuggestOutcome::Degraded {
                    reason: DegradeReason::EmbeddingUnavailable,
                };
            }
        };

        let match_count = top_k.unwrap_or(self.default_top_k);
        let rows = match self.index.nearest(embedding, match_count).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(error = %e, "Account title lookup failed");
                return SuggestOutcome::Degraded {
                    reason: DegradeReason::IndexUnavailable,
                };
            }
        };

        tracing::debug!(count = rows.len(), match_count, "Account titles matched");

        SuggestOutcome::Ok(rows.into_iter().map(to_suggested).collect())
    }
}

fn to_suggested(row: MatchedAccountTitle) -> SuggestedAccount {
    if !row.distance.is_in_contract() {
        tracing::warn!(
            id = row.id,
            distance = %row.distance,
            "Distance outside 0..=1, similarity will fall outside 0..=100"
        );
    }

    SuggestedAccount {
        id: row.id,
        similarity: row.similarity_percent(),
        description: Some(row.description.unwrap_or_default()),
        name: row.account_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use genba_api::{endpoints::Distance, GenbaApiError, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubEmbedder {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl Embedder for StubEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, GenbaApiError> {
            self.calls.lock().unwrap().push(text.to_string());
            if self.fail {
                Err(GenbaApiError::Upstream(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "cold start".to_string(),
                ))
            } else {
                Ok(vec![0.1, 0.2, 0.3])
            }
        }
    }

    struct StubIndex {
        rows: Vec<MatchedAccountTitle>,
        fail: bool,
        last_count: AtomicUsize,
    }

    impl StubIndex {
        fn with_rows(rows: Vec<MatchedAccountTitle>) -> Self {
            Self {
                rows,
                fail: false,
                last_count: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AccountTitleIndex for StubIndex {
        async fn nearest(
            &self,
            _embedding: Vec<f32>,
            match_count: u32,
        ) -> Result<Vec<MatchedAccountTitle>, GenbaApiError> {
            self.last_count
                .store(match_count as usize, Ordering::SeqCst);
            if self.fail {
                Err(GenbaApiError::Upstream(
                    StatusCode::BAD_REQUEST,
                    "function does not exist".to_string(),
                ))
            } else {
                Ok(self.rows.clone())
            }
        }
    }

    fn row(id: i64, name: &str, description: Option<&str>, distance: f64) -> MatchedAccountTitle {
        MatchedAccountTitle {
            id,
            account_name: name.to_string(),
            description: description.map(str::to_string),
            distance: Distance::new(distance),
        }
    }

    #[tokio::test]
    async fn short_summary_skips_upstreams() {
        let embedder = Arc::new(StubEmbedder::default());
        let index = Arc::new(StubIndex::with_rows(vec![]));
        let suggester = AccountSuggester::new(embedder.clone(), index, 3);

        assert_eq!(suggester.suggest(" 紙 ", None).await, SuggestOutcome::Ok(vec![]));
        assert!(embedder.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn embeds_trimmed_summary_and_keeps_index_order() {
        let embedder = Arc::new(StubEmbedder::default());
        let index = Arc::new(StubIndex::with_rows(vec![
            row(12, "消耗品費", Some("事務用品など"), 0.12),
            row(4, "外注費", None, 0.12),
            row(30, "通信費", Some(""), 0.4),
        ]));
        let suggester = AccountSuggester::new(embedder.clone(), index.clone(), 3);

        let outcome = suggester.suggest("  コピー用紙  ", None).await;

        assert_eq!(embedder.calls.lock().unwrap().as_slice(), ["コピー用紙"]);
        assert_eq!(index.last_count.load(Ordering::SeqCst), 3);
        let SuggestOutcome::Ok(suggestions) = outcome else {
            panic!("expected suggestions");
        };
        let ids: Vec<i64> = suggestions.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![12, 4, 30]);
        assert_eq!(suggestions[0].similarity, 88);
        assert_eq!(suggestions[1].description.as_deref(), Some(""));
        assert_eq!(suggestions[2].similarity, 60);
    }

    #[tokio::test]
    async fn top_k_overrides_default() {
        let index = Arc::new(StubIndex::with_rows(vec![]));
        let suggester =
            AccountSuggester::new(Arc::new(StubEmbedder::default()), index.clone(), 3);

        suggester.suggest("交通費", Some(5)).await;

        assert_eq!(index.last_count.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn embedding_failure_degrades() {
        let embedder = Arc::new(StubEmbedder {
            fail: true,
            ..StubEmbedder::default()
        });
        let index = Arc::new(StubIndex::with_rows(vec![row(1, "旅費交通費", None, 0.1)]));
        let suggester = AccountSuggester::new(embedder, index.clone(), 3);

        let outcome = suggester.suggest("タクシー代", None).await;

        assert_eq!(
            outcome,
            SuggestOutcome::Degraded {
                reason: DegradeReason::EmbeddingUnavailable
            }
        );
        assert_eq!(index.last_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn index_failure_degrades() {
        let index = Arc::new(StubIndex {
            fail: true,
            ..StubIndex::with_rows(vec![])
        });
        let suggester = AccountSuggester::new(Arc::new(StubEmbedder::default()), index, 3);

        let response: SuggestAccountResponse = suggester.suggest("タクシー代", None).await.into();

        assert!(response.suggestions.is_empty());
        assert_eq!(response.error.as_deref(), Some("Database error"));
    }

    #[tokio::test]
    async fn out_of_contract_distance_is_served_raw() {
        let index = Arc::new(StubIndex::with_rows(vec![row(9, "雑費", None, 1.25)]));
        let suggester = AccountSuggester::new(Arc::new(StubEmbedder::default()), index, 3);

        let SuggestOutcome::Ok(suggestions) = suggester.suggest("その他", None).await else {
            panic!("expected suggestions");
        };
        assert_eq!(suggestions[0].similarity, -25);
    }
}
