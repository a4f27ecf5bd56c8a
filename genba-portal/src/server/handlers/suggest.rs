use axum::{body::Bytes, extract::State, Json};
use tracing::Instrument;

use crate::common::SuggestAccountResponse;
use crate::server::{models::SuggestParams, AppState};

/// `POST /suggest-account`. Always answers 200; failures travel in `error`.
pub async fn suggest_account(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<SuggestAccountResponse> {
    let params: SuggestParams = match serde_json::from_slice(&body) {
        Ok(params) => params,
        Err(e) => {
            tracing::error!(error = %e, "Malformed suggest-account body");
            return Json(SuggestAccountResponse::failed("Internal error"));
        }
    };

    let Some(summary) = params.summary_text() else {
        return Json(SuggestAccountResponse::empty());
    };

    let top_k = params.match_count();
    let span = tracing::info_span!(
        "suggest_account",
        summary_chars = summary.chars().count(),
        top_k = ?top_k
    );

    let outcome = state
        .suggester
        .suggest(summary, top_k)
        .instrument(span)
        .await;

    Json(outcome.into())
}
