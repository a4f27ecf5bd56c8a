use axum::{body::Bytes, extract::State, http::HeaderMap, Json};

use crate::server::{
    error::ServerError,
    models::{BackfillRequest, BackfillResponse},
    AppState,
};

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

pub async fn trigger_backfill(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<BackfillResponse>, ServerError> {
    let presented = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    let Some(client) = state
        .backfill
        .as_ref()
        .filter(|client| client.authorizes(presented))
    else {
        tracing::warn!("Rejected backfill request");
        return Err(ServerError::Unauthorized);
    };

    // A missing or unreadable body means "no batch size".
    let req: BackfillRequest = serde_json::from_slice(&body).unwrap_or_default();

    let (status, data) = client.trigger(req.batch).await?;
    tracing::info!(status, "Backfill forwarded");

    Ok(Json(BackfillResponse { status, data }))
}
