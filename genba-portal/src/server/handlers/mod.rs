mod backfill;
mod suggest;
mod vendors;

pub use backfill::trigger_backfill;
pub use suggest::suggest_account;
pub use vendors::list_vendors;

use crate::server::models::HealthResponse;
use axum::Json;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
