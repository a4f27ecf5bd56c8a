pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Configuration;
pub use error::ServerError;

use axum::{
    routing::{get, post},
    Router,
};
use services::{AccountSuggester, BackfillClient, EmbeddingService, VectorStore, VendorMaster};
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub suggester: Arc<AccountSuggester>,
    pub vendors: VendorMaster,
    pub backfill: Option<Arc<BackfillClient>>,
}

impl AppState {
    pub fn from_configuration(configuration: &Configuration) -> Result<Self, ServerError> {
        let vector_store = VectorStore::from_configuration(&configuration.vector_store)
            .map_err(|e| ServerError::Configuration(format!("Invalid vector store key: {}", e)))?;
        let suggester = AccountSuggester::new(
            Arc::new(EmbeddingService::from_configuration(&configuration.embedding)),
            Arc::new(vector_store),
            configuration.suggest.default_top_k,
        );

        let vendors = VendorMaster::from_configuration(&configuration.vendors)?;

        let backfill = configuration
            .backfill
            .as_ref()
            .map(BackfillClient::new)
            .transpose()?
            .map(Arc::new);

        Ok(Self {
            suggester: Arc::new(suggester),
            vendors,
            backfill,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/suggest-account", post(handlers::suggest_account))
        .route("/vendors", get(handlers::list_vendors))
        .route("/admin/backfill", post(handlers::trigger_backfill))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
