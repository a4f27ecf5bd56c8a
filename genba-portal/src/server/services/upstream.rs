use async_trait::async_trait;
use genba_api::{endpoints::account_titles::MatchedAccountTitle, GenbaApiError, Request};
use secrecy::SecretString;

use crate::server::config::{EmbeddingConfiguration, VectorStoreConfiguration};

/// Turns free text into an embedding vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, GenbaApiError>;
}

/// Nearest-neighbour lookup over account titles, returned in index order.
#[async_trait]
pub trait AccountTitleIndex: Send + Sync {
    async fn nearest(
        &self,
        embedding: Vec<f32>,
        match_count: u32,
    ) -> Result<Vec<MatchedAccountTitle>, GenbaApiError>;
}

pub struct EmbeddingService {
    client: genba_api::Client,
}

impl EmbeddingService {
    pub fn new(base_url: &str, token: &SecretString) -> Self {
        Self {
            client: genba_api::Client::new(base_url, token),
        }
    }

    pub fn from_configuration(config: &EmbeddingConfiguration) -> Self {
        Self::new(&config.url, &config.token)
    }
}

#[async_trait]
impl Embedder for EmbeddingService {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, GenbaApiError> {
        let response = self
            .client
            .send(Request::embeddings().embed(text))
            .await?;
        Ok(response.embedding)
    }
}

pub struct VectorStore {
    client: genba_api::Client,
}

impl VectorStore {
    pub fn new(base_url: &str, service_key: &SecretString) -> Result<Self, GenbaApiError> {
        Ok(Self {
            client: genba_api::Client::with_api_key(base_url, service_key)?,
        })
    }

    pub fn from_configuration(config: &VectorStoreConfiguration) -> Result<Self, GenbaApiError> {
        Self::new(&config.url, &config.service_key)
    }
}

#[async_trait]
impl AccountTitleIndex for VectorStore {
    async fn nearest(
        &self,
        embedding: Vec<f32>,
        match_count: u32,
    ) -> Result<Vec<MatchedAccountTitle>, GenbaApiError> {
        self.client
            .send(
                Request::account_titles()
                    .match_topk(embedding)
                    .match_count(match_count),
            )
            .await
    }
}
