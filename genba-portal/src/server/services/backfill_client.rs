use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use std::time::Duration;

use crate::server::config::BackfillConfiguration;
use crate::server::error::ServerError;

const BACKFILL_PATH: &str = "/functions/v1/backfill-embeddings";

/// Proxy to the embedding backfill function. The response is passed through
/// untouched.
pub struct BackfillClient {
    http_client: Client,
    url: String,
    anon_key: SecretString,
    admin_token: Option<SecretString>,
}

impl BackfillClient {
    pub fn new(config: &BackfillConfiguration) -> Result<Self, ServerError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| ServerError::Configuration(format!("Invalid HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            url: format!("{}{}", config.url.trim_end_matches('/'), BACKFILL_PATH),
            anon_key: config.anon_key.clone(),
            admin_token: config.admin_token.clone(),
        })
    }

    /// True only when an admin token is configured and `presented` equals it.
    pub fn authorizes(&self, presented: Option<&str>) -> bool {
        match (&self.admin_token, presented) {
            (Some(expected), Some(presented)) => expected.expose_secret() == presented,
            _ => false,
        }
    }

    pub async fn trigger(&self, batch: Option<Value>) -> Result<(u16, Value), ServerError> {
        let mut request = self
            .http_client
            .post(&self.url)
            .bearer_auth(self.anon_key.expose_secret())
            .json(&json!({ "batch": batch }));

        if let Some(token) = &self.admin_token {
            request = request.header("x-admin-token", token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let data: Value = serde_json::from_slice(&bytes).unwrap_or_else(|_| json!({}));

        Ok((status, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(admin_token: Option<&str>) -> BackfillClient {
        BackfillClient::new(&BackfillConfiguration {
            url: "https://vectors.internal/".to_string(),
            anon_key: SecretString::from("anon".to_string()),
            admin_token: admin_token.map(|t| SecretString::from(t.to_string())),
        })
        .unwrap()
    }

    #[test]
    fn url_points_at_backfill_function() {
        assert_eq!(
            client(None).url,
            "https://vectors.internal/functions/v1/backfill-embeddings"
        );
    }

    #[test]
    fn authorizes_only_matching_token() {
        let guarded = client(Some("s3cret"));
        assert!(guarded.authorizes(Some("s3cret")));
        assert!(!guarded.authorizes(Some("guess")));
        assert!(!guarded.authorizes(None));
    }

    #[test]
    fn unconfigured_token_rejects_everyone() {
        let open = client(None);
        assert!(!open.authorizes(Some("")));
        assert!(!open.authorizes(None));
    }
}
