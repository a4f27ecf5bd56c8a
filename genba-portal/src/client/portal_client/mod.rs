mod models;

use crate::common::{
    AccountSuggestion, SuggestAccountRequest, SuggestAccountResponse, VendorRecord,
    VendorsResponse,
};
pub use models::{PortalClientError, SuggestionReply};
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP client for the portal server used by the terminal front end.
#[derive(Clone)]
pub struct PortalClient {
    http_client: Client,
    server_url: String,
}

impl PortalClient {
    pub fn new(server_url: impl Into<String>) -> Result<Self, PortalClientError> {
        let server_url = server_url.into();
        if !server_url.starts_with("http") {
            return Err(PortalClientError::InvalidUrl(server_url));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http_client,
            server_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub async fn list_vendors(&self) -> Result<Vec<VendorRecord>, PortalClientError> {
        let url = format!("{}/vendors", self.server_url);

        let resp = self
            .http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<VendorsResponse>()
            .await?;

        Ok(resp.vendors)
    }

    /// Ask the portal for account titles similar to `summary`.
    ///
    /// A degraded portal answer is not an error here: it comes back as an
    /// empty reply carrying the portal's reason.
    pub async fn suggest_account(
        &self,
        summary: &str,
    ) -> Result<SuggestionReply, PortalClientError> {
        let url = format!("{}/suggest-account", self.server_url);
        let req = SuggestAccountRequest {
            summary: summary.to_string(),
            top_k: None,
        };

        let resp = self
            .http_client
            .post(&url)
            .json(&req)
            .send()
            .await?
            .error_for_status()?
            .json::<SuggestAccountResponse>()
            .await?;

        Ok(SuggestionReply {
            suggestions: resp
                .suggestions
                .into_iter()
                .map(AccountSuggestion::from)
                .collect(),
            error: resp.error,
        })
    }
}
