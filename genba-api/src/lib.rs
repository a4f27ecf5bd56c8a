pub mod endpoints;
mod error;
mod macros;
pub mod repositories;

pub use crate::error::GenbaApiError;
pub use endpoints::account_titles::DEFAULT_MATCH_COUNT;
use repositories::*;
use secrecy::{ExposeSecret, SecretString};
use tower_api_client::header::{HeaderMap, HeaderValue};
use tower_api_client::{Client as ApiClient, Error as ApiError, Request as ApiRequest};
pub use tower_api_client::StatusCode;

/// Header the PostgREST gateway in front of the account-title index keys on.
pub const API_KEY_HEADER: &str = "apikey";

/// Bearer-authenticated client bound to one upstream base URL.
///
/// The embedding service and the account-title index live behind different
/// hosts, so callers hold one `Client` per service.
pub struct Client {
    inner: ApiClient,
}

impl Client {
    pub fn new(base_url: &str, token: &SecretString) -> Self {
        Self {
            inner: ApiClient::new(base_url).bearer_auth(token.expose_secret()),
        }
    }

    /// Like [`Client::new`], but the key also goes out in an `apikey` header,
    /// which the gateway checks before it looks at the bearer token.
    pub fn with_api_key(base_url: &str, key: &SecretString) -> Result<Self, GenbaApiError> {
        let mut value = HeaderValue::from_str(key.expose_secret())
            .map_err(|e| GenbaApiError::Internal(ApiError::Http(e.into())))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, value);

        Ok(Self {
            inner: ApiClient::new(base_url)
                .default_headers(headers)
                .bearer_auth(key.expose_secret()),
        })
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, GenbaApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

pub struct Request;

impl Request {
    pub fn account_titles() -> AccountTitleRepository {
        AccountTitleRepository::new()
    }

    pub fn embeddings() -> EmbeddingRepository {
        EmbeddingRepository::new()
    }
}
