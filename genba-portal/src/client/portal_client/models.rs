use crate::common::AccountSuggestion;
use thiserror::Error;

/// Suggestions as the UI consumes them, plus the advisory error tag if the
/// portal degraded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionReply {
    pub suggestions: Vec<AccountSuggestion>,
    pub error: Option<String>,
}

#[derive(Debug, Error)]
pub enum PortalClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid portal URL: {0}")]
    InvalidUrl(String),
}
