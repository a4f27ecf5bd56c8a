use serde::{Deserialize, Serialize};

/// Summaries shorter than this (after trimming, in characters) never reach the index.
pub const MIN_SUMMARY_CHARS: usize = 2;

// POST /suggest-account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestAccountRequest {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

/// A ranked account title as served by `/suggest-account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAccount {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub similarity: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestAccountResponse {
    #[serde(default)]
    pub suggestions: Vec<SuggestedAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SuggestAccountResponse {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn ok(suggestions: Vec<SuggestedAccount>) -> Self {
        Self {
            suggestions,
            error: None,
        }
    }

    /// Empty result tagged with an advisory reason. Callers treat this as "no result".
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            suggestions: Vec::new(),
            error: Some(reason.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

/// Client-side view of a suggestion with its score on the unit interval.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSuggestion {
    pub account_title: String,
    pub description: String,
    pub score: f64,
}

impl AccountSuggestion {
    pub fn percent(&self) -> i64 {
        (self.score * 100.0).round() as i64
    }

    pub fn score_tier(&self) -> ScoreTier {
        if self.score > 0.8 {
            ScoreTier::High
        } else if self.score > 0.6 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}

impl From<SuggestedAccount> for AccountSuggestion {
    fn from(value: SuggestedAccount) -> Self {
        Self {
            account_title: value.name,
            description: value.description.unwrap_or_default(),
            score: value.similarity as f64 / 100.0,
        }
    }
}
