use super::Distance;
use crate::macros::setter;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

pub const DEFAULT_MATCH_COUNT: u32 = 3;

// Common

/// One candidate row from the `match_account_titles_topk` function, in index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedAccountTitle {
    pub id: i64,
    pub account_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub distance: Distance,
}

impl MatchedAccountTitle {
    pub fn similarity_percent(&self) -> i64 {
        self.distance.similarity_percent()
    }
}

// Requests

#[derive(Debug, Clone, Serialize)]
pub struct MatchAccountTitles {
    query_embedding: Vec<f32>,
    match_count: u32,
}

impl MatchAccountTitles {
    pub fn new(query_embedding: Vec<f32>) -> Self {
        Self {
            query_embedding,
            match_count: DEFAULT_MATCH_COUNT,
        }
    }

    setter!(match_count: u32);
}

impl Request for MatchAccountTitles {
    type Data = Self;
    type Response = Vec<MatchedAccountTitle>;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/rpc/match_account_titles_topk".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}
