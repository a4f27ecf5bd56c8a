use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Requests

#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    text: String,
}

impl Embed {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Request for Embed {
    type Data = Self;
    type Response = EmbedResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/embed".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedResponse {
    #[serde(default)]
    pub dim: Option<usize>,
    pub embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embed_body_carries_only_text() {
        let body = serde_json::to_value(Embed::new("現場事務所 電気代")).unwrap();
        assert_eq!(body, json!({ "text": "現場事務所 電気代" }));
    }

    #[test]
    fn embed_response_dim_is_optional() {
        let response: EmbedResponse =
            serde_json::from_value(json!({ "embedding": [0.5, -0.25] })).unwrap();
        assert_eq!(response.dim, None);
        assert_eq!(response.embedding, vec![0.5, -0.25]);
    }
}
