use crate::endpoints::{account_titles::MatchAccountTitles, embeddings::Embed};

pub struct AccountTitleRepository;

impl AccountTitleRepository {
    pub fn new() -> Self {
        Self {}
    }

    /// Nearest account titles for a query embedding, `match_count` defaulting to 3.
    pub fn match_topk(&self, query_embedding: Vec<f32>) -> MatchAccountTitles {
        MatchAccountTitles::new(query_embedding)
    }
}

pub struct EmbeddingRepository;

impl EmbeddingRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn embed(&self, text: impl Into<String>) -> Embed {
        Embed::new(text)
    }
}
