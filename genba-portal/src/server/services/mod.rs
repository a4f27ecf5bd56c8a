pub mod account_suggester;
pub mod backfill_client;
pub mod upstream;
pub mod vendor_master;

pub use account_suggester::{AccountSuggester, DegradeReason, SuggestOutcome};
pub use backfill_client::BackfillClient;
pub use upstream::{AccountTitleIndex, Embedder, EmbeddingService, VectorStore};
pub use vendor_master::VendorMaster;
