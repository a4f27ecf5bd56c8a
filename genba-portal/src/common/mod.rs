//! Wire models shared by the portal server and its clients.

mod suggestions;
mod vendors;

pub use suggestions::{
    AccountSuggestion, ScoreTier, SuggestAccountRequest, SuggestAccountResponse,
    SuggestedAccount, MIN_SUMMARY_CHARS,
};
pub use vendors::{sample_vendors, PaymentTerms, VendorCategory, VendorRecord, VendorsResponse};
