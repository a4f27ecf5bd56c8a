// Wire models shared between client and server
pub mod common;

// Client library used by the terminal front end
mod client;
mod error;

pub use client::{connect, PortalClient, PortalClientError, Settings, SuggestionReply};
pub use common::{AccountSuggestion, VendorCategory, VendorRecord};
pub use error::PortalError;

#[cfg(feature = "server")]
pub mod server;
