pub mod portal_client;
mod settings;

pub use portal_client::{PortalClient, PortalClientError, SuggestionReply};
pub use settings::Settings;

use crate::error::PortalError;

/// Load settings and build a portal client before starting the TUI
pub fn connect() -> Result<(Settings, PortalClient), PortalError> {
    let settings = Settings::new().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("\nPlease create a config.toml file with the following content:");
        eprintln!("\nserver_url = \"http://localhost:8080\"");
        eprintln!("debounce_ms = 300");
        PortalError::Configuration(e.to_string())
    })?;

    settings.validate().map_err(|e| {
        eprintln!("Configuration validation failed: {}", e);
        PortalError::Configuration(e)
    })?;

    let client = PortalClient::new(settings.server_url.clone())?;

    Ok((settings, client))
}
