use thiserror::Error;

/// Failures while preparing the front end's connection to the portal
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Client(#[from] crate::client::PortalClientError),
}
