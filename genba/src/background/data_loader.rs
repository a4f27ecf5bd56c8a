use crate::events::DataEvent;
use genba_portal::PortalClient;
use tokio::sync::mpsc;

/// Loads reference data from the portal and reports it as data events
#[derive(Clone)]
pub struct DataLoader {
    pub client: PortalClient,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(client: PortalClient, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self { client, data_tx }
    }

    /// Fetch the vendor master
    pub async fn load_vendors(&self) {
        tracing::info!("Loading vendors from {}", self.client.server_url());

        match self.client.list_vendors().await {
            Ok(vendors) => {
                tracing::debug!("Fetched {} vendors", vendors.len());
                let _ = self.data_tx.send(DataEvent::VendorsLoaded { vendors });
            }
            Err(e) => {
                tracing::error!("Failed to load vendors: {}", e);
                let _ = self.data_tx.send(DataEvent::VendorsLoadFailed {
                    error: e.to_string(),
                });
            }
        }
    }
}
