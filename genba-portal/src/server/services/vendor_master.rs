use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::common::{sample_vendors, VendorRecord};
use crate::server::config::VendorsConfiguration;
use crate::server::error::ServerError;

/// Read-only vendor master shared by all requests.
#[derive(Debug, Clone)]
pub struct VendorMaster {
    records: Arc<[VendorRecord]>,
}

impl VendorMaster {
    pub fn new(records: Vec<VendorRecord>) -> Result<Self, ServerError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = records.iter().find(|r| !seen.insert(r.vendor_code.as_str())) {
            return Err(ServerError::Configuration(format!(
                "Duplicate vendor code {}",
                duplicate.vendor_code
            )));
        }

        Ok(Self {
            records: records.into(),
        })
    }

    pub fn sample() -> Self {
        Self {
            records: sample_vendors().into(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ServerError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let records: Vec<VendorRecord> = serde_json::from_str(&raw).map_err(|e| {
            ServerError::Configuration(format!("Invalid vendor file {}: {}", path.display(), e))
        })?;
        Self::new(records)
    }

    pub fn from_configuration(config: &VendorsConfiguration) -> Result<Self, ServerError> {
        match &config.path {
            Some(path) => Self::load(path),
            None => {
                tracing::info!("No vendor file configured, serving the sample master");
                Ok(Self::sample())
            }
        }
    }

    pub fn records(&self) -> &[VendorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
