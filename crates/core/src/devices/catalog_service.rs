use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::devices_model::Device;
use super::devices_traits::DeviceCatalogServiceTrait;
use super::fallback::fallback_devices;
use crate::constants::DEVICE_COLLECTION;
use crate::documents::DocumentStore;
use crate::errors::{Error, Result};

pub struct DeviceCatalogService {
    store: Arc<dyn DocumentStore>,
}

impl DeviceCatalogService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        DeviceCatalogService { store }
    }

    /// Loads and validates persisted devices. A single invalid document fails
    /// the whole load.
    async fn load_stored_devices(&self) -> Result<Vec<Device>> {
        let docs = self.store.get_documents(DEVICE_COLLECTION).await?;
        docs.iter()
            .map(|doc| Device::try_from(doc).map_err(Error::from))
            .collect()
    }
}

#[async_trait]
impl DeviceCatalogServiceTrait for DeviceCatalogService {
    async fn list_devices(&self) -> Vec<Device> {
        match self.load_stored_devices().await {
            Ok(devices) if devices.is_empty() => {
                debug!("Device collection is empty, serving fallback catalog");
                fallback_devices()
            }
            Ok(devices) => devices,
            Err(e) => {
                warn!("Failed to load devices, serving fallback catalog: {}", e);
                fallback_devices()
            }
        }
    }
}
