use crate::devices::devices_model::Device;
use async_trait::async_trait;

/// Trait for device catalog operations
#[async_trait]
pub trait DeviceCatalogServiceTrait: Send + Sync {
    /// Lists tradeable devices. Never fails: storage problems resolve to the
    /// fallback catalog.
    async fn list_devices(&self) -> Vec<Device>;
}
