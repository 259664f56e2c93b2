//! Devices module - catalog models, fallback data, service and traits.

mod catalog_service;
mod devices_model;
mod devices_traits;
mod fallback;

#[cfg(test)]
mod catalog_service_tests;

pub use catalog_service::DeviceCatalogService;
pub use devices_model::Device;
pub use devices_traits::DeviceCatalogServiceTrait;
pub use fallback::fallback_devices;
