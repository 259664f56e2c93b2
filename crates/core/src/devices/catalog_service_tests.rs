//! Tests for DeviceCatalogService fallback behavior.

use std::sync::Arc;

use serde_json::json;

use crate::devices::{fallback_devices, DeviceCatalogService, DeviceCatalogServiceTrait};
use crate::documents::mock_store::MockDocumentStore;
use crate::documents::UnconfiguredStore;

#[tokio::test]
async fn fallback_catalog_has_exact_sample_devices() {
    let devices = fallback_devices();
    assert_eq!(devices.len(), 3);

    assert_eq!(devices[0].brand, "Apple");
    assert_eq!(devices[0].model, "iPhone 14 Pro");
    assert_eq!(devices[0].storages, vec![128, 256, 512, 1024]);
    assert_eq!(devices[0].base_price, 650.0);

    assert_eq!(devices[1].brand, "Samsung");
    assert_eq!(devices[1].model, "Galaxy S23");
    assert_eq!(devices[1].storages, vec![128, 256, 512]);
    assert_eq!(devices[1].base_price, 500.0);

    assert_eq!(devices[2].brand, "Google");
    assert_eq!(devices[2].model, "Pixel 7");
    assert_eq!(devices[2].storages, vec![128, 256]);
    assert_eq!(devices[2].base_price, 380.0);

    assert!(devices.iter().all(|d| d
        .image
        .as_deref()
        .is_some_and(|url| url.starts_with("https://images.unsplash.com/"))));
}

#[tokio::test]
async fn empty_collection_serves_fallback() {
    let service = DeviceCatalogService::new(Arc::new(MockDocumentStore::new()));
    assert_eq!(service.list_devices().await, fallback_devices());
}

#[tokio::test]
async fn read_failure_serves_fallback() {
    let store = MockDocumentStore::with_documents(
        "device",
        vec![json!({ "brand": "Apple", "model": "iPhone 12", "base_price": 250 })],
    );
    store.set_fail_on_read(true);
    let service = DeviceCatalogService::new(Arc::new(store));

    assert_eq!(service.list_devices().await, fallback_devices());
}

#[tokio::test]
async fn unconfigured_store_serves_fallback() {
    let service = DeviceCatalogService::new(Arc::new(UnconfiguredStore::new("not configured")));
    assert_eq!(service.list_devices().await, fallback_devices());
}

#[tokio::test]
async fn stored_devices_replace_fallback_in_storage_order() {
    let store = MockDocumentStore::with_documents(
        "device",
        vec![
            json!({ "brand": "OnePlus", "model": "11", "storages": [256, 128], "base_price": 300, "image": null }),
            json!({ "brand": "Apple", "model": "iPhone SE" }),
        ],
    );
    let service = DeviceCatalogService::new(Arc::new(store));

    let devices = service.list_devices().await;
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].brand, "OnePlus");
    assert_eq!(devices[0].storages, vec![256, 128]);
    assert_eq!(devices[0].base_price, 300.0);
    assert_eq!(devices[0].image, None);
    assert_eq!(devices[1].model, "iPhone SE");
    assert!(devices[1].storages.is_empty());
    assert_eq!(devices[1].base_price, 0.0);
}

#[tokio::test]
async fn one_invalid_document_serves_fallback() {
    let store = MockDocumentStore::with_documents(
        "device",
        vec![
            json!({ "brand": "OnePlus", "model": "11", "base_price": 300 }),
            json!({ "brand": "Broken Entry" }),
        ],
    );
    let service = DeviceCatalogService::new(Arc::new(store));

    assert_eq!(service.list_devices().await, fallback_devices());
}

#[tokio::test]
async fn only_device_collection_is_read() {
    let store = MockDocumentStore::with_documents(
        "quote",
        vec![json!({ "brand": "Apple", "model": "iPhone 14 Pro", "offer": 690.0 })],
    );
    let service = DeviceCatalogService::new(Arc::new(store));

    assert_eq!(service.list_devices().await, fallback_devices());
}

#[tokio::test]
async fn float_storage_sizes_are_served_not_replaced() {
    let store = MockDocumentStore::with_documents(
        "device",
        vec![json!({
            "brand": "Apple",
            "model": "iPhone 12",
            "storages": [128.0, 256.0],
            "base_price": 250
        })],
    );
    let service = DeviceCatalogService::new(Arc::new(store));

    let devices = service.list_devices().await;
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].storages, vec![128, 256]);
}

#[tokio::test]
async fn null_storages_serves_fallback() {
    let store = MockDocumentStore::with_documents(
        "device",
        vec![json!({ "brand": "Apple", "model": "iPhone 12", "storages": null })],
    );
    let service = DeviceCatalogService::new(Arc::new(store));

    assert_eq!(service.list_devices().await, fallback_devices());
}
