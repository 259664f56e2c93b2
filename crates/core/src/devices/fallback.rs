use super::devices_model::Device;

const IPHONE_14_PRO_IMAGE: &str =
    "https://images.unsplash.com/photo-1677050319876-1a6d61dc0f7b?q=80&w=1200&auto=format&fit=crop";
const GALAXY_S23_IMAGE: &str =
    "https://images.unsplash.com/photo-1610945265561-a34f84a20a9a?q=80&w=1200&auto=format&fit=crop";
const PIXEL_7_IMAGE: &str =
    "https://images.unsplash.com/photo-1609250291996-fdebe6020a3a?q=80&w=1200&auto=format&fit=crop";

/// Sample catalog served when the `device` collection is empty or unreachable.
pub fn fallback_devices() -> Vec<Device> {
    vec![
        Device {
            brand: "Apple".to_string(),
            model: "iPhone 14 Pro".to_string(),
            storages: vec![128, 256, 512, 1024],
            base_price: 650.0,
            image: Some(IPHONE_14_PRO_IMAGE.to_string()),
        },
        Device {
            brand: "Samsung".to_string(),
            model: "Galaxy S23".to_string(),
            storages: vec![128, 256, 512],
            base_price: 500.0,
            image: Some(GALAXY_S23_IMAGE.to_string()),
        },
        Device {
            brand: "Google".to_string(),
            model: "Pixel 7".to_string(),
            storages: vec![128, 256],
            base_price: 380.0,
            image: Some(PIXEL_7_IMAGE.to_string()),
        },
    ]
}
