use fonebuyers_core::{devices as core_devices, quotes as core_quotes};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Device {
    pub brand: String,
    pub model: String,
    /// Available storage options in GB
    pub storages: Vec<i64>,
    pub base_price: f64,
    pub image: Option<String>,
}

impl From<core_devices::Device> for Device {
    fn from(d: core_devices::Device) -> Self {
        Self {
            brand: d.brand,
            model: d.model,
            storages: d.storages,
            base_price: d.base_price,
            image: d.image,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct QuoteRequest {
    pub brand: String,
    pub model: String,
    pub storage: i64,
    /// One of "Like New", "Good", "Fair", "Broken"
    pub condition: String,
}

impl From<QuoteRequest> for core_quotes::QuoteRequest {
    fn from(r: QuoteRequest) -> Self {
        Self {
            brand: r.brand,
            model: r.model,
            storage: r.storage,
            condition: r.condition,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct QuoteResponse {
    pub brand: String,
    pub model: String,
    pub storage: i64,
    pub condition: String,
    pub offer: f64,
    pub currency: String,
}

impl From<core_quotes::QuoteResponse> for QuoteResponse {
    fn from(q: core_quotes::QuoteResponse) -> Self {
        Self {
            brand: q.brand,
            model: q.model,
            storage: q.storage,
            condition: q.condition,
            offer: q.offer,
            currency: q.currency,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
