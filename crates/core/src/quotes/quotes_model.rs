//! Quote domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{QUOTE_CURRENCY, UNKNOWN_CONDITION_MULTIPLIER};
use crate::documents::Document;
use crate::errors::{Error, Result};

/// Incoming quote request. Transient, one per call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteRequest {
    pub brand: String,
    pub model: String,
    /// Requested storage size in GB.
    pub storage: i64,
    /// Free-form condition label, see [`Condition`].
    pub condition: String,
}

/// Computed quote returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteResponse {
    pub brand: String,
    pub model: String,
    pub storage: i64,
    pub condition: String,
    pub offer: f64,
    pub currency: String,
}

impl QuoteResponse {
    pub fn new(request: QuoteRequest, offer: f64) -> Self {
        Self {
            brand: request.brand,
            model: request.model,
            storage: request.storage,
            condition: request.condition,
            offer,
            currency: QUOTE_CURRENCY.to_string(),
        }
    }
}

/// Record appended to the `quote` collection for every computed quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteRecord {
    pub brand: String,
    pub model: String,
    pub storage: i64,
    pub condition: String,
    pub offer: f64,
}

impl QuoteRecord {
    pub fn new(request: &QuoteRequest, offer: f64) -> Self {
        Self {
            brand: request.brand.clone(),
            model: request.model.clone(),
            storage: request.storage,
            condition: request.condition.clone(),
            offer,
        }
    }

    pub fn to_document(&self) -> Result<Document> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(Error::Unexpected(format!(
                "Quote record serialized to non-object: {}",
                other
            ))),
        }
    }
}

/// Physical condition category of a traded-in device.
///
/// Labels are matched exactly; anything else (including case variants such
/// as `"like new"`) is [`Condition::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    LikeNew,
    Good,
    Fair,
    Broken,
    Other,
}

impl Condition {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Like New" => Condition::LikeNew,
            "Good" => Condition::Good,
            "Fair" => Condition::Fair,
            "Broken" => Condition::Broken,
            _ => Condition::Other,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Condition::LikeNew => 1.0,
            Condition::Good => 0.85,
            Condition::Fair => 0.7,
            Condition::Broken => 0.35,
            // Unrecognized labels are priced above Broken.
            Condition::Other => UNKNOWN_CONDITION_MULTIPLIER,
        }
    }
}
