//! Device domain models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::documents::Document;
use crate::errors::ValidationError;

/// A phone model that can be traded in.
///
/// Identity is the `(brand, model)` pair; lookups compare both fields with
/// exact, case-sensitive equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    pub brand: String,
    pub model: String,
    /// Offered storage sizes in GB, in catalog order.
    #[serde(default)]
    pub storages: Vec<i64>,
    pub base_price: f64,
    pub image: Option<String>,
}

impl Device {
    pub fn matches(&self, brand: &str, model: &str) -> bool {
        self.brand == brand && self.model == model
    }

    pub fn min_storage(&self) -> Option<i64> {
        self.storages.iter().copied().min()
    }
}

impl TryFrom<&Document> for Device {
    type Error = ValidationError;

    /// Maps a raw `device` document, defaulting a missing `storages` key to empty,
    /// missing `base_price` to 0.0 and missing `image` to `None`.
    fn try_from(doc: &Document) -> Result<Self, Self::Error> {
        let brand = required_string(doc, "brand")?;
        let model = required_string(doc, "model")?;

        let storages = match doc.get("storages") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(parse_storage)
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(ValidationError::InvalidField {
                    field: "storages".to_string(),
                    reason: format!("expected array, got {}", other),
                })
            }
        };

        let base_price = match doc.get("base_price") {
            None => 0.0,
            Some(value) => parse_price(value)?,
        };
        if base_price < 0.0 {
            return Err(ValidationError::InvalidField {
                field: "base_price".to_string(),
                reason: "must be greater than or equal to 0".to_string(),
            });
        }

        let image = match doc.get("image") {
            None | Some(Value::Null) => None,
            Some(Value::String(url)) => Some(url.clone()),
            Some(other) => {
                return Err(ValidationError::InvalidField {
                    field: "image".to_string(),
                    reason: format!("expected string, got {}", other),
                })
            }
        };

        Ok(Device {
            brand,
            model,
            storages,
            base_price,
            image,
        })
    }
}

fn required_string(doc: &Document, field: &str) -> Result<String, ValidationError> {
    match doc.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) => Err(ValidationError::MissingField(field.to_string())),
        Some(other) => Err(ValidationError::InvalidField {
            field: field.to_string(),
            reason: format!("expected string, got {}", other),
        }),
    }
}

/// Accepts integers, integral floats (`128.0`) and integer strings (`"128"`).
fn parse_storage(value: &Value) -> Result<i64, ValidationError> {
    let invalid = || ValidationError::InvalidField {
        field: "storages".to_string(),
        reason: format!("expected integer, got {}", value),
    };
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(size) => Ok(size),
            None => n.as_f64().and_then(integral_f64).ok_or_else(invalid),
        },
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn integral_f64(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

// Prices are sometimes stored as strings by hand-edited seed data.
fn parse_price(value: &Value) -> Result<f64, ValidationError> {
    let invalid = || ValidationError::InvalidField {
        field: "base_price".to_string(),
        reason: format!("expected number, got {}", value),
    };
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(invalid),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}
