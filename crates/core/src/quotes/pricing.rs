//! Trade-in offer calculation.
//!
//! `offer = max(20, (base_price + storage_adjustment) * condition_multiplier)`,
//! rounded to cents. The storage adjustment only applies when the requested
//! size is one of the sizes the device is offered in.

use crate::constants::{MINIMUM_OFFER, STORAGE_STEP_BONUS, STORAGE_STEP_GB};
use crate::devices::Device;

use super::quotes_model::{Condition, QuoteRequest};

/// Bonus for storage above the device's smallest option, `40` per full `128` GB step.
pub fn storage_adjustment(device: &Device, storage: i64) -> f64 {
    if !device.storages.contains(&storage) {
        return 0.0;
    }
    let Some(min_storage) = device.min_storage() else {
        return 0.0;
    };
    // Widened so catalog sizes spanning the whole i64 range cannot overflow.
    let steps = (i128::from(storage) - i128::from(min_storage))
        .div_euclid(i128::from(STORAGE_STEP_GB))
        .max(0);
    steps as f64 * STORAGE_STEP_BONUS
}

/// Rounds to two decimals. Values too large to scale by 100 are already
/// whole numbers at `f64` precision and are returned as is.
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Computes the offer for `request` against an already matched `device`.
pub fn compute_offer(device: &Device, request: &QuoteRequest) -> f64 {
    let mut offer = device.base_price;
    offer += storage_adjustment(device, request.storage);
    offer *= Condition::from_label(&request.condition).multiplier();
    round_to_cents(offer.max(MINIMUM_OFFER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::fallback_devices;

    fn iphone() -> Device {
        fallback_devices().remove(0)
    }

    fn request(storage: i64, condition: &str) -> QuoteRequest {
        QuoteRequest {
            brand: "Apple".to_string(),
            model: "iPhone 14 Pro".to_string(),
            storage,
            condition: condition.to_string(),
        }
    }

    #[test]
    fn one_step_like_new() {
        assert_eq!(compute_offer(&iphone(), &request(256, "Like New")), 690.0);
    }

    #[test]
    fn seven_steps_fair() {
        assert_eq!(compute_offer(&iphone(), &request(1024, "Fair")), 651.0);
    }

    #[test]
    fn smallest_storage_has_no_bonus() {
        assert_eq!(storage_adjustment(&iphone(), 128), 0.0);
        assert_eq!(compute_offer(&iphone(), &request(128, "Good")), 552.5);
    }

    #[test]
    fn partial_steps_round_down() {
        let device = Device {
            brand: "Acme".to_string(),
            model: "Phone".to_string(),
            storages: vec![64, 128, 256],
            base_price: 100.0,
            image: None,
        };
        // (128 - 64) / 128 = 0.5 -> 0 steps; (256 - 64) / 128 = 1.5 -> 1 step
        assert_eq!(storage_adjustment(&device, 128), 0.0);
        assert_eq!(storage_adjustment(&device, 256), 40.0);
    }

    #[test]
    fn storage_outside_offered_sizes_is_not_adjusted() {
        assert_eq!(storage_adjustment(&iphone(), 999), 0.0);
        assert_eq!(compute_offer(&iphone(), &request(999, "Like New")), 650.0);
        assert_eq!(compute_offer(&iphone(), &request(999, "Broken")), 227.5);
    }

    #[test]
    fn unknown_condition_uses_point_eight() {
        assert_eq!(compute_offer(&iphone(), &request(128, "Unknown")), 520.0);
        assert_eq!(compute_offer(&iphone(), &request(128, "like new")), 520.0);
    }

    #[test]
    fn offer_never_drops_below_minimum() {
        let device = Device {
            brand: "Acme".to_string(),
            model: "Brick".to_string(),
            storages: vec![],
            base_price: 10.0,
            image: None,
        };
        let req = QuoteRequest {
            brand: "Acme".to_string(),
            model: "Brick".to_string(),
            storage: 16,
            condition: "Broken".to_string(),
        };
        assert_eq!(compute_offer(&device, &req), 20.0);
    }

    #[test]
    fn extreme_storage_range_does_not_overflow() {
        let device = Device {
            brand: "Acme".to_string(),
            model: "Vault".to_string(),
            storages: vec![i64::MIN, i64::MAX],
            base_price: 100.0,
            image: None,
        };
        let req = QuoteRequest {
            brand: "Acme".to_string(),
            model: "Vault".to_string(),
            storage: i64::MAX,
            condition: "Like New".to_string(),
        };

        let bonus = storage_adjustment(&device, i64::MAX);
        assert!(bonus.is_finite() && bonus > 0.0);
        assert_eq!(storage_adjustment(&device, i64::MIN), 0.0);

        let offer = compute_offer(&device, &req);
        assert!(offer.is_finite());
        assert!(offer >= MINIMUM_OFFER);
    }

    #[test]
    fn huge_base_price_stays_finite() {
        let device = Device {
            brand: "Acme".to_string(),
            model: "Gold".to_string(),
            storages: vec![128],
            base_price: 1e307,
            image: None,
        };
        let req = QuoteRequest {
            brand: "Acme".to_string(),
            model: "Gold".to_string(),
            storage: 128,
            condition: "Like New".to_string(),
        };
        assert_eq!(compute_offer(&device, &req), 1e307);
        assert_eq!(round_to_cents(f64::MAX), f64::MAX);
        assert_eq!(round_to_cents(12.345_6), 12.35);
    }

    #[test]
    fn offers_are_rounded_to_cents() {
        let device = Device {
            brand: "Acme".to_string(),
            model: "Odd".to_string(),
            storages: vec![128],
            base_price: 123.456,
            image: None,
        };
        for condition in ["Like New", "Good", "Fair", "Broken", "Other"] {
            let req = QuoteRequest {
                brand: "Acme".to_string(),
                model: "Odd".to_string(),
                storage: 128,
                condition: condition.to_string(),
            };
            let offer = compute_offer(&device, &req);
            assert!(offer >= MINIMUM_OFFER);
            assert!(((offer * 100.0).round() - offer * 100.0).abs() < 1e-6);
        }
    }
}
