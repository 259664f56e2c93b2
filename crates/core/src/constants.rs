/// Collection holding the tradeable device catalog
pub const DEVICE_COLLECTION: &str = "device";

/// Collection receiving one record per computed quote
pub const QUOTE_COLLECTION: &str = "quote";

/// Currency of every offer
pub const QUOTE_CURRENCY: &str = "USD";

/// Lowest offer ever returned, after the condition multiplier
pub const MINIMUM_OFFER: f64 = 20.0;

/// Storage size (GB) that makes up one upgrade step above the smallest option
pub const STORAGE_STEP_GB: i64 = 128;

/// Amount added to the offer for every storage step
pub const STORAGE_STEP_BONUS: f64 = 40.0;

/// Multiplier applied to conditions missing from the condition table
pub const UNKNOWN_CONDITION_MULTIPLIER: f64 = 0.8;
