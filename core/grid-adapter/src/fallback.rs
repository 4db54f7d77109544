//! FILENAME: core/grid-adapter/src/fallback.rs
//! Fallback values for direct-key columns whose field is missing from a record.
//!
//! Demo datasets are sparse; rather than render holes, the demo pages fill a
//! missing direct field with a plausible round number. The policy is a trait
//! object so tests and non-demo hosts can substitute something deterministic.

use serde_json::Value;
use std::fmt::Debug;

/// Supplies the value of a direct-key cell when the record lacks the key.
pub trait FallbackProvider: Debug + Send + Sync {
    fn fallback_for(&self, field: &str) -> Value;
}

/// Upper bound (exclusive) of the demo multiplier.
pub const DEMO_BUCKETS: u64 = 25;

/// Step between demo values.
pub const DEMO_STEP: u64 = 100;

/// `floor(random * 25) * 100`: one of 0, 100, ..., 2400.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoHundredsFallback;

impl FallbackProvider for DemoHundredsFallback {
    fn fallback_for(&self, _field: &str) -> Value {
        let bucket = (rand::random::<f64>() * DEMO_BUCKETS as f64).floor() as u64;
        Value::from(bucket.min(DEMO_BUCKETS - 1) * DEMO_STEP)
    }
}

/// Always returns the same value.
#[derive(Debug, Clone)]
pub struct FixedFallback(pub Value);

impl FallbackProvider for FixedFallback {
    fn fallback_for(&self, _field: &str) -> Value {
        self.0.clone()
    }
}

/// Missing fields render as `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFallback;

impl FallbackProvider for NullFallback {
    fn fallback_for(&self, _field: &str) -> Value {
        Value::Null
    }
}
