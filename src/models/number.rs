//! Serde helpers that put decimals on the wire as JSON numbers.
//!
//! Whole values are written as integers (`80000`, not `80000.0`) so exported
//! text matches what a reader expects; fractional values are written as
//! floats.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserializer, Serializer, ser::Error};

/// Serializes a decimal as a JSON number.
pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        if let Some(whole) = normalized.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    match normalized.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => Err(S::Error::custom(format!(
            "decimal {} is out of range",
            normalized
        ))),
    }
}

/// Deserializes a decimal from a JSON number (integer or float).
pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    rust_decimal::serde::float::deserialize(deserializer)
}
