//! Serde helpers for `Decimal` fields of the persisted snapshot.
//!
//! Values are written as strings so every digit survives a save/load cycle.
//! Plain JSON numbers are still accepted on read, as written by older payloads.

use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

use super::input_utils::decimal_from_f64;

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDecimal {
    Text(String),
    Number(f64),
}

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    match StoredDecimal::deserialize(deserializer)? {
        StoredDecimal::Text(s) => Decimal::from_str(s.trim())
            .map_err(|e| D::Error::custom(format!("Invalid Decimal '{}': {}", s, e))),
        StoredDecimal::Number(n) => {
            decimal_from_f64(n).ok_or_else(|| D::Error::custom("Invalid Decimal"))
        }
    }
}
