// Block timestamp as reported by eth_getBlockByNumber

use crate::error::{ClockError, Result};
use serde_json::Value;

/// Unix timestamp (seconds) of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BlockTimestamp(u64);

impl BlockTimestamp {
    pub const fn new(unix_secs: u64) -> Self {
        Self(unix_secs)
    }

    pub const fn unix_secs(self) -> u64 {
        self.0
    }

    /// Parse an Ethereum hex quantity such as `"0x65a2f1c0"`
    pub fn from_quantity(quantity: &str) -> Result<Self> {
        let digits = quantity
            .strip_prefix("0x")
            .or_else(|| quantity.strip_prefix("0X"))
            .ok_or_else(|| {
                ClockError::UnexpectedResponse(format!(
                    "timestamp '{}' is not a 0x-prefixed quantity",
                    quantity
                ))
            })?;

        if digits.is_empty() {
            return Err(ClockError::UnexpectedResponse(
                "timestamp quantity has no digits".to_string(),
            ));
        }

        u64::from_str_radix(digits, 16).map(Self).map_err(|e| {
            ClockError::UnexpectedResponse(format!("invalid timestamp '{}': {}", quantity, e))
        })
    }

    /// Extract `timestamp` from a block object.
    ///
    /// A `null` block (node has none at that tag) is an error.
    pub fn from_block(block: &Value) -> Result<Self> {
        if block.is_null() {
            return Err(ClockError::UnexpectedResponse(
                "node returned no block".to_string(),
            ));
        }

        match block.get("timestamp") {
            Some(Value::String(quantity)) => Self::from_quantity(quantity),
            // Some simulators answer with a plain number
            Some(Value::Number(n)) => n.as_u64().map(Self).ok_or_else(|| {
                ClockError::UnexpectedResponse(format!("invalid timestamp number {}", n))
            }),
            Some(other) => Err(ClockError::UnexpectedResponse(format!(
                "unexpected timestamp value {}",
                other
            ))),
            None => Err(ClockError::UnexpectedResponse(
                "block has no timestamp field".to_string(),
            )),
        }
    }
}

impl std::fmt::Display for BlockTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
