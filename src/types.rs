//! Core types and the amount record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency code (e.g. "USD"), compared by exact string equality
pub type CurrencyCode = String;

/// Product identifier used to select transactions
pub type Sku = String;

/// Store identifier
pub type StoreId = String;

/// Money/value type
pub type Value = f64;

/// A monetary value paired with its currency unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    value: Value,
    unit: CurrencyCode,
}

impl Amount {
    /// Create a new amount
    pub fn new(value: Value, unit: impl Into<CurrencyCode>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Numeric value
    pub fn value(&self) -> Value {
        self.value
    }

    /// Currency unit
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Whether this amount is denominated in `unit`
    pub fn has_unit(&self, unit: &str) -> bool {
        self.unit == unit
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
