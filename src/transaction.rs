//! Sale transactions and their raw record form

use crate::error::{Result, TradeError};
use crate::types::{Amount, Sku, StoreId, Value};
use serde::{Deserialize, Serialize};

/// One sale event: a store sold a SKU for an amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    store: StoreId,
    sku: Sku,
    amount: Amount,
}

impl Transaction {
    pub fn new(store: impl Into<StoreId>, sku: impl Into<Sku>, amount: Amount) -> Self {
        Self {
            store: store.into(),
            sku: sku.into(),
            amount,
        }
    }

    /// Parse a raw record `[store, sku, "<value> <unit>", ...]`.
    ///
    /// Fields past the third are ignored.
    pub fn from_record<S: AsRef<str>>(record: &[S]) -> Result<Self> {
        if record.len() < 3 {
            return Err(TradeError::ParseError(format!(
                "expected at least 3 fields, got {}",
                record.len()
            )));
        }

        let amount = parse_cost(record[2].as_ref())?;
        Ok(Self::new(record[0].as_ref(), record[1].as_ref(), amount))
    }

    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    pub fn value(&self) -> Value {
        self.amount.value()
    }

    pub fn unit(&self) -> &str {
        self.amount.unit()
    }

    pub fn has_unit(&self, unit: &str) -> bool {
        self.amount.has_unit(unit)
    }
}

/// Parse a cost field such as `"70.00 AUD"`
pub fn parse_cost(field: &str) -> Result<Amount> {
    let mut tokens = field.split_whitespace();
    let (value, unit) = match (tokens.next(), tokens.next()) {
        (Some(value), Some(unit)) => (value, unit),
        _ => {
            return Err(TradeError::ParseError(format!(
                "bad cost '{}': expected '<value> <unit>'",
                field
            )))
        }
    };

    let value: Value = value
        .parse()
        .map_err(|e| TradeError::ParseError(format!("bad cost value '{}': {}", value, e)))?;

    Ok(Amount::new(value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cost() {
        let amount = parse_cost("70.00 AUD").unwrap();
        assert_eq!(amount.value(), 70.0);
        assert_eq!(amount.unit(), "AUD");

        let negative = parse_cost("-3.5  EUR").unwrap();
        assert_eq!(negative.value(), -3.5);
        assert_eq!(negative.unit(), "EUR");
    }

    #[test]
    fn test_parse_cost_rejects_missing_unit() {
        assert!(parse_cost("100").is_err());
        assert!(parse_cost("").is_err());
        assert!(parse_cost("amount").is_err());
    }

    #[test]
    fn test_parse_cost_rejects_bad_value() {
        assert!(parse_cost("abc USD").is_err());
    }

    #[test]
    fn test_parse_cost_ignores_extra_tokens() {
        let amount = parse_cost("12.5 USD extra").unwrap();
        assert_eq!(amount.unit(), "USD");
    }

    #[test]
    fn test_from_record() {
        let txn = Transaction::from_record(&["Yonkers", "DM1210", "70.00 USD"][..]).unwrap();
        assert_eq!(txn.store(), "Yonkers");
        assert_eq!(txn.sku(), "DM1210");
        assert_eq!(txn.value(), 70.0);
        assert!(txn.has_unit("USD"));
    }

    #[test]
    fn test_from_record_too_short() {
        assert!(Transaction::from_record(&["Yonkers", "DM1210"][..]).is_err());
    }

    #[test]
    fn test_header_row_is_rejected() {
        assert!(Transaction::from_record(&["store", "sku", "amount"][..]).is_err());
    }
}
