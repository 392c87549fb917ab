//! Exchange rate records

use crate::error::{Result, TradeError};
use crate::types::CurrencyCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inverse multiplier for a rate.
///
/// A zero rate has no inverse and maps to `0.0` rather than infinity.
/// Negative rates invert like any other non-zero value.
pub fn invert_rate(rate: f64) -> f64 {
    if rate != 0.0 {
        1.0 / rate
    } else {
        0.0
    }
}

/// Directed exchange rate: 1 unit of `from` equals `conversion` units of `to`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub conversion: f64,
}

impl Rate {
    /// Create new rate
    pub fn new(from: impl Into<CurrencyCode>, to: impl Into<CurrencyCode>, conversion: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            conversion,
        }
    }

    /// Get the inverse rate (`to -> from`)
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            conversion: invert_rate(self.conversion),
        }
    }

    /// Rates that are zero, negative or non-finite are degenerate
    pub fn is_valid(&self) -> bool {
        self.conversion.is_finite() && self.conversion > 0.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} = {}", self.from, self.to, self.conversion)
    }
}

/// Ordered list of exchange rates as decoded from the source document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateSet {
    rates: Vec<Rate>,
}

impl RateSet {
    /// Create empty rate set
    pub fn new() -> Self {
        Self { rates: Vec::new() }
    }

    /// Append a rate
    pub fn push(&mut self, rate: Rate) {
        self.rates.push(rate);
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rate> {
        self.rates.iter()
    }

    pub fn as_slice(&self) -> &[Rate] {
        &self.rates
    }

    /// Every currency named by a rate, in first-seen order
    pub fn currencies(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for rate in &self.rates {
            for code in [rate.from.as_str(), rate.to.as_str()] {
                if !seen.contains(&code) {
                    seen.push(code);
                }
            }
        }
        seen
    }

    /// Reject the first degenerate rate
    pub fn validate(&self) -> Result<()> {
        match self.rates.iter().find(|rate| !rate.is_valid()) {
            Some(rate) => Err(TradeError::InvalidRate {
                from: rate.from.clone(),
                to: rate.to.clone(),
                conversion: rate.conversion,
            }),
            None => Ok(()),
        }
    }
}

impl From<Vec<Rate>> for RateSet {
    fn from(rates: Vec<Rate>) -> Self {
        Self { rates }
    }
}

impl FromIterator<Rate> for RateSet {
    fn from_iter<I: IntoIterator<Item = Rate>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RateSet {
    type Item = &'a Rate;
    type IntoIter = std::slice::Iter<'a, Rate>;

    fn into_iter(self) -> Self::IntoIter {
        self.rates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_rate() {
        let inverse_rate = invert_rate(1.2); // 1 EUR = 1.2 USD
        assert!((inverse_rate - 0.8333).abs() < 0.001); // 1 USD = 0.8333 EUR
        assert_eq!(invert_rate(0.0), 0.0);
        assert_eq!(invert_rate(-2.0), -0.5);
    }

    #[test]
    fn test_rate_inverse() {
        let rate = Rate::new("EUR", "USD", 1.25);
        let inverse = rate.inverse();

        assert_eq!(inverse.from, "USD");
        assert_eq!(inverse.to, "EUR");
        assert_eq!(inverse.conversion, 0.8);
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new("AUD", "CAD", 1.0079).to_string(), "AUD/CAD = 1.0079");
    }

    #[test]
    fn test_currencies_first_seen_order() {
        let rates = RateSet::from(vec![
            Rate::new("AUD", "CAD", 1.0079),
            Rate::new("CAD", "USD", 1.0090),
            Rate::new("USD", "CAD", 0.9911),
        ]);
        assert_eq!(rates.currencies(), vec!["AUD", "CAD", "USD"]);
    }

    #[test]
    fn test_validate() {
        let good = RateSet::from(vec![Rate::new("AUD", "CAD", 1.0079)]);
        assert!(good.validate().is_ok());

        let bad: RateSet = vec![
            Rate::new("AUD", "CAD", 1.0079),
            Rate::new("CAD", "USD", 0.0),
            Rate::new("USD", "EUR", -1.0),
        ]
        .into_iter()
        .collect();

        match bad.validate() {
            Err(TradeError::InvalidRate { from, to, conversion }) => {
                assert_eq!(from, "CAD");
                assert_eq!(to, "USD");
                assert_eq!(conversion, 0.0);
            }
            other => panic!("expected InvalidRate, got {:?}", other),
        }

        assert!(RateSet::from(vec![Rate::new("A", "B", f64::NAN)]).validate().is_err());
    }
}
