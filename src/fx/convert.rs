//! Transaction conversion into a target currency

use super::graph::RateGraph;
use super::resolver::{resolve, Resolver};
use crate::error::{Result, TradeError};
use crate::transaction::Transaction;
use crate::types::{CurrencyCode, Value};
use hashbrown::HashMap;

/// Express `txn` in `target`.
///
/// Same-currency transactions return their raw value unchanged. Transactions
/// with no conversion path contribute `0.0`.
pub fn convert(graph: &RateGraph, target: &str, txn: &Transaction) -> Value {
    if txn.has_unit(target) {
        return txn.value();
    }

    match resolve(graph, target, txn) {
        Some(factor) => txn.value() * factor,
        None => 0.0,
    }
}

/// Converter that remembers resolved factors per currency pair
///
/// # Example
/// ```
/// use fx_sales::currency::{Rate, RateSet};
/// use fx_sales::fx::{Converter, RateGraph};
/// use fx_sales::transaction::Transaction;
/// use fx_sales::types::Amount;
///
/// let graph = RateGraph::build(&RateSet::from(vec![Rate::new("EUR", "USD", 1.20)]));
/// let mut converter = Converter::new(&graph);
///
/// let txn = Transaction::new("Yonkers", "DM1182", Amount::new(100.0, "EUR"));
/// assert!((converter.convert("USD", &txn) - 120.0).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct Converter<'g> {
    resolver: Resolver<'g>,
    /// (from, to) -> factor, `None` when no path exists
    cache: HashMap<(CurrencyCode, CurrencyCode), Option<f64>>,
}

impl<'g> Converter<'g> {
    pub fn new(graph: &'g RateGraph) -> Self {
        Self {
            resolver: Resolver::new(graph),
            cache: HashMap::new(),
        }
    }

    /// Conversion factor for `from -> to`, resolved once per pair
    pub fn factor(&mut self, from: &str, to: &str) -> Option<f64> {
        if from == to {
            return Some(1.0);
        }

        let key = (from.to_string(), to.to_string());
        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }

        let resolved = match self.resolver.find_path(from, to) {
            Some(path) => {
                log::debug!("Resolved {} via {} (factor {})", to, path, path.factor());
                Some(path.factor())
            }
            None => None,
        };
        self.cache.insert(key, resolved);
        resolved
    }

    /// Same contract as [`convert`]
    pub fn convert(&mut self, target: &str, txn: &Transaction) -> Value {
        if txn.has_unit(target) {
            return txn.value();
        }

        match self.factor(txn.unit(), target) {
            Some(factor) => txn.value() * factor,
            None => 0.0,
        }
    }

    /// Like [`Converter::convert`] but reports a missing path as an error
    pub fn try_convert(&mut self, target: &str, txn: &Transaction) -> Result<Value> {
        if txn.has_unit(target) {
            return Ok(txn.value());
        }

        self.factor(txn.unit(), target)
            .map(|factor| txn.value() * factor)
            .ok_or_else(|| TradeError::NoConversionPath {
                from: txn.unit().to_string(),
                to: target.to_string(),
            })
    }

    /// Number of currency pairs resolved so far
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{Rate, RateSet};
    use crate::types::Amount;
    use approx::assert_relative_eq;

    fn txn(value: f64, unit: &str) -> Transaction {
        Transaction::new("Yonkers", "DM1182", Amount::new(value, unit))
    }

    fn usd_eur_jpy() -> RateGraph {
        RateGraph::build(&RateSet::from(vec![
            Rate::new("USD", "EUR", 0.9),
            Rate::new("EUR", "JPY", 160.0),
        ]))
    }

    #[test]
    fn test_same_currency_is_exact() {
        let empty = RateGraph::default();
        assert_eq!(convert(&empty, "USD", &txn(19.68, "USD")), 19.68);

        // a self-loop must not scale same-currency amounts
        let looped = RateGraph::build(&RateSet::from(vec![Rate::new("USD", "USD", 3.0)]));
        assert_eq!(convert(&looped, "USD", &txn(19.68, "USD")), 19.68);
    }

    #[test]
    fn test_multi_hop_conversion() {
        let graph = usd_eur_jpy();
        assert_relative_eq!(convert(&graph, "JPY", &txn(100.0, "USD")), 14400.0, epsilon = 1e-6);
    }

    #[test]
    fn test_missing_path_is_zero() {
        let graph = usd_eur_jpy();
        assert_eq!(convert(&graph, "JPY", &txn(100.0, "GBP")), 0.0);
    }

    #[test]
    fn test_converter_caches_pairs() {
        let graph = usd_eur_jpy();
        let mut converter = Converter::new(&graph);

        let first = converter.convert("JPY", &txn(100.0, "USD"));
        let second = converter.convert("JPY", &txn(100.0, "USD"));
        converter.convert("JPY", &txn(1.0, "GBP"));
        converter.convert("JPY", &txn(1.0, "JPY"));

        assert_eq!(first, second);
        assert_eq!(converter.cached_pairs(), 2);
    }

    #[test]
    fn test_converter_matches_free_function() {
        let graph = usd_eur_jpy();
        let mut converter = Converter::new(&graph);

        for t in [txn(100.0, "USD"), txn(5.0, "EUR"), txn(1000.0, "JPY"), txn(3.0, "GBP")] {
            assert_eq!(converter.convert("EUR", &t), convert(&graph, "EUR", &t));
        }
    }

    #[test]
    fn test_try_convert_reports_missing_path() {
        let graph = usd_eur_jpy();
        let mut converter = Converter::new(&graph);

        assert_relative_eq!(converter.try_convert("EUR", &txn(100.0, "USD")).unwrap(), 90.0);
        match converter.try_convert("EUR", &txn(1.0, "GBP")) {
            Err(TradeError::NoConversionPath { from, to }) => {
                assert_eq!(from, "GBP");
                assert_eq!(to, "EUR");
            }
            other => panic!("expected NoConversionPath, got {:?}", other),
        }
    }
}
