//! Sales aggregation by SKU in a target currency

use crate::currency::RateSet;
use crate::fx::{Converter, RateGraph};
use crate::transaction::Transaction;
use crate::types::{CurrencyCode, Sku, Value};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Transactions for `sku`, in input order
pub fn filter_by_sku<'t>(sku: &str, txns: &'t [Transaction]) -> Vec<&'t Transaction> {
    txns.iter().filter(|txn| txn.sku() == sku).collect()
}

/// Total sales of `sku` expressed in `target`.
///
/// Transactions whose currency cannot reach `target` contribute `0.0`.
/// Summation follows transaction order.
///
/// # Example
/// ```
/// use fx_sales::currency::{Rate, RateSet};
/// use fx_sales::sales::sales_total;
/// use fx_sales::transaction::Transaction;
/// use fx_sales::types::Amount;
///
/// let rates = RateSet::from(vec![Rate::new("USD", "EUR", 0.9)]);
/// let txns = vec![
///     Transaction::new("s1", "X", Amount::new(100.0, "USD")),
///     Transaction::new("s2", "X", Amount::new(50.0, "EUR")),
/// ];
///
/// let total = sales_total("X", "EUR", &rates, &txns);
/// assert!((total - 140.0).abs() < 1e-9);
/// ```
pub fn sales_total(sku: &str, target: &str, rates: &RateSet, txns: &[Transaction]) -> Value {
    let graph = RateGraph::build(rates);
    sum_of(sku, target, &graph, txns)
}

/// [`sales_total`] against an already built graph
pub fn sum_of(sku: &str, target: &str, graph: &RateGraph, txns: &[Transaction]) -> Value {
    let mut converter = Converter::new(graph);
    filter_by_sku(sku, txns)
        .into_iter()
        .map(|txn| converter.convert(target, txn))
        .fold(0.0, |total, value| total + value)
}

/// [`sales_total`] with conversions spread over the rayon pool.
///
/// Converted values are collected in transaction order and summed serially,
/// so the result is identical to the sequential total.
pub fn par_sales_total(sku: &str, target: &str, rates: &RateSet, txns: &[Transaction]) -> Value {
    let graph = RateGraph::build(rates);
    let converted: Vec<Value> = filter_by_sku(sku, txns)
        .par_iter()
        .map(|txn| crate::fx::convert(&graph, target, txn))
        .collect();

    converted.into_iter().fold(0.0, |total, value| total + value)
}

/// Totals plus bookkeeping for one SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub sku: Sku,
    pub currency: CurrencyCode,
    pub total: Value,
    /// Transactions matching the SKU
    pub matched: usize,
    /// Matching transactions with no conversion path
    pub unresolved: usize,
}

/// Aggregate `sku` like [`sum_of`] and count unresolvable transactions
pub fn summarize(sku: &str, target: &str, graph: &RateGraph, txns: &[Transaction]) -> SalesSummary {
    let mut converter = Converter::new(graph);
    let mut summary = SalesSummary {
        sku: sku.to_string(),
        currency: target.to_string(),
        total: 0.0,
        matched: 0,
        unresolved: 0,
    };

    for txn in filter_by_sku(sku, txns) {
        summary.matched += 1;
        match converter.try_convert(target, txn) {
            Ok(value) => summary.total += value,
            Err(e) => {
                log::warn!("{} sale at {} ({}) counted as 0: {}", sku, txn.store(), txn.amount(), e);
                summary.unresolved += 1;
            }
        }
    }

    summary
}

/// Total for every SKU present, keyed by SKU
pub fn totals_by_sku(target: &str, graph: &RateGraph, txns: &[Transaction]) -> BTreeMap<Sku, Value> {
    let mut converter = Converter::new(graph);
    let mut totals: BTreeMap<Sku, Value> = BTreeMap::new();

    for txn in txns {
        let value = converter.convert(target, txn);
        *totals.entry(txn.sku().to_string()).or_insert(0.0) += value;
    }

    totals
}
