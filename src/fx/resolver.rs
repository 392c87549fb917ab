//! Multi-hop conversion path search over a [`RateGraph`]

use super::graph::RateGraph;
use crate::transaction::Transaction;
use crate::types::CurrencyCode;
use hashbrown::HashSet;
use std::fmt;

/// One edge taken along a conversion path
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub multiplier: f64,
}

impl Hop {
    fn new(from: &str, to: &str, multiplier: f64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            multiplier,
        }
    }
}

/// Sequence of rate edges composing into one conversion factor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionPath {
    hops: Vec<Hop>,
}

impl ConversionPath {
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Empty path: source and target are the same currency
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn is_direct(&self) -> bool {
        self.hops.len() == 1
    }

    /// Product of the hop multipliers
    pub fn factor(&self) -> f64 {
        self.hops.iter().map(|hop| hop.multiplier).product()
    }

    /// Currencies visited, source first
    pub fn currencies(&self) -> Vec<&str> {
        let mut route: Vec<&str> = self.hops.iter().map(|hop| hop.from.as_str()).collect();
        if let Some(last) = self.hops.last() {
            route.push(last.to.as_str());
        }
        route
    }
}

impl fmt::Display for ConversionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.currencies().join(" -> "))
    }
}

/// Depth-first conversion search with a visited set.
///
/// A currency is never expanded twice within one search, so cyclic rate
/// tables terminate with "not found" instead of recursing forever.
///
/// # Example
/// ```
/// use fx_sales::currency::{Rate, RateSet};
/// use fx_sales::fx::{RateGraph, Resolver};
///
/// let rates = RateSet::from(vec![
///     Rate::new("USD", "EUR", 0.9),
///     Rate::new("EUR", "JPY", 160.0),
/// ]);
/// let graph = RateGraph::build(&rates);
/// let path = Resolver::new(&graph).find_path("USD", "JPY").unwrap();
///
/// assert_eq!(path.to_string(), "USD -> EUR -> JPY");
/// assert!((path.factor() - 144.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'g> {
    graph: &'g RateGraph,
}

impl<'g> Resolver<'g> {
    pub fn new(graph: &'g RateGraph) -> Self {
        Self { graph }
    }

    /// Find a path of direct edges from `from` to `to`
    pub fn find_path(&self, from: &str, to: &str) -> Option<ConversionPath> {
        if from == to {
            return Some(ConversionPath::default());
        }

        let mut visited = HashSet::new();
        let mut hops = Vec::new();
        if search(self.graph, from, to, &mut visited, &mut hops) {
            Some(ConversionPath { hops })
        } else {
            None
        }
    }

    /// Conversion factor from `from` to `to`, if any path exists
    pub fn factor(&self, from: &str, to: &str) -> Option<f64> {
        self.find_path(from, to).map(|path| path.factor())
    }
}

fn search<'a>(
    graph: &'a RateGraph,
    current: &'a str,
    target: &str,
    visited: &mut HashSet<&'a str>,
    hops: &mut Vec<Hop>,
) -> bool {
    visited.insert(current);

    let Some(conversions) = graph.neighbors(current) else {
        return false;
    };

    if let Some(&multiplier) = conversions.get(target) {
        hops.push(Hop::new(current, target, multiplier));
        return true;
    }

    for (next, &multiplier) in conversions {
        if visited.contains(next.as_str()) {
            continue;
        }

        hops.push(Hop::new(current, next, multiplier));
        if search(graph, next, target, visited, hops) {
            return true;
        }
        hops.pop();
    }

    false
}

/// Factor converting `txn`'s amount into `target`.
///
/// `txn.value() * factor` is the amount in `target`. `None` when no path
/// connects the two currencies.
pub fn resolve(graph: &RateGraph, target: &str, txn: &Transaction) -> Option<f64> {
    Resolver::new(graph).factor(txn.unit(), target)
}
