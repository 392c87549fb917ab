//! Rate graph - currency adjacency with synthesized inverse edges

use crate::currency::{invert_rate, RateSet};
use crate::error::Result;
use crate::types::CurrencyCode;
use hashbrown::HashMap;
use std::collections::BTreeMap;

/// Direct conversions out of one currency: neighbor -> multiplier.
///
/// Ordered by currency code so path search visits neighbors deterministically.
pub type Conversions = BTreeMap<CurrencyCode, f64>;

/// Currency adjacency built once from a [`RateSet`]
///
/// For every rate `A -> B = k` the graph holds `A -> B = k` and
/// `B -> A = 1/k` (`0` when `k == 0`). Later rates overwrite earlier edges
/// with the same endpoints.
///
/// # Example
/// ```
/// use fx_sales::currency::{Rate, RateSet};
/// use fx_sales::fx::RateGraph;
///
/// let rates = RateSet::from(vec![Rate::new("EUR", "USD", 1.25)]);
/// let graph = RateGraph::build(&rates);
///
/// assert_eq!(graph.rate("EUR", "USD"), Some(1.25));
/// assert_eq!(graph.rate("USD", "EUR"), Some(0.8));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateGraph {
    edges: HashMap<CurrencyCode, Conversions>,
}

impl RateGraph {
    /// Build the graph, accepting degenerate rates as given
    pub fn build(rates: &RateSet) -> Self {
        let mut edges = HashMap::new();

        for currency in rates.currencies() {
            edges.insert(currency.to_string(), Self::incident_edges(currency, rates));
        }

        let graph = Self { edges };
        log::debug!(
            "Built rate graph: {} currencies, {} edges from {} rates",
            graph.len(),
            graph.edge_count(),
            rates.len()
        );
        graph
    }

    /// Build the graph, rejecting zero, negative and non-finite rates
    pub fn try_build(rates: &RateSet) -> Result<Self> {
        rates.validate()?;
        Ok(Self::build(rates))
    }

    /// Scan every rate for edges touching `currency`
    fn incident_edges(currency: &str, rates: &RateSet) -> Conversions {
        let mut conversions = Conversions::new();

        for rate in rates {
            if rate.from == currency {
                conversions.insert(rate.to.clone(), rate.conversion);
            }
            // self-loops keep the rate as given
            if rate.to == currency && rate.from != rate.to {
                conversions.insert(rate.from.clone(), invert_rate(rate.conversion));
            }
        }

        conversions
    }

    /// Direct conversions out of `currency`
    pub fn neighbors(&self, currency: &str) -> Option<&Conversions> {
        self.edges.get(currency)
    }

    /// Direct multiplier for `from -> to`
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        self.edges.get(from)?.get(to).copied()
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.edges.contains_key(currency)
    }

    /// Known currencies, sorted
    pub fn currencies(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.edges.keys().map(|c| c.as_str()).collect();
        codes.sort_unstable();
        codes
    }

    /// Number of currencies
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|c| c.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Rate;
    use crate::error::TradeError;

    fn sample_rates() -> RateSet {
        RateSet::from(vec![
            Rate::new("AUD", "CAD", 1.0079),
            Rate::new("CAD", "USD", 1.0090),
            Rate::new("USD", "CAD", 0.9911),
        ])
    }

    #[test]
    fn test_empty_rates() {
        let graph = RateGraph::build(&RateSet::new());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors("USD").is_none());
    }

    #[test]
    fn test_forward_and_inverse_edges() {
        let rates = RateSet::from(vec![Rate::new("USD", "EUR", 0.8)]);
        let graph = RateGraph::build(&rates);

        assert_eq!(graph.rate("USD", "EUR"), Some(0.8));
        assert_eq!(graph.rate("EUR", "USD"), Some(1.25));
        assert_eq!(graph.currencies(), vec!["EUR", "USD"]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_target_only_currency_has_entry() {
        let graph = RateGraph::build(&sample_rates());
        assert!(graph.contains("AUD"));
        assert!(graph.contains("CAD"));
        assert!(graph.contains("USD"));
        assert!((graph.rate("CAD", "AUD").unwrap() - 1.0 / 1.0079).abs() < 1e-12);
    }

    #[test]
    fn test_last_write_wins() {
        // CAD->USD is given directly, then USD->CAD's inverse overwrites it
        let graph = RateGraph::build(&sample_rates());
        assert!((graph.rate("CAD", "USD").unwrap() - 1.0 / 0.9911).abs() < 1e-12);
        // USD sees CAD->USD's inverse first, then its own direct rate
        assert_eq!(graph.rate("USD", "CAD"), Some(0.9911));
    }

    #[test]
    fn test_zero_rate_inverse_is_zero() {
        let rates = RateSet::from(vec![Rate::new("USD", "XXX", 0.0)]);
        let graph = RateGraph::build(&rates);
        assert_eq!(graph.rate("USD", "XXX"), Some(0.0));
        assert_eq!(graph.rate("XXX", "USD"), Some(0.0));
    }

    #[test]
    fn test_negative_rate_is_accepted() {
        let rates = RateSet::from(vec![Rate::new("USD", "NEG", -4.0)]);
        let graph = RateGraph::build(&rates);
        assert_eq!(graph.rate("USD", "NEG"), Some(-4.0));
        assert_eq!(graph.rate("NEG", "USD"), Some(-0.25));
    }

    #[test]
    fn test_self_loop_recorded_as_given() {
        let rates = RateSet::from(vec![Rate::new("USD", "USD", 2.0)]);
        let graph = RateGraph::build(&rates);
        assert_eq!(graph.rate("USD", "USD"), Some(2.0));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_try_build_rejects_degenerate_rates() {
        let rates = RateSet::from(vec![
            Rate::new("USD", "EUR", 0.9),
            Rate::new("EUR", "JPY", 0.0),
        ]);
        assert!(matches!(
            RateGraph::try_build(&rates),
            Err(TradeError::InvalidRate { .. })
        ));

        let graph = RateGraph::try_build(&sample_rates()).unwrap();
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_neighbors_are_sorted() {
        let rates = RateSet::from(vec![
            Rate::new("USD", "JPY", 150.0),
            Rate::new("USD", "CHF", 0.9),
            Rate::new("USD", "EUR", 0.92),
        ]);
        let graph = RateGraph::build(&rates);
        let neighbors: Vec<&str> = graph
            .neighbors("USD")
            .unwrap()
            .keys()
            .map(|c| c.as_str())
            .collect();
        assert_eq!(neighbors, vec!["CHF", "EUR", "JPY"]);
    }
}
