//! # fx_sales
//!
//! Totals the sales of one product across stores that record prices in
//! different currencies.
//!
//! Exchange rates form a graph of currencies. Conversions with no direct
//! rate are resolved by chaining rates along a path through the graph, with
//! inverse rates synthesized for every rate given.
//!
//! ## Example
//!
//! ```rust
//! use fx_sales::prelude::*;
//!
//! let rates = RateSet::from(vec![
//!     Rate::new("USD", "EUR", 0.9),
//!     Rate::new("EUR", "JPY", 160.0),
//! ]);
//! let txns = vec![
//!     Transaction::new("Yonkers", "DM1182", Amount::new(100.0, "USD")),
//!     Transaction::new("Nashua", "DM1182", Amount::new(1000.0, "JPY")),
//! ];
//!
//! let total = sales_total("DM1182", "JPY", &rates, &txns);
//! assert!((total - 15400.0).abs() < 1e-6);
//! ```

pub mod config;
pub mod currency;
pub mod data;
pub mod error;
pub mod fx;
pub mod sales;
pub mod transaction;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::currency::{Rate, RateSet};
    pub use crate::error::{Result, TradeError};
    pub use crate::fx::{convert, resolve, ConversionPath, Converter, RateGraph, Resolver};
    pub use crate::sales::{sales_total, summarize, SalesSummary};
    pub use crate::transaction::Transaction;
    pub use crate::types::*;
}
