//! Currency conversion engine
//!
//! # Components
//!
//! - **graph**: rate adjacency with synthesized inverse edges
//! - **resolver**: cycle-safe multi-hop path search
//! - **convert**: transaction conversion into a target currency
//!
//! # Example
//!
//! ```rust
//! use fx_sales::currency::{Rate, RateSet};
//! use fx_sales::fx::{convert, RateGraph};
//! use fx_sales::transaction::Transaction;
//! use fx_sales::types::Amount;
//!
//! let rates = RateSet::from(vec![
//!     Rate::new("USD", "EUR", 0.9),
//!     Rate::new("EUR", "JPY", 160.0),
//! ]);
//! let graph = RateGraph::build(&rates);
//!
//! let txn = Transaction::new("Yonkers", "DM1182", Amount::new(100.0, "USD"));
//! let jpy = convert(&graph, "JPY", &txn);
//! assert!((jpy - 14400.0).abs() < 1e-6);
//! ```

pub mod convert;
pub mod graph;
pub mod resolver;

pub use convert::{convert, Converter};
pub use graph::{Conversions, RateGraph};
pub use resolver::{resolve, ConversionPath, Hop, Resolver};
