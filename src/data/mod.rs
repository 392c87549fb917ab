//! Input decoding for rate lists and transaction records

pub mod rates;
pub mod transactions;

pub use rates::{load_rates, parse_rates_csv, parse_rates_xml};
pub use transactions::{
    load_transactions, parse_transactions, CsvRecordSource, MemoryRecordSource, RecordSource,
};
