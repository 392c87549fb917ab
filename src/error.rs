//! Error types for fx_sales

use thiserror::Error;

/// Main error type for fx_sales
#[derive(Error, Debug)]
pub enum TradeError {
    #[error("Invalid rate {from}->{to}: conversion {conversion} must be positive and finite")]
    InvalidRate {
        from: String,
        to: String,
        conversion: f64,
    },

    #[error("No conversion path from {from} to {to}")]
    NoConversionPath { from: String, to: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::DeError),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for fx_sales operations
pub type Result<T> = std::result::Result<T, TradeError>;
