//! Exchange rate list decoding
//!
//! Two formats are understood:
//!
//! - XML: `<rates><rate><from>AUD</from><to>CAD</to><conversion>1.0079</conversion></rate></rates>`
//!   (`from`, `to` and `conversion` may also be attributes of `<rate>`)
//! - CSV: `from,to,conversion` rows, optional header, `#` comments

use crate::currency::{Rate, RateSet};
use crate::error::{Result, TradeError};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RateDocument {
    #[serde(rename = "rate", default)]
    rates: Vec<RateElement>,
}

#[derive(Debug, Deserialize)]
struct RateElement {
    #[serde(alias = "@from")]
    from: String,
    #[serde(alias = "@to")]
    to: String,
    #[serde(alias = "@conversion")]
    conversion: f64,
}

impl From<RateElement> for Rate {
    fn from(element: RateElement) -> Self {
        Rate::new(element.from.trim(), element.to.trim(), element.conversion)
    }
}

/// Decode an XML rate document
pub fn parse_rates_xml(xml: &str) -> Result<RateSet> {
    let document: RateDocument = quick_xml::de::from_str(xml)?;
    Ok(document.rates.into_iter().map(Rate::from).collect())
}

/// Decode CSV `from,to,conversion` rows
pub fn parse_rates_csv(data: &str) -> Result<RateSet> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(data.as_bytes());

    let mut rates = RateSet::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record?;
        if index == 0 && record.get(0).is_some_and(|f| f.eq_ignore_ascii_case("from")) {
            continue;
        }

        if record.len() != 3 {
            return Err(TradeError::ParseError(format!(
                "Invalid rate row {}: expected 3 columns, got {}",
                index + 1,
                record.len()
            )));
        }

        let conversion: f64 = record[2].parse().map_err(|e| {
            TradeError::ParseError(format!("Invalid conversion at row {}: {}", index + 1, e))
        })?;
        rates.push(Rate::new(&record[0], &record[1], conversion));
    }

    Ok(rates)
}

/// Load a rate file, choosing the decoder by extension (`.csv`, otherwise XML)
pub fn load_rates(path: &Path) -> Result<RateSet> {
    let contents = fs::read_to_string(path)?;
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let rates = if is_csv {
        parse_rates_csv(&contents)?
    } else {
        parse_rates_xml(&contents)?
    };

    log::info!("Loaded {} rates from {}", rates.len(), path.display());
    Ok(rates)
}
