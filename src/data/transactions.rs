//! Transaction record sources
//!
//! A [`RecordSource`] yields raw rows of string fields. End of input and read
//! faults are distinct outcomes: `Ok(None)` ends the stream, `Err` is a fault
//! and is propagated to the caller. Undecodable rows are data, not faults.

use crate::error::Result;
use crate::transaction::Transaction;
use csv::{ByteRecord, ReaderBuilder};
use std::collections::VecDeque;
use std::fs::File;
use std::io;
use std::path::Path;

/// Stream of raw transaction records
pub trait RecordSource {
    /// `Ok(Some(fields))` for a record, `Ok(None)` at end of stream
    fn read_record(&mut self) -> Result<Option<Vec<String>>>;
}

/// Headerless CSV rows of `store,sku,"<value> <unit>"`
pub struct CsvRecordSource<R> {
    reader: csv::Reader<R>,
    record: ByteRecord,
}

impl<R: io::Read> CsvRecordSource<R> {
    pub fn new(rdr: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(rdr);

        Self {
            reader,
            record: ByteRecord::new(),
        }
    }
}

impl<R> CsvRecordSource<R> {
    /// Line of the most recently read record
    fn line(&self) -> Option<u64> {
        self.record.position().map(|pos| pos.line())
    }
}

impl CsvRecordSource<File> {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: io::Read> RecordSource for CsvRecordSource<R> {
    fn read_record(&mut self) -> Result<Option<Vec<String>>> {
        if !self.reader.read_byte_record(&mut self.record)? {
            return Ok(None);
        }

        let fields: std::result::Result<Vec<String>, _> = self
            .record
            .iter()
            .map(|field| std::str::from_utf8(field).map(str::to_string))
            .collect();

        match fields {
            Ok(fields) => Ok(Some(fields)),
            Err(e) => {
                // An empty record is always skipped by the parser
                log::debug!("Record at line {:?} is not UTF-8: {}", self.line(), e);
                Ok(Some(Vec::new()))
            }
        }
    }
}

/// Records held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordSource {
    records: VecDeque<Vec<String>>,
}

impl MemoryRecordSource {
    pub fn new(records: Vec<Vec<String>>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Build from borrowed rows, e.g. `&[&["store", "sku", "1 USD"]]`
    pub fn from_rows<S: AsRef<str>>(rows: &[&[S]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|f| f.as_ref().to_string()).collect())
                .collect(),
        )
    }
}

impl RecordSource for MemoryRecordSource {
    fn read_record(&mut self) -> Result<Option<Vec<String>>> {
        Ok(self.records.pop_front())
    }
}

/// Drain `source` into transactions.
///
/// Records with fewer than three fields, or whose cost field is not
/// `"<value> <unit>"`, are skipped. A read fault aborts with the error.
pub fn parse_transactions<S: RecordSource + ?Sized>(source: &mut S) -> Result<Vec<Transaction>> {
    let mut txns = Vec::new();
    let mut skipped = 0usize;

    while let Some(record) = source.read_record()? {
        match Transaction::from_record(record.as_slice()) {
            Ok(txn) => txns.push(txn),
            Err(e) => {
                log::debug!("Skipping record {:?}: {}", record, e);
                skipped += 1;
            }
        }
    }

    log::info!("Parsed {} transactions ({} records skipped)", txns.len(), skipped);
    Ok(txns)
}

/// Parse the transaction CSV file at `path`
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let mut source = CsvRecordSource::from_path(path)?;
    parse_transactions(&mut source)
}
