use crate::error::{JournalError, Result};
use crate::journal::account::Transaction;
use crate::journal::trade::TradeRecord;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

//file line where a record starts, quoted fields may span several lines
pub(crate) fn record_line(record: &StringRecord) -> usize {
    record.position().map(|p| p.line() as usize).unwrap_or_default()
}

//reads every row of a headed csv file, errors carry the file line
fn load_rows<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut raw = StringRecord::new();
    let mut rows = Vec::new();
    while reader.read_record(&mut raw)? {
        let row: T = raw
            .deserialize(Some(&headers))
            .map_err(|e| JournalError::InvalidRecord {
                line: record_line(&raw),
                reason: e.to_string(),
            })?;
        rows.push(row);
    }

    debug!(path = %path.display(), rows = rows.len(), "loaded csv");
    Ok(rows)
}

//loads journal trades from a csv file
pub fn load_trades<P: AsRef<Path>>(path: P) -> Result<Vec<TradeRecord>> {
    load_rows(path)
}

//loads deposits and withdrawals from a csv file
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>> {
    load_rows(path)
}

//writes journal trades to a csv file with a header row
pub fn save_trades<P: AsRef<Path>>(trades: &[TradeRecord], path: P) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    for trade in trades {
        writer.serialize(trade)?;
    }
    writer.flush()?;
    Ok(())
}
