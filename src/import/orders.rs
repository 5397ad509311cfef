use crate::error::{JournalError, Result};
use crate::journal::store::record_line;
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

//order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    timestamp: String,
    symbol: String,
    side: String,
    quantity: u32,
    price: f64,
}

//one executed broker order from an import file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub side: OrderSide,
    pub quantity: u32,
    pub price: f64,
}

impl OrderRow {
    pub fn new(
        timestamp: DateTime<Utc>,
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: u32,
        price: f64,
    ) -> Self {
        OrderRow {
            timestamp,
            symbol: symbol.into(),
            side,
            quantity,
            price,
        }
    }
}

fn parse_side(value: &str, line: usize) -> Result<OrderSide> {
    match value.trim().to_lowercase().as_str() {
        "buy" | "b" => Ok(OrderSide::Buy),
        "sell" | "s" => Ok(OrderSide::Sell),
        _ => Err(JournalError::InvalidRecord {
            line,
            reason: format!("unknown order side '{}'", value),
        }),
    }
}

//loads executed orders from a csv file
//header: timestamp,symbol,side,quantity,price
pub fn load_orders<P: AsRef<Path>>(path: P) -> Result<Vec<OrderRow>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut raw = StringRecord::new();
    let mut orders = Vec::new();

    while reader.read_record(&mut raw)? {
        let line = record_line(&raw);
        let record: CsvRecord = raw
            .deserialize(Some(&headers))
            .map_err(|e| JournalError::InvalidRecord {
                line,
                reason: e.to_string(),
            })?;

        let timestamp = DateTime::parse_from_rfc3339(&record.timestamp)
            .map_err(|_| JournalError::InvalidTimestamp {
                value: record.timestamp.clone(),
                line,
            })?
            .with_timezone(&Utc);

        let side = parse_side(&record.side, line)?;

        orders.push(OrderRow::new(
            timestamp,
            record.symbol.to_uppercase(),
            side,
            record.quantity,
            record.price,
        ));
    }

    //stable sort keeps file order for equal timestamps
    orders.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    debug!(path = %path.display(), orders = orders.len(), "loaded orders");
    Ok(orders)
}
