pub mod matcher;
pub mod orders;

pub use matcher::{match_orders, ImportOutcome};
pub use orders::{load_orders, OrderRow, OrderSide};

use crate::error::Result;
use std::path::Path;

//loads an order file and pairs it into journal trades
pub fn import_orders<P: AsRef<Path>>(path: P, first_id: u64) -> Result<ImportOutcome> {
    let orders = load_orders(path)?;
    Ok(match_orders(&orders, first_id))
}
