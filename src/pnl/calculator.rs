use crate::instrument::{lookup, Lookup};
use crate::pnl::side::Side;

//price multiplier applied to a symbol's price moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Multiplier {
    //catalogued futures contract, carries its point value
    Contract(f64),
    //uncatalogued symbol, one currency unit per point
    Fallback,
}

impl Multiplier {
    pub fn value(&self) -> f64 {
        match self {
            Multiplier::Contract(point_value) => *point_value,
            Multiplier::Fallback => 1.0,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Multiplier::Fallback)
    }
}

//resolves the pnl multiplier for a symbol
pub fn multiplier_for(symbol: &str) -> Multiplier {
    match lookup(symbol) {
        Lookup::Found(spec) => Multiplier::Contract(spec.point_value),
        Lookup::NotFound => Multiplier::Fallback,
    }
}

//gross profit or loss of a closed position, commission is never applied
//inputs are not range checked
pub fn calculate_pnl(
    symbol: &str,
    entry_price: f64,
    exit_price: f64,
    quantity: u32,
    side: Side,
) -> f64 {
    let price_diff = side.price_diff(entry_price, exit_price);
    price_diff * multiplier_for(symbol).value() * quantity as f64
}

//percentage move in the position's favour
pub fn percentage_gain(entry_price: f64, exit_price: f64, side: Side) -> f64 {
    side.price_diff(entry_price, exit_price) / entry_price * 100.0
}
