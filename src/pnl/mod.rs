pub mod calculator;
pub mod side;

pub use crate::instrument::get_contract_specs;
pub use calculator::{calculate_pnl, multiplier_for, percentage_gain, Multiplier};
pub use side::Side;
