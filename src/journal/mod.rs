pub mod account;
pub mod store;
pub mod trade;

pub use account::{reconcile, BalanceBreakdown, Transaction, TransactionKind};
pub use store::{load_trades, load_transactions, save_trades};
pub use trade::{TradeInput, TradeOutcome, TradeRecord, TradeSource};
