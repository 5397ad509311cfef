//a Rust-based trading journal core for futures contracts

pub mod config;
pub mod error;
pub mod import;
pub mod instrument;
pub mod journal;
pub mod metrics;
pub mod pnl;

pub use error::{JournalError, Result};

//prelude module for convenient imports
pub mod prelude {
    pub use crate::config::JournalConfig;
    pub use crate::error::{JournalError, Result};
    pub use crate::import::{
        import_orders, load_orders, match_orders, ImportOutcome, OrderRow, OrderSide,
    };
    pub use crate::instrument::{
        all_contracts, get_contract_specs, lookup, ContractSpec, Exposure, Lookup,
    };
    pub use crate::journal::{
        load_trades, load_transactions, reconcile, save_trades, BalanceBreakdown, TradeInput,
        TradeOutcome, TradeRecord, TradeSource, Transaction, TransactionKind,
    };
    pub use crate::metrics::{SymbolSummary, TradeSummary};
    pub use crate::pnl::{calculate_pnl, multiplier_for, percentage_gain, Multiplier, Side};
}
