pub mod summary;

pub use summary::{SymbolSummary, TradeSummary};
