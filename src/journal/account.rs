use crate::journal::trade::TradeRecord;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

//cash movement kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

//a deposit or withdrawal against the trading account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub timestamp: DateTime<Utc>,
    pub kind: TransactionKind,

    //always positive, kind carries the direction
    pub amount: f64,
}

//account balance split into its sources
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceBreakdown {
    pub starting_balance: f64,
    pub deposits: f64,
    pub withdrawals: f64,
    pub gross_pnl: f64,
    pub commissions: f64,

    //gross pnl less commissions
    pub trading_pnl: f64,
    pub current_balance: f64,
    pub closed_trades: usize,
}

//recomputes every trade through the calculator and totals the account
//stored trade pnl is ignored
pub fn reconcile(
    starting_balance: f64,
    trades: &[TradeRecord],
    transactions: &[Transaction],
) -> BalanceBreakdown {
    let gross: Vec<f64> = trades.par_iter().map(|t| t.input().gross_pnl()).collect();

    //summed in input order so every run yields the same total
    let gross_pnl: f64 = gross.iter().sum();
    let commissions: f64 = trades.iter().map(|t| t.commission).sum();
    let trading_pnl = gross_pnl - commissions;

    let mut deposits = 0.0;
    let mut withdrawals = 0.0;
    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Deposit => deposits += transaction.amount,
            TransactionKind::Withdrawal => withdrawals += transaction.amount,
        }
    }

    let current_balance = starting_balance + deposits - withdrawals + trading_pnl;

    info!(
        trades = trades.len(),
        transactions = transactions.len(),
        trading_pnl,
        current_balance,
        "reconciled account"
    );

    BalanceBreakdown {
        starting_balance,
        deposits,
        withdrawals,
        gross_pnl,
        commissions,
        trading_pnl,
        current_balance,
        closed_trades: trades.len(),
    }
}
