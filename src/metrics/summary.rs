use crate::journal::TradeRecord;
use indexmap::IndexMap;
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use statrs::statistics::Statistics;

//performance figures over a set of closed trades, net of commission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeSummary {
    pub num_trades: usize,
    pub num_winning_trades: usize,
    pub num_losing_trades: usize,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub total_commission: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub largest_win: f64,
    pub largest_loss: f64,
    pub profit_factor: f64,
    pub mean_pnl: f64,
    pub pnl_std_dev: f64,
}

//summary for one symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolSummary {
    pub symbol: String,
    pub summary: TradeSummary,
}

impl TradeSummary {
    //calculates summary figures from journal trades
    //net pnl is re-evaluated from the trade fields, the stored column is ignored
    pub fn from_trades(trades: &[TradeRecord]) -> Self {
        let pnls: Vec<f64> = trades.iter().map(|t| t.input().evaluate().net_pnl).collect();
        let total_commission = trades.iter().map(|t| t.commission).sum();
        Self::from_pnls(&pnls, total_commission)
    }

    //calculates one summary per symbol in first-seen order
    pub fn per_symbol(trades: &[TradeRecord]) -> Vec<SymbolSummary> {
        let mut groups: IndexMap<&str, Vec<TradeRecord>> = IndexMap::new();
        for trade in trades {
            groups
                .entry(trade.symbol.as_str())
                .or_default()
                .push(trade.clone());
        }

        groups
            .into_iter()
            .map(|(symbol, group)| SymbolSummary {
                symbol: symbol.to_string(),
                summary: TradeSummary::from_trades(&group),
            })
            .collect()
    }

    fn from_pnls(pnls: &[f64], total_commission: f64) -> Self {
        let winning: Vec<f64> = pnls.iter().filter(|&&pnl| pnl > 0.0).copied().collect();
        let losing: Vec<f64> = pnls.iter().filter(|&&pnl| pnl < 0.0).copied().collect();

        let total = pnls.len();
        let num_winning = winning.len();
        let num_losing = losing.len();

        let win_rate = if total > 0 {
            num_winning as f64 / total as f64
        } else {
            0.0
        };

        let avg_win = if num_winning > 0 {
            winning.iter().sum::<f64>() / num_winning as f64
        } else {
            0.0
        };

        let avg_loss = if num_losing > 0 {
            losing.iter().sum::<f64>() / num_losing as f64
        } else {
            0.0
        };

        let total_wins: f64 = winning.iter().sum();
        let total_losses: f64 = losing.iter().sum::<f64>().abs();

        let profit_factor = if total_losses > 0.0 {
            total_wins / total_losses
        } else if total_wins > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };

        let largest_win = winning.iter().fold(0.0f64, |a, &b| a.max(b));
        let largest_loss = losing.iter().fold(0.0f64, |a, &b| a.min(b));

        let mean_pnl = if total > 0 { pnls.mean() } else { 0.0 };

        //sample deviation needs two points
        let pnl_std_dev = if total > 1 { pnls.std_dev() } else { 0.0 };

        TradeSummary {
            num_trades: total,
            num_winning_trades: num_winning,
            num_losing_trades: num_losing,
            win_rate,
            total_pnl: pnls.iter().sum(),
            total_commission,
            avg_win,
            avg_loss,
            largest_win,
            largest_loss,
            profit_factor,
            mean_pnl,
            pnl_std_dev,
        }
    }

    //builds the metrics table
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();

        table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

        let rows = [
            ("Number of Trades", format!("{}", self.num_trades)),
            ("Winning Trades", format!("{}", self.num_winning_trades)),
            ("Losing Trades", format!("{}", self.num_losing_trades)),
            ("Win Rate", format!("{:.2}%", self.win_rate * 100.0)),
            ("Net P&L", format!("${:.2}", self.total_pnl)),
            ("Commission", format!("${:.2}", self.total_commission)),
            ("Avg Win", format!("${:.2}", self.avg_win)),
            ("Avg Loss", format!("${:.2}", self.avg_loss)),
            ("Largest Win", format!("${:.2}", self.largest_win)),
            ("Largest Loss", format!("${:.2}", self.largest_loss)),
            ("Profit Factor", format!("{:.3}", self.profit_factor)),
            ("Mean P&L", format!("${:.2}", self.mean_pnl)),
            ("P&L Std Dev", format!("${:.2}", self.pnl_std_dev)),
        ];

        for (label, value) in rows {
            table.add_row(Row::new(vec![Cell::new(label), Cell::new(&value)]));
        }

        table
    }

    //prints metrics in a formatted table
    pub fn pretty_print_table(&self) {
        self.to_table().printstd();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{reconcile, TradeInput, TradeSource};
    use crate::pnl::Side;
    use chrono::{TimeZone, Utc};

    fn record(id: u64, input: TradeInput) -> TradeRecord {
        let at = Utc.with_ymd_and_hms(2024, 6, 3, 15, 0, 0).unwrap();
        TradeRecord::new(id, &input, at, at, TradeSource::Manual)
    }

    fn sample() -> Vec<TradeRecord> {
        vec![
            record(1, TradeInput::new("ES", 4500.0, 4510.0, 1, Side::Long, 0.0)),
            record(2, TradeInput::new("ES", 4500.0, 4496.0, 1, Side::Long, 0.0)),
            record(3, TradeInput::new("MGC", 2000.0, 1990.0, 3, Side::Short, 0.0)),
            record(4, TradeInput::new("MGC", 2000.0, 2000.0, 1, Side::Long, 0.0)),
        ]
    }

    #[test]
    fn summarises_wins_and_losses() {
        let summary = TradeSummary::from_trades(&sample());

        assert_eq!(summary.num_trades, 4);
        assert_eq!(summary.num_winning_trades, 2);
        assert_eq!(summary.num_losing_trades, 1);
        assert_eq!(summary.win_rate, 0.5);
        assert_eq!(summary.total_pnl, 600.0);
        assert_eq!(summary.avg_win, 400.0);
        assert_eq!(summary.avg_loss, -200.0);
        assert_eq!(summary.largest_win, 500.0);
        assert_eq!(summary.largest_loss, -200.0);
        assert_eq!(summary.profit_factor, 4.0);
        assert_eq!(summary.mean_pnl, 150.0);
        assert!(summary.pnl_std_dev > 0.0);
    }

    #[test]
    fn empty_and_single_trade_sets_are_finite() {
        let empty = TradeSummary::from_trades(&[]);
        assert_eq!(empty.num_trades, 0);
        assert_eq!(empty.profit_factor, 0.0);
        assert_eq!(empty.mean_pnl, 0.0);

        let single = TradeSummary::from_trades(&sample()[..1]);
        assert_eq!(single.pnl_std_dev, 0.0);
        assert!(single.profit_factor.is_infinite());
    }

    #[test]
    fn stale_stored_pnl_matches_reconciliation() {
        let mut stale = record(1, TradeInput::new("NQ", 15000.0, 15010.0, 1, Side::Long, 2.0));
        stale.pnl = 10.0;
        let trades = vec![stale];

        let summary = TradeSummary::from_trades(&trades);
        assert_eq!(summary.total_pnl, 198.0);
        assert_eq!(summary.total_pnl, reconcile(0.0, &trades, &[]).trading_pnl);
        assert_eq!(summary.largest_win, 198.0);
    }

    #[test]
    fn groups_by_symbol_in_first_seen_order() {
        let groups = TradeSummary::per_symbol(&sample());
        let symbols: Vec<&str> = groups.iter().map(|g| g.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["ES", "MGC"]);
        assert_eq!(groups[0].summary.total_pnl, 300.0);
        assert_eq!(groups[1].summary.num_trades, 2);
    }
}
