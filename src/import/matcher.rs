use crate::import::orders::{OrderRow, OrderSide};
use crate::journal::{TradeInput, TradeRecord, TradeSource};
use crate::pnl::Side;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

//result of pairing imported orders into round trips
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportOutcome {
    //synthesized long round trips
    pub trades: Vec<TradeRecord>,

    //buy quantity still open at the end of the file
    pub unmatched_buys: Vec<OrderRow>,

    //sell quantity with no open buy to close
    pub orphan_sells: Vec<OrderRow>,
}

//pairs buys with later sells per symbol, oldest buy first
//only long round trips are reconstructed and imported trades carry no commission
pub fn match_orders(orders: &[OrderRow], first_id: u64) -> ImportOutcome {
    let mut open_buys: IndexMap<String, VecDeque<OrderRow>> = IndexMap::new();
    let mut outcome = ImportOutcome::default();
    let mut next_id = first_id;

    for order in orders {
        let symbol = order.symbol.to_uppercase();

        match order.side {
            OrderSide::Buy => {
                if order.quantity > 0 {
                    open_buys.entry(symbol).or_default().push_back(order.clone());
                }
            }
            OrderSide::Sell => {
                let queue = open_buys.entry(symbol.clone()).or_default();
                let mut remaining = order.quantity;

                while remaining > 0 {
                    let Some(buy) = queue.front_mut() else {
                        break;
                    };

                    let matched = remaining.min(buy.quantity);
                    let input = TradeInput::new(
                        symbol.clone(),
                        buy.price,
                        order.price,
                        matched,
                        Side::Long,
                        0.0,
                    );
                    let trade = TradeRecord::new(
                        next_id,
                        &input,
                        buy.timestamp,
                        order.timestamp,
                        TradeSource::CsvImport,
                    );
                    debug!(
                        id = trade.id,
                        symbol = %trade.symbol,
                        quantity = matched,
                        pnl = trade.pnl,
                        "matched round trip"
                    );
                    outcome.trades.push(trade);
                    next_id += 1;

                    buy.quantity -= matched;
                    remaining -= matched;
                    if buy.quantity == 0 {
                        queue.pop_front();
                    }
                }

                if remaining > 0 {
                    warn!(
                        symbol = %symbol,
                        quantity = remaining,
                        timestamp = %order.timestamp,
                        "sell without an open buy, skipped"
                    );
                    let mut orphan = order.clone();
                    orphan.symbol = symbol;
                    orphan.quantity = remaining;
                    outcome.orphan_sells.push(orphan);
                }
            }
        }
    }

    outcome.unmatched_buys = open_buys.into_values().flatten().collect();

    info!(
        trades = outcome.trades.len(),
        unmatched_buys = outcome.unmatched_buys.len(),
        orphan_sells = outcome.orphan_sells.len(),
        "import matched"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 14, 30, 0).unwrap() + Duration::minutes(minutes)
    }

    fn buy(minutes: i64, symbol: &str, quantity: u32, price: f64) -> OrderRow {
        OrderRow::new(t(minutes), symbol, OrderSide::Buy, quantity, price)
    }

    fn sell(minutes: i64, symbol: &str, quantity: u32, price: f64) -> OrderRow {
        OrderRow::new(t(minutes), symbol, OrderSide::Sell, quantity, price)
    }

    #[test]
    fn buy_then_sell_becomes_one_long_trade() {
        let outcome = match_orders(&[buy(0, "ES", 2, 4500.0), sell(5, "ES", 2, 4515.0)], 1);

        assert_eq!(outcome.trades.len(), 1);
        let trade = &outcome.trades[0];
        assert_eq!(trade.side, Side::Long);
        assert_eq!(trade.commission, 0.0);
        assert_eq!(trade.pnl, 1500.0);
        assert_eq!(trade.opened_at, t(0));
        assert_eq!(trade.closed_at, t(5));
        assert_eq!(trade.source, TradeSource::CsvImport);
        assert!(outcome.unmatched_buys.is_empty());
        assert!(outcome.orphan_sells.is_empty());
    }

    #[test]
    fn partial_fills_split_oldest_first() {
        let orders = [
            buy(0, "MES", 1, 5000.0),
            buy(1, "MES", 2, 5010.0),
            sell(2, "MES", 2, 5020.0),
            sell(3, "MES", 1, 5000.0),
        ];
        let outcome = match_orders(&orders, 10);

        let summary: Vec<(u64, f64, u32, f64)> = outcome
            .trades
            .iter()
            .map(|t| (t.id, t.entry_price, t.quantity, t.pnl))
            .collect();
        assert_eq!(
            summary,
            vec![
                (10, 5000.0, 1, 100.0),
                (11, 5010.0, 1, 50.0),
                (12, 5010.0, 1, -50.0),
            ]
        );
    }

    #[test]
    fn symbols_are_matched_independently() {
        let orders = [
            buy(0, "ES", 1, 4500.0),
            buy(1, "nq", 1, 15000.0),
            sell(2, "NQ", 1, 15010.0),
        ];
        let outcome = match_orders(&orders, 1);

        assert_eq!(outcome.trades.len(), 1);
        assert_eq!(outcome.trades[0].symbol, "NQ");
        assert_eq!(outcome.trades[0].pnl, 200.0);
        assert_eq!(outcome.unmatched_buys.len(), 1);
        assert_eq!(outcome.unmatched_buys[0].symbol, "ES");
    }

    #[test]
    fn excess_sell_is_reported_as_orphan() {
        let orders = [
            sell(0, "CL", 1, 75.0),
            buy(1, "CL", 1, 74.0),
            sell(2, "CL", 3, 75.0),
        ];
        let outcome = match_orders(&orders, 1);

        assert_eq!(outcome.trades.len(), 1);
        assert_eq!(outcome.trades[0].pnl, 1000.0);
        let orphaned: Vec<u32> = outcome.orphan_sells.iter().map(|o| o.quantity).collect();
        assert_eq!(orphaned, vec![1, 2]);
    }
}
