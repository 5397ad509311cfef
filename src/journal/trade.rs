use crate::pnl::{calculate_pnl, percentage_gain, Side};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//raw trade fields as captured by the entry form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInput {
    pub symbol: String,
    pub entry_price: f64,
    pub exit_price: f64,
    pub quantity: u32,
    pub side: Side,
    pub commission: f64,
}

//evaluated figures for one trade
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradeOutcome {
    pub gross_pnl: f64,
    pub commission: f64,
    pub net_pnl: f64,
    pub percentage_gain: f64,
}

impl TradeInput {
    pub fn new(
        symbol: impl Into<String>,
        entry_price: f64,
        exit_price: f64,
        quantity: u32,
        side: Side,
        commission: f64,
    ) -> Self {
        TradeInput {
            symbol: symbol.into(),
            entry_price,
            exit_price,
            quantity,
            side,
            commission,
        }
    }

    //gross pnl from the calculator
    pub fn gross_pnl(&self) -> f64 {
        calculate_pnl(
            &self.symbol,
            self.entry_price,
            self.exit_price,
            self.quantity,
            self.side,
        )
    }

    //evaluates the trade, every surface goes through here
    pub fn evaluate(&self) -> TradeOutcome {
        let gross_pnl = self.gross_pnl();
        TradeOutcome {
            gross_pnl,
            commission: self.commission,
            net_pnl: gross_pnl - self.commission,
            percentage_gain: percentage_gain(self.entry_price, self.exit_price, self.side),
        }
    }
}

//where a journal entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSource {
    Manual,
    CsvImport,
}

//a closed trade as stored in the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: u64,
    pub opened_at: DateTime<Utc>,
    pub closed_at: DateTime<Utc>,
    pub symbol: String,
    pub side: Side,
    pub entry_price: f64,
    pub exit_price: f64,
    pub quantity: u32,
    pub commission: f64,

    //net of commission
    pub pnl: f64,
    pub percentage_gain: f64,
    pub source: TradeSource,
}

impl TradeRecord {
    //creates a record from form input, storing the evaluated figures
    pub fn new(
        id: u64,
        input: &TradeInput,
        opened_at: DateTime<Utc>,
        closed_at: DateTime<Utc>,
        source: TradeSource,
    ) -> Self {
        let outcome = input.evaluate();
        TradeRecord {
            id,
            opened_at,
            closed_at,
            symbol: input.symbol.to_uppercase(),
            side: input.side,
            entry_price: input.entry_price,
            exit_price: input.exit_price,
            quantity: input.quantity,
            commission: input.commission,
            pnl: outcome.net_pnl,
            percentage_gain: outcome.percentage_gain,
            source,
        }
    }

    //the calculator fields of this record
    pub fn input(&self) -> TradeInput {
        TradeInput::new(
            self.symbol.clone(),
            self.entry_price,
            self.exit_price,
            self.quantity,
            self.side,
            self.commission,
        )
    }

    //re-evaluates stored figures after an edit in place
    pub fn recompute(&self) -> TradeRecord {
        let outcome = self.input().evaluate();
        TradeRecord {
            pnl: outcome.net_pnl,
            percentage_gain: outcome.percentage_gain,
            ..self.clone()
        }
    }

    pub fn is_winner(&self) -> bool {
        self.pnl > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, hour, 0, 0).unwrap()
    }

    #[test]
    fn evaluate_subtracts_commission_from_gross() {
        let input = TradeInput::new("ES", 4500.0, 4510.0, 2, Side::Long, 4.5);
        let outcome = input.evaluate();
        assert_eq!(outcome.gross_pnl, 1000.0);
        assert_eq!(outcome.commission, 4.5);
        assert_eq!(outcome.net_pnl, 995.5);
    }

    #[test]
    fn short_percentage_gain_is_inverted() {
        let input = TradeInput::new("MNQ", 18000.0, 17820.0, 1, Side::Short, 0.0);
        let outcome = input.evaluate();
        assert_eq!(outcome.gross_pnl, 360.0);
        assert!((outcome.percentage_gain - 1.0).abs() < 1e-12);
    }

    #[test]
    fn record_stores_net_figures_and_canonical_symbol() {
        let input = TradeInput::new("mgc", 2000.0, 1990.0, 2, Side::Short, 3.0);
        let record = TradeRecord::new(7, &input, at(9), at(11), TradeSource::Manual);
        assert_eq!(record.symbol, "MGC");
        assert_eq!(record.pnl, 197.0);
        assert!(record.is_winner());
    }

    #[test]
    fn recompute_refreshes_edited_fields() {
        let input = TradeInput::new("CL", 75.0, 76.0, 1, Side::Long, 0.0);
        let mut record = TradeRecord::new(1, &input, at(9), at(10), TradeSource::Manual);
        record.exit_price = 74.5;
        record.commission = 2.0;

        let updated = record.recompute();
        assert_eq!(updated.pnl, -502.0);
        assert_eq!(updated.id, 1);
        assert!(updated.percentage_gain < 0.0);
    }
}
