use serde::Serialize;

//display figures for a position in one contract
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Exposure {
    pub ticks: f64,
    pub notional_value: f64,
    pub initial_margin: f64,
    pub maintenance_margin: f64,
}

//trading specification of one exchange-listed futures contract
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractSpec {
    //canonical upper-case ticker (eg ES, MES, MGC)
    pub symbol: &'static str,

    //human readable contract name
    pub name: &'static str,

    //listing exchange, display only
    pub exchange: &'static str,

    //minimum price fluctuation
    pub tick_size: f64,

    //dollar value of one tick
    pub tick_value: f64,

    //dollar value of one full point move, the pnl multiplier
    pub point_value: f64,

    //initial margin per contract
    pub initial_margin: f64,

    //maintenance margin per contract
    pub maintenance_margin: f64,
}

impl ContractSpec {
    //creates a new contract spec
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        symbol: &'static str,
        name: &'static str,
        exchange: &'static str,
        tick_size: f64,
        tick_value: f64,
        point_value: f64,
        initial_margin: f64,
        maintenance_margin: f64,
    ) -> Self {
        ContractSpec {
            symbol,
            name,
            exchange,
            tick_size,
            tick_value,
            point_value,
            initial_margin,
            maintenance_margin,
        }
    }

    //converts a price difference to ticks
    pub fn price_to_ticks(&self, price_diff: f64) -> f64 {
        price_diff / self.tick_size
    }

    //tick value implied by point value and tick size
    pub fn implied_tick_value(&self) -> f64 {
        self.point_value * self.tick_size
    }

    //calculates the notional value of a position
    pub fn notional_value(&self, price: f64, quantity: u32) -> f64 {
        price * self.point_value * quantity as f64
    }

    //returns the initial margin requirement for a given quantity
    pub fn initial_margin_requirement(&self, quantity: u32) -> f64 {
        self.initial_margin * quantity as f64
    }

    //returns the maintenance margin requirement for a given quantity
    pub fn maintenance_margin_requirement(&self, quantity: u32) -> f64 {
        self.maintenance_margin * quantity as f64
    }

    //tick move, entry notional and margin for a position
    pub fn exposure(&self, entry_price: f64, price_diff: f64, quantity: u32) -> Exposure {
        Exposure {
            ticks: self.price_to_ticks(price_diff),
            notional_value: self.notional_value(entry_price, quantity),
            initial_margin: self.initial_margin_requirement(quantity),
            maintenance_margin: self.maintenance_margin_requirement(quantity),
        }
    }
}
