use crate::instrument::contract_spec::ContractSpec;
use indexmap::IndexMap;
use std::sync::LazyLock;

//exchange-published contract terms, reproduced verbatim
const CONTRACTS: [ContractSpec; 14] = [
    ContractSpec::new("ES", "E-mini S&P 500", "CME", 0.25, 12.50, 50.0, 12650.0, 11500.0),
    ContractSpec::new("MES", "Micro E-mini S&P 500", "CME", 0.25, 1.25, 5.0, 1265.0, 1150.0),
    ContractSpec::new("NQ", "E-mini Nasdaq-100", "CME", 0.25, 5.00, 20.0, 17600.0, 16000.0),
    ContractSpec::new("MNQ", "Micro E-mini Nasdaq-100", "CME", 0.25, 0.50, 2.0, 1760.0, 1600.0),
    ContractSpec::new("RTY", "E-mini Russell 2000", "CME", 0.10, 5.00, 50.0, 6600.0, 6000.0),
    ContractSpec::new("YM", "E-mini Dow", "CBOT", 1.00, 5.00, 5.0, 8800.0, 8000.0),
    ContractSpec::new("CL", "Crude Oil", "NYMEX", 0.01, 10.00, 1000.0, 6600.0, 6000.0),
    ContractSpec::new("MCL", "Micro WTI Crude Oil", "NYMEX", 0.01, 1.00, 100.0, 660.0, 600.0),
    ContractSpec::new("GC", "Gold", "COMEX", 0.10, 10.00, 100.0, 9900.0, 9000.0),
    ContractSpec::new("MGC", "Micro Gold", "COMEX", 0.10, 1.00, 10.0, 990.0, 900.0),
    ContractSpec::new("6E", "Euro FX", "CME", 0.00005, 6.25, 125000.0, 2420.0, 2200.0),
    ContractSpec::new("NG", "Natural Gas", "NYMEX", 0.001, 10.00, 10000.0, 4400.0, 4000.0),
    ContractSpec::new("ZN", "10-Year T-Note", "CBOT", 0.015625, 15.625, 1000.0, 2090.0, 1900.0),
    ContractSpec::new("ZB", "30-Year T-Bond", "CBOT", 0.03125, 31.25, 1000.0, 4180.0, 3800.0),
];

static REGISTRY: LazyLock<IndexMap<&'static str, ContractSpec>> = LazyLock::new(|| {
    CONTRACTS
        .iter()
        .map(|spec| (spec.symbol, spec.clone()))
        .collect()
});

//result of a registry lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    Found(&'static ContractSpec),
    NotFound,
}

impl Lookup {
    pub fn spec(self) -> Option<&'static ContractSpec> {
        match self {
            Lookup::Found(spec) => Some(spec),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

//looks up a contract by symbol, case-insensitively
pub fn lookup(symbol: &str) -> Lookup {
    let key = symbol.to_uppercase();
    match REGISTRY.get(key.as_str()) {
        Some(spec) => Lookup::Found(spec),
        None => Lookup::NotFound,
    }
}

//same lookup as `lookup`, for display next to a symbol field
pub fn get_contract_specs(symbol: &str) -> Option<&'static ContractSpec> {
    lookup(symbol).spec()
}

//all catalogued contracts in table order
pub fn all_contracts() -> impl Iterator<Item = &'static ContractSpec> {
    REGISTRY.values()
}
