use std::thread;
use tradelog::prelude::*;

#[test]
fn lookup_and_accessor_agree_for_every_contract() {
    for contract in all_contracts() {
        let upper = lookup(contract.symbol);
        let lower = lookup(&contract.symbol.to_lowercase());
        assert_eq!(upper, lower);
        assert_eq!(get_contract_specs(contract.symbol), Some(contract));
        assert_eq!(multiplier_for(contract.symbol), Multiplier::Contract(contract.point_value));
    }
    assert_eq!(lookup("notasymbol"), Lookup::NotFound);
    assert_eq!(get_contract_specs("notasymbol"), None);
}

#[test]
fn documented_examples_hold() {
    assert_eq!(calculate_pnl("ZZZZ", 100.0, 110.0, 3, Side::Long), 30.0);
    assert_eq!(calculate_pnl("ES", 4500.0, 4510.0, 1, Side::Long), 500.0);
    assert_eq!(calculate_pnl("MGC", 2000.0, 1990.0, 2, Side::Short), 200.0);
}

#[test]
fn concurrent_callers_see_identical_results() {
    let expected: Vec<f64> = all_contracts()
        .map(|c| calculate_pnl(c.symbol, 100.0, 101.5, 4, Side::Short))
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                all_contracts()
                    .map(|c| calculate_pnl(&c.symbol.to_lowercase(), 100.0, 101.5, 4, Side::Short))
                    .collect::<Vec<f64>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
