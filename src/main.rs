use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tradelog::prelude::*;
use tracing::info;

#[derive(Parser)]
#[command(name = "tradelog")]
#[command(about = "A futures trading journal: contract specs, P&L, import and reconciliation", long_about = None)]
struct Cli {
    //journal configuration json file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    //print json instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    //list every catalogued futures contract
    Contracts,

    //show the specification of one symbol
    Spec {
        //ticker (eg es, mgc), case-insensitive
        symbol: String,
    },

    //calculate the p&l of one trade
    Pnl {
        #[arg(long)]
        symbol: String,

        #[arg(long, allow_negative_numbers = true)]
        entry: f64,

        #[arg(long, allow_negative_numbers = true)]
        exit: f64,

        //number of contracts
        #[arg(long, default_value = "1")]
        qty: u32,

        //long or short
        #[arg(long, default_value = "long")]
        side: Side,

        //commission for the round trip (defaults to the configured one)
        #[arg(long)]
        commission: Option<f64>,
    },

    //pair broker orders from a csv file into journal trades
    Import {
        //csv with timestamp,symbol,side,quantity,price
        #[arg(long)]
        orders: PathBuf,

        //write synthesized trades to this csv
        #[arg(long)]
        output: Option<PathBuf>,

        //id of the first synthesized trade
        #[arg(long, default_value = "1")]
        first_id: u64,
    },

    //recompute all trades and break down the account balance
    Reconcile {
        //journal trades csv (defaults to the configured one)
        #[arg(long)]
        trades: Option<PathBuf>,

        //deposits and withdrawals csv (defaults to the configured one)
        #[arg(long)]
        transactions: Option<PathBuf>,

        //starting balance (defaults to the configured one)
        #[arg(long)]
        starting_balance: Option<f64>,
    },

    //performance report over journal trades
    Report {
        //journal trades csv (defaults to the configured one)
        #[arg(long)]
        trades: Option<PathBuf>,

        //one report per symbol
        #[arg(long)]
        by_symbol: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => JournalConfig::from_json_file(path)
            .context(format!("Failed to load config from {:?}", path))?,
        None => JournalConfig::default(),
    };

    match cli.command {
        Commands::Contracts => show_contracts(cli.json)?,
        Commands::Spec { symbol } => show_spec(symbol.trim(), cli.json)?,
        Commands::Pnl {
            symbol,
            entry,
            exit,
            qty,
            side,
            commission,
        } => {
            let commission = commission.unwrap_or(config.default_commission);
            let input = TradeInput::new(symbol.trim(), entry, exit, qty, side, commission);
            show_pnl(&input, &config, cli.json)?;
        }
        Commands::Import {
            orders,
            output,
            first_id,
        } => run_import(&orders, output.as_deref(), first_id, cli.json)?,
        Commands::Reconcile {
            trades,
            transactions,
            starting_balance,
        } => {
            let trades = trades_path(trades, &config)?;
            let transactions = transactions.or_else(|| config.transactions_path.clone());
            let starting_balance = starting_balance.unwrap_or(config.starting_balance);
            run_reconcile(&trades, transactions.as_deref(), starting_balance, &config, cli.json)?;
        }
        Commands::Report { trades, by_symbol } => {
            let trades = trades_path(trades, &config)?;
            run_report(&trades, by_symbol, cli.json)?;
        }
    }

    Ok(())
}

fn trades_path(flag: Option<PathBuf>, config: &JournalConfig) -> Result<PathBuf> {
    flag.or_else(|| config.trades_path.clone())
        .ok_or_else(|| anyhow::anyhow!("--trades required (or set trades_path in the config)"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn spec_row(spec: &ContractSpec) -> Row {
    Row::new(vec![
        Cell::new(spec.symbol),
        Cell::new(spec.name),
        Cell::new(spec.exchange),
        Cell::new(&spec.tick_size.to_string()),
        Cell::new(&format!("${:.2}", spec.tick_value)),
        Cell::new(&format!("${:.2}", spec.point_value)),
        Cell::new(&format!("${:.2}", spec.initial_margin)),
        Cell::new(&format!("${:.2}", spec.maintenance_margin)),
    ])
}

fn spec_table<'a>(specs: impl Iterator<Item = &'a ContractSpec>) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(
        [
            "Symbol",
            "Name",
            "Exchange",
            "Tick Size",
            "Tick Value",
            "Point Value",
            "Initial Margin",
            "Maint. Margin",
        ]
        .iter()
        .copied()
        .map(Cell::new)
        .collect(),
    ));
    for spec in specs {
        table.add_row(spec_row(spec));
    }
    table
}

fn show_contracts(json: bool) -> Result<()> {
    if json {
        let specs: Vec<&ContractSpec> = all_contracts().collect();
        return print_json(&specs);
    }
    spec_table(all_contracts()).printstd();
    Ok(())
}

fn show_spec(symbol: &str, json: bool) -> Result<()> {
    let spec = get_contract_specs(symbol);
    if json {
        return print_json(&spec);
    }
    match spec {
        Some(spec) => spec_table(std::iter::once(spec)).printstd(),
        None => println!(
            "No contract specification for '{}', P&L uses a multiplier of 1",
            symbol
        ),
    }
    Ok(())
}

#[derive(Serialize)]
struct PnlReport<'a> {
    input: &'a TradeInput,
    multiplier: f64,
    catalogued: bool,
    outcome: TradeOutcome,
    exposure: Option<Exposure>,
}

fn show_pnl(input: &TradeInput, config: &JournalConfig, json: bool) -> Result<()> {
    let multiplier = multiplier_for(&input.symbol);
    let outcome = input.evaluate();
    let exposure = get_contract_specs(&input.symbol).map(|spec| {
        spec.exposure(
            input.entry_price,
            input.side.price_diff(input.entry_price, input.exit_price),
            input.quantity,
        )
    });

    if json {
        return print_json(&PnlReport {
            input,
            multiplier: multiplier.value(),
            catalogued: !multiplier.is_fallback(),
            outcome,
            exposure,
        });
    }

    if multiplier.is_fallback() {
        println!(
            "'{}' is not a catalogued contract, using a multiplier of 1",
            input.symbol
        );
    }

    let mut table = Table::new();
    let mut rows = vec![
        ("Symbol", input.symbol.to_uppercase()),
        ("Side", input.side.to_string()),
        ("Quantity", input.quantity.to_string()),
        ("Multiplier", multiplier.value().to_string()),
        ("Gross P&L", format!("{:.2} {}", outcome.gross_pnl, config.currency)),
        ("Commission", format!("{:.2} {}", outcome.commission, config.currency)),
        ("Net P&L", format!("{:.2} {}", outcome.net_pnl, config.currency)),
        ("Gain", format!("{:.3}%", outcome.percentage_gain)),
    ];
    if let Some(exposure) = exposure {
        let currency = &config.currency;
        rows.push(("Ticks", format!("{:.1}", exposure.ticks)));
        rows.push((
            "Entry Notional",
            format!("{:.2} {}", exposure.notional_value, currency),
        ));
        rows.push((
            "Initial Margin",
            format!("{:.2} {}", exposure.initial_margin, currency),
        ));
        rows.push((
            "Maint. Margin",
            format!("{:.2} {}", exposure.maintenance_margin, currency),
        ));
    }
    for (label, value) in rows {
        table.add_row(Row::new(vec![Cell::new(label), Cell::new(&value)]));
    }
    table.printstd();
    Ok(())
}

fn run_import(orders: &Path, output: Option<&Path>, first_id: u64, json: bool) -> Result<()> {
    info!(path = ?orders, "importing orders");
    let outcome = import_orders(orders, first_id)
        .context(format!("Failed to import orders from {:?}", orders))?;

    if let Some(output) = output {
        save_trades(&outcome.trades, output)
            .context(format!("Failed to write trades to {:?}", output))?;
        info!(path = ?output, trades = outcome.trades.len(), "trades saved");
    }

    if json {
        return print_json(&outcome);
    }

    let mut table = Table::new();
    table.add_row(Row::new(
        ["Id", "Symbol", "Qty", "Entry", "Exit", "P&L", "Gain"]
            .iter()
            .copied()
            .map(Cell::new)
            .collect(),
    ));
    for trade in &outcome.trades {
        table.add_row(Row::new(vec![
            Cell::new(&trade.id.to_string()),
            Cell::new(&trade.symbol),
            Cell::new(&trade.quantity.to_string()),
            Cell::new(&trade.entry_price.to_string()),
            Cell::new(&trade.exit_price.to_string()),
            Cell::new(&format!("${:.2}", trade.pnl)),
            Cell::new(&format!("{:.3}%", trade.percentage_gain)),
        ]));
    }
    table.printstd();

    println!(
        "{} trade(s), {} unmatched buy(s), {} orphan sell(s)",
        outcome.trades.len(),
        outcome.unmatched_buys.len(),
        outcome.orphan_sells.len()
    );
    Ok(())
}

fn run_reconcile(
    trades: &Path,
    transactions: Option<&Path>,
    starting_balance: f64,
    config: &JournalConfig,
    json: bool,
) -> Result<()> {
    let trades =
        load_trades(trades).context(format!("Failed to load trades from {:?}", trades))?;
    let transactions = match transactions {
        Some(path) => load_transactions(path)
            .context(format!("Failed to load transactions from {:?}", path))?,
        None => Vec::new(),
    };

    let breakdown = reconcile(starting_balance, &trades, &transactions);

    if json {
        return print_json(&breakdown);
    }

    let currency = &config.currency;
    let mut table = Table::new();
    let rows = [
        ("Starting Balance", breakdown.starting_balance),
        ("Deposits", breakdown.deposits),
        ("Withdrawals", -breakdown.withdrawals),
        ("Gross P&L", breakdown.gross_pnl),
        ("Commissions", -breakdown.commissions),
        ("Trading P&L", breakdown.trading_pnl),
        ("Current Balance", breakdown.current_balance),
    ];
    for (label, value) in rows {
        table.add_row(Row::new(vec![
            Cell::new(label),
            Cell::new(&format!("{:.2} {}", value, currency)),
        ]));
    }
    table.printstd();
    println!("{} closed trade(s)", breakdown.closed_trades);
    Ok(())
}

fn run_report(trades: &Path, by_symbol: bool, json: bool) -> Result<()> {
    let trades =
        load_trades(trades).context(format!("Failed to load trades from {:?}", trades))?;

    if by_symbol {
        let groups = TradeSummary::per_symbol(&trades);
        if json {
            return print_json(&groups);
        }
        for group in groups {
            println!("\n{}", group.symbol);
            group.summary.pretty_print_table();
        }
        return Ok(());
    }

    let summary = TradeSummary::from_trades(&trades);
    if json {
        return print_json(&summary);
    }
    summary.pretty_print_table();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pnl_accepts_negative_prices() {
        let cli = Cli::try_parse_from([
            "tradelog", "pnl", "--symbol", "ES", "--entry", "-5", "--exit", "-2.5", "--side", "short",
        ])
        .unwrap();

        match cli.command {
            Commands::Pnl {
                entry, exit, side, ..
            } => {
                assert_eq!(entry, -5.0);
                assert_eq!(exit, -2.5);
                assert_eq!(side, Side::Short);
            }
            _ => panic!("expected the pnl subcommand"),
        }
    }
}
