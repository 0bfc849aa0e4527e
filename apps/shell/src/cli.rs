use clap::{Parser, Subcommand};
use fintrack_core::{AssetCreate, AssetRead, AssetType, AssetUpdate, Currency};
use rust_decimal::Decimal;

use crate::main_lib::AppState;

#[derive(Debug, Parser)]
#[command(name = "fintrack", version, about = "Manage your asset list")]
pub struct Cli {
    /// Exit right after the command instead of waiting for toasts to expire.
    #[arg(long, global = true)]
    pub no_wait: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all assets
    List,
    /// Show one asset
    Get { id: i64 },
    /// Create an asset
    Create {
        #[arg(long)]
        ticker: String,
        #[arg(long = "type")]
        asset_type: AssetType,
        #[arg(long)]
        price: Decimal,
        #[arg(long, default_value = "EUR")]
        currency: Currency,
    },
    /// Change some fields of an asset
    Update {
        id: i64,
        #[arg(long)]
        ticker: Option<String>,
        #[arg(long = "type")]
        asset_type: Option<AssetType>,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long)]
        currency: Option<Currency>,
    },
    /// Delete an asset
    Delete { id: i64 },
    /// Check that the backend is up
    Health,
}

pub async fn run(state: &AppState, command: Command) -> anyhow::Result<()> {
    let flows = &state.asset_flows;
    match command {
        Command::List => {
            let assets = flows.list().await?;
            print!("{}", format_table(&assets));
        }
        Command::Get { id } => {
            let asset = flows.get(id).await?;
            print!("{}", format_table(std::slice::from_ref(&asset)));
        }
        Command::Create {
            ticker,
            asset_type,
            price,
            currency,
        } => {
            let asset = flows
                .create(AssetCreate {
                    ticker,
                    asset_type,
                    current_price: price,
                    currency,
                })
                .await?;
            print!("{}", format_table(std::slice::from_ref(&asset)));
        }
        Command::Update {
            id,
            ticker,
            asset_type,
            price,
            currency,
        } => {
            let asset = flows
                .update(
                    id,
                    AssetUpdate {
                        ticker,
                        asset_type,
                        current_price: price,
                        currency,
                    },
                )
                .await?;
            print!("{}", format_table(std::slice::from_ref(&asset)));
        }
        Command::Delete { id } => {
            flows.delete(id).await?;
        }
        Command::Health => {
            let status = flows.health().await?;
            println!("backend: {}", status.status);
        }
    }
    Ok(())
}

/// Renders assets as an aligned text table.
pub fn format_table(assets: &[AssetRead]) -> String {
    if assets.is_empty() {
        return "No assets yet. Create one with `fintrack create`.\n".to_string();
    }

    let headers = ["ID", "Ticker", "Type", "Price", "Currency"];
    let rows: Vec<[String; 5]> = assets
        .iter()
        .map(|a| {
            [
                a.id.to_string(),
                a.ticker.clone(),
                a.asset_type.to_string(),
                a.current_price.to_string(),
                a.currency.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: Vec<&str>| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };
    push_line(headers.to_vec());
    for row in &rows {
        push_line(row.iter().map(String::as_str).collect());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_create_command() {
        let cli = Cli::try_parse_from([
            "fintrack", "create", "--ticker", "MSTY", "--type", "etf", "--price", "21.37",
        ])
        .unwrap();
        match cli.command {
            Command::Create {
                ticker,
                asset_type,
                price,
                currency,
            } => {
                assert_eq!(ticker, "MSTY");
                assert_eq!(asset_type, AssetType::Etf);
                assert_eq!(price, dec!(21.37));
                assert_eq!(currency, Currency::Eur);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(!cli.no_wait);
    }

    #[test]
    fn parses_partial_update() {
        let cli =
            Cli::try_parse_from(["fintrack", "update", "3", "--price", "9.5", "--no-wait"]).unwrap();
        match cli.command {
            Command::Update {
                id,
                ticker,
                price,
                ..
            } => {
                assert_eq!(id, 3);
                assert_eq!(ticker, None);
                assert_eq!(price, Some(dec!(9.5)));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(cli.no_wait);
    }

    #[test]
    fn rejects_unknown_asset_type() {
        assert!(Cli::try_parse_from([
            "fintrack", "create", "--ticker", "X", "--type", "bond", "--price", "1",
        ])
        .is_err());
    }

    #[test]
    fn formats_table_with_aligned_columns() {
        let assets = vec![
            AssetRead {
                id: 1,
                ticker: "MSTY".into(),
                asset_type: AssetType::Etf,
                current_price: dec!(21.37),
                currency: Currency::Usd,
            },
            AssetRead {
                id: 12,
                ticker: "BTC".into(),
                asset_type: AssetType::Crypto,
                current_price: dec!(64123.5),
                currency: Currency::Eur,
            },
        ];

        let table = format_table(&assets);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "ID  Ticker  Type    Price    Currency");
        assert_eq!(lines[1], "1   MSTY    ETF     21.37    USD");
        assert_eq!(lines[2], "12  BTC     CRYPTO  64123.5  EUR");
    }

    #[test]
    fn formats_empty_table() {
        assert!(format_table(&[]).starts_with("No assets yet"));
    }
}
