//! Demo 2: Deposit Addresses
//!
//! Showcases: full-access endpoints, per-network deposit addresses
//!
//! Needs COINSPOT_API_KEY and COINSPOT_API_SECRET.
//!
//! Run: cargo run --bin deposit_addresses

use colored::*;
use coinspot_rest::prelude::*;
use tracing_subscriber::EnvFilter;

const COINS: [&str; 5] = ["btc", "eth", "bch", "ltc", "doge"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = Coinspot::new(
        std::env::var("COINSPOT_API_KEY").ok(),
        std::env::var("COINSPOT_API_SECRET").ok(),
    )?;

    let prices = client.latest_prices().await?;
    for coin in ["btc", "eth"] {
        if let Some(price) = prices.get(coin) {
            println!("{} {} last {}", "✓".green(), coin.to_uppercase(), price.last);
        }
    }
    println!();

    if !client.is_authenticated() {
        println!(
            "{} Set COINSPOT_API_KEY and COINSPOT_API_SECRET to list deposit addresses",
            "!".yellow()
        );
        return Ok(());
    }

    for coin in COINS {
        let response = client.coin_deposit_address(coin).await?;
        if !response.is_ok() {
            println!(
                "{} {}: {}",
                "✗".red(),
                coin.to_uppercase(),
                response.error_message().unwrap_or("no address")
            );
            continue;
        }

        for network in &response.networks {
            println!(
                "{}: {} {}",
                coin.to_uppercase().yellow(),
                network.address,
                format!("({})", network.network).dimmed()
            );
            if !network.memo.is_empty() {
                println!("      memo {}", network.memo);
            }
        }
    }

    Ok(())
}
