//! Demo 1: Latest Prices
//!
//! Showcases: public endpoints, no credentials needed
//!
//! Run: cargo run --bin latest_prices [COIN...]

use colored::*;
use coinspot_rest::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut coins: Vec<String> = std::env::args().skip(1).collect();
    if coins.is_empty() {
        coins = vec!["btc".into(), "eth".into(), "doge".into()];
    }

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  COINSPOT LATEST PRICES".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = Coinspot::public_only()?;
    let prices = client.latest_prices().await?;
    if !prices.is_ok() {
        eprintln!("{} {}", "✗".red(), prices.error_message().unwrap_or("request failed"));
        return Ok(());
    }

    println!("{} {} coins listed\n", "✓".green(), prices.prices.len());
    println!(
        "  {:<8} {:>16} {:>16} {:>16} {:>12}",
        "COIN".dimmed(),
        "BID".dimmed(),
        "ASK".dimmed(),
        "LAST".dimmed(),
        "SPREAD".dimmed()
    );

    for coin in &coins {
        match prices.get(coin) {
            Some(price) => println!(
                "  {:<8} {:>16} {:>16} {:>16} {:>12}",
                coin.to_uppercase().yellow(),
                price.bid,
                price.ask,
                price.last,
                price.spread()
            ),
            None => println!("  {:<8} {}", coin.to_uppercase().yellow(), "not listed".red()),
        }
    }

    // Per-coin endpoint, as a cross-check against the bulk feed
    if let Some(coin) = coins.first() {
        let single = client.latest_coin_price(coin).await?;
        let buy = client.latest_buy_price(coin).await?;
        let sell = client.latest_sell_price(coin).await?;

        println!();
        if let Some(price) = &single.prices {
            println!("  {} {} last {}", "→".cyan(), coin.to_uppercase(), price.last);
        }
        println!("  {} buy  {} ({})", "→".cyan(), buy.rate, buy.market);
        println!("  {} sell {} ({})", "→".cyan(), sell.rate, sell.market);
    }

    Ok(())
}
