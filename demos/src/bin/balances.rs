//! Demo 3: Account Balances
//!
//! Showcases: read-only endpoints, call hooks written to a JSON log file
//!
//! Needs COINSPOT_API_KEY and COINSPOT_API_SECRET. Every API call is appended
//! to `logs/coinspot-calls.<date>` as one JSON line.
//!
//! Run: cargo run --bin balances

use colored::*;
use coinspot_rest::prelude::*;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

const LOG_DIR: &str = "logs";
const CALL_TARGET: &str = "coinspot::calls";

/// Console output filtered by RUST_LOG, call records to a daily JSON file
fn init_tracing() -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(LOG_DIR)?;

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, "coinspot-calls");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    Registry::default()
        .with(fmt::layer().with_target(true).with_filter(env_filter))
        .with(
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(Targets::new().with_target(CALL_TARGET, tracing::Level::INFO)),
        )
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = init_tracing()?;

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  COINSPOT ACCOUNT BALANCES".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = Coinspot::builder()
        .with_credentials(Credentials::from_env()?)
        .with_hooks(Hooks::tracing())
        .build()?;

    let read_only = client.read_only()?;

    let status = read_only.status().await?;
    if let Err(e) = status.into_ok() {
        eprintln!("{} {}", "✗".red(), e);
        return Ok(());
    }
    println!("{} Read-only API reachable\n", "✓".green());

    let balances = read_only.formatted_balances().await?;
    if balances.is_empty() {
        println!("  {}", "No balances".dimmed());
        return Ok(());
    }

    let mut total = Decimal::ZERO;
    for (coin, balance) in &balances {
        total += balance.audbalance;
        println!(
            "  {:<8} {:>20} {} {:>14}",
            coin.yellow(),
            balance.balance,
            "A$".dimmed(),
            balance.audbalance.round_dp(2)
        );
    }
    println!("  {}", "─".repeat(48).dimmed());
    println!("  {:<8} {:>20} {} {:>14}", "TOTAL".bold(), "", "A$".dimmed(), total.round_dp(2));

    let open = read_only.my_open_limit_orders(None).await?;
    println!(
        "\n{} {} open limit orders ({} buy, {} sell)",
        "→".cyan(),
        open.buyorders.len() + open.sellorders.len(),
        open.buyorders.len(),
        open.sellorders.len()
    );

    Ok(())
}
