//! Use the blocking client from plain synchronous code.
//!
//! Run with: OPTIONS_TOOLS_API_KEY=... cargo run --example blocking_usage

use options_tools_rs::blocking::OptionsTools;
use options_tools_rs::{ClientConfig, FilingsQuery, PortfolioRequest};
use rust_decimal::Decimal;

fn main() -> options_tools_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("OPTIONS_TOOLS_API_KEY")
        .expect("OPTIONS_TOOLS_API_KEY required");
    let client = OptionsTools::with_config(api_key, ClientConfig::from_env()?)?;

    println!("=== Usage ===");
    println!("{}\n", client.usage()?);

    println!("=== Recent 10-K / 10-Q filings ===");
    for filing in client
        .filings("AAPL", FilingsQuery::new().limit(20))?
        .iter()
        .filter(|f| f.is_periodic_report())
    {
        println!("{} {} {}", filing.filing_date, filing.filing_type, filing.url);
    }
    println!();

    println!("=== Portfolio ===");
    let request = PortfolioRequest::new(Decimal::from(100_000), ["AAPL", "MSFT", "GOOG"])?
        .strategy("income");
    let portfolio = client.optimize_portfolio(&request)?;
    for rec in &portfolio.recommendations {
        println!("{:<6} {:>10} {}", rec.ticker, rec.allocation, rec.strategy);
    }
    println!("Unallocated:  {}", portfolio.unallocated_capital());
    println!("Sharpe:       {}", portfolio.sharpe_ratio);

    client.close()?;
    Ok(())
}
