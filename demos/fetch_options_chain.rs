//! Fetch an options chain, the options flow and an entry analysis for one ticker.
//!
//! Run with: OPTIONS_TOOLS_API_KEY=... cargo run --example fetch_options_chain -- GOOG

use options_tools_rs::prelude::*;

#[tokio::main]
async fn main() -> options_tools_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let ticker = std::env::args().nth(1).unwrap_or_else(|| "GOOG".to_string());
    let client = OptionsToolsClient::from_env()?;

    let health = client.health_check().await?;
    println!("API health: {health}\n");

    // 1. Options chain, calls only
    println!("=== {ticker} Calls ===");
    let chain = client
        .options()
        .chain(&ticker, ChainQuery::new().option_type(OptionType::Call))
        .await?;
    println!("Spot:         {}", chain.spot_price);
    println!("Snapshot:     {}", chain.timestamp);
    println!("Expirations:  {:?}", chain.expirations());
    for contract in chain.calls().take(10) {
        println!(
            "  {} {:>8}  bid={:?} ask={:?} mid={:?} delta={:?}",
            contract.expiration,
            contract.strike,
            contract.bid,
            contract.ask,
            contract.mid(),
            contract.delta,
        );
    }
    println!();

    // 2. Unusual flow
    println!("=== {ticker} Unusual Flow ===");
    let flow = client
        .options()
        .flow(&ticker, FlowQuery::new().unusual_only(true))
        .await?;
    println!("Total premium: {}", flow.total_premium);
    println!("Net premium:   {}", flow.net_premium());
    println!("Sweeps:        {}", flow.sweeps().count());
    println!();

    // 3. Entry analysis
    println!("=== {ticker} Entry Analysis ===");
    let analysis = client.analysis().entry(&ticker, EntryQuery::new()).await?;
    println!("Action:       {}", analysis.recommended_action);
    println!("Risk score:   {}", analysis.risk_score);
    if let Some(signal) = analysis.strongest_signal() {
        println!("Top signal:   {:?} ({}) {}", signal.signal_type, signal.strength, signal.reason);
    }

    client.close().await;
    println!("\nDone!");
    Ok(())
}
