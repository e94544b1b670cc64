use monster_client::application::client::Client;
use monster_client::application::config::Config;
use monster_client::application::interfaces::quote::QuoteService;
use monster_client::utils::setup_logger;
use tracing::info;

/// Fetches quotes for IBM
///
/// Requires MONSTER_ENABLE_QUOTES=true in addition to the option_chain settings.
///
/// Run with: cargo run --bin quotes
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    config.validate()?;

    let client = Client::new(config).await?;
    let quotes = client.get_quotes(&["IBM".to_string()]).await?;

    for quote in &quotes.items {
        info!(
            "{}: bid {} ask {} mark {} ({:+.2}%) last trade {:?}",
            quote.symbol,
            quote.bid_price,
            quote.ask_price,
            quote.mark,
            quote.mark_change_pct,
            quote.last_trade_time()
        );
    }

    Ok(())
}
