use monster_client::application::client::Client;
use monster_client::application::config::Config;
use monster_client::application::interfaces::quote::QuoteService;
use monster_client::model::utils::to_xml;
use monster_client::utils::setup_logger;
use tracing::{info, warn};

/// Fetches the option chains of IBM and AAPL and prints the first strike pair
///
/// Configure via environment variables or a `.env` file:
/// - SOCKS_PROXY_ADDR
/// - MONSTER_USER, MONSTER_PASS, MONSTER_HOST, MONSTER_SOURCEAPP
/// - MONSTER_ACCEPT_INVALID_CERTS, MONSTER_OPTION_CHAIN_ROOT (optional)
///
/// Run with: cargo run --bin option_chain
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    config.validate()?;
    info!("Configuration: {}", config);

    info!("Creating client and authenticating...");
    let client = Client::new(config).await?;
    info!("✓ Client created and authenticated");

    let symbols = vec!["IBM".to_string(), "AAPL".to_string()];
    let chain = client.get_option_chain(&symbols).await?;

    match chain.first_strike_pair() {
        Some(pair) => {
            info!("Option chain: {:?}", pair);
            info!("XML: {}", to_xml(pair)?);
        }
        None => warn!("Option chain response carried no strike pairs"),
    }

    Ok(())
}
