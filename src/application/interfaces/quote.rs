use crate::error::AppError;
use crate::model::responses::{OptionChainResponse, QuoteResponse};
use async_trait::async_trait;

/// Interface for the quote service
#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Gets the option chain of each underlying, in request order
    ///
    /// # Arguments
    /// * `symbols` - Underlying symbols, e.g. `["IBM", "AAPL"]`
    async fn get_option_chain(&self, symbols: &[String]) -> Result<OptionChainResponse, AppError>;

    /// Gets quotes for the given symbols
    ///
    /// Only available when the quote flow is enabled in the configuration;
    /// returns [`AppError::FeatureDisabled`] otherwise.
    async fn get_quotes(&self, symbols: &[String]) -> Result<QuoteResponse, AppError>;
}
