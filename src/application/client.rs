/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::interfaces::quote::QuoteService;
use crate::constants::{OPTION_CHAIN_SERVICE_PATH, QUOTES_SERVICE_PATH};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{OptionChainRequest, QuoteRequest};
use crate::model::responses::{OptionChainResponse, QuoteResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// High-level client exposing the typed service calls
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client and logs in
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config).await?);
        Ok(Self { http_client })
    }

    /// Creates a client without logging in; call [`Client::login`] before any service call
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new_lazy(config)?);
        Ok(Self { http_client })
    }

    /// Logs in, replacing any previous session
    pub async fn login(&self) -> Result<Session, AppError> {
        self.http_client.login().await
    }

    /// Current session, `None` before login
    pub async fn get_session(&self) -> Option<Session> {
        self.http_client.get_session().await
    }

    /// Underlying transport, for raw calls
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl QuoteService for Client {
    async fn get_option_chain(&self, symbols: &[String]) -> Result<OptionChainResponse, AppError> {
        if symbols.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one symbol is required".to_string(),
            ));
        }

        info!("Getting option chain: {}", symbols.join(","));
        let request = OptionChainRequest::new(symbols);
        let root = &self.http_client.config().rest_api.option_chain_root;
        let chain: OptionChainResponse = self
            .http_client
            .post_xml_with_root(OPTION_CHAIN_SERVICE_PATH, &request, root)
            .await?;
        debug!(
            "Option chain obtained: {} expiries, {} strike pairs",
            chain.items.len(),
            chain.strike_pair_count()
        );
        Ok(chain)
    }

    async fn get_quotes(&self, symbols: &[String]) -> Result<QuoteResponse, AppError> {
        if !self.http_client.config().quotes_enabled {
            return Err(AppError::FeatureDisabled("quotes"));
        }
        if symbols.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one symbol is required".to_string(),
            ));
        }

        info!("Getting quotes: {}", symbols.join(","));
        let request = QuoteRequest::from_symbols(symbols);
        let quotes: QuoteResponse = self
            .http_client
            .post_xml(QUOTES_SERVICE_PATH, &request)
            .await?;
        debug!("Quotes obtained: {}", quotes.items.len());
        Ok(quotes)
    }
}
