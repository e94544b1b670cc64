/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_OPTION_CHAIN_ROOT, QUOTES_RESPONSE_ROOT};
use crate::model::utils::XmlResponse;
use crate::presentation::option::{OptionChainItem, StrikePair};
use crate::presentation::quote::QuoteItem;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// `<ns2:getQuotesResponse>` document
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct QuoteResponse {
    /// One quote per requested instrument
    #[serde(rename = "item")]
    pub items: Vec<QuoteItem>,
}

impl XmlResponse for QuoteResponse {
    const ROOT: &'static str = QUOTES_RESPONSE_ROOT;
}

impl QuoteResponse {
    /// Quote for `symbol`, if returned
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&QuoteItem> {
        self.items.iter().find(|item| item.symbol == symbol)
    }
}

/// `<ns2:getOptionChainResponse>` document
///
/// The root expected by [`crate::application::client::Client`] comes from
/// [`RestApiConfig::option_chain_root`](crate::application::config::RestApiConfig).
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct OptionChainResponse {
    /// Expiries, in service order
    #[serde(rename = "item")]
    pub items: Vec<OptionChainItem>,
}

impl XmlResponse for OptionChainResponse {
    const ROOT: &'static str = DEFAULT_OPTION_CHAIN_ROOT;
}

impl OptionChainResponse {
    /// First strike pair of the first expiry
    #[must_use]
    pub fn first_strike_pair(&self) -> Option<&StrikePair> {
        self.items
            .first()
            .and_then(|item| item.option_collection.first())
    }

    /// Total number of strike pairs across expiries
    #[must_use]
    pub fn strike_pair_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.option_collection.len())
            .sum()
    }
}
