/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::utils::to_xml;
use crate::presentation::quote::QuoteItem;
use serde::Serialize;

/// `<getQuotes>` request: one `<item>` per instrument
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename = "getQuotes")]
pub struct QuoteRequest {
    /// Requested instruments; only `symbol` needs to be set
    #[serde(rename = "item")]
    pub items: Vec<QuoteItem>,
}

impl QuoteRequest {
    /// Builds a request with one item per symbol
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Self {
        Self {
            items: symbols
                .iter()
                .map(|symbol| QuoteItem::for_symbol(symbol.as_ref()))
                .collect(),
        }
    }

    /// Serializes the request document
    pub fn to_xml(&self) -> Result<String, AppError> {
        to_xml(self)
    }
}

/// `<getOptionChain>` request: one `<symbol>` element per underlying
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
#[serde(rename = "getOptionChain")]
pub struct OptionChainRequest {
    /// Underlying symbols, serialized in order
    #[serde(rename = "symbol")]
    pub symbols: Vec<String>,
}

impl OptionChainRequest {
    /// Builds a request for the given underlyings
    pub fn new<S: AsRef<str>>(symbols: &[S]) -> Self {
        Self {
            symbols: symbols.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Adds an underlying
    pub fn push(&mut self, symbol: impl Into<String>) -> &mut Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Serializes the request document
    pub fn to_xml(&self) -> Result<String, AppError> {
        to_xml(self)
    }
}
