/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::utils::{last_wins, lenient};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monetary value as carried on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Price {
    /// Amount in `currency` units
    #[serde(deserialize_with = "lenient")]
    pub amount: f64,
    /// ISO currency code, e.g. `USD`
    #[serde(deserialize_with = "lenient")]
    pub currency: String,
}

impl Price {
    /// Creates a new price
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// True when neither an amount nor a currency was supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amount == 0.0 && self.currency.is_empty()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.currency.is_empty() {
            write!(f, "{}", self.amount)
        } else {
            write!(f, "{} {}", self.amount, self.currency)
        }
    }
}

/// Market data snapshot for a single instrument
///
/// Field order mirrors the element order the service expects; do not reorder.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteItem {
    /// Best ask
    #[serde(deserialize_with = "last_wins")]
    pub ask_price: Price,
    /// Size available at the best ask
    #[serde(deserialize_with = "lenient")]
    pub ask_size: f64,
    /// Best bid
    #[serde(deserialize_with = "last_wins")]
    pub bid_price: Price,
    /// Size available at the best bid
    #[serde(deserialize_with = "lenient")]
    pub bid_size: f64,
    /// Mark at the previous close
    #[serde(deserialize_with = "last_wins")]
    pub closing_mark: Price,
    /// Session high
    #[serde(deserialize_with = "last_wins")]
    pub high_price: Price,
    /// Implied volatility
    #[serde(deserialize_with = "lenient")]
    pub implied_volatility: f64,
    /// Size of the last trade
    #[serde(deserialize_with = "lenient")]
    pub last_size: i64,
    /// Time of the last trade, milliseconds since the epoch
    #[serde(deserialize_with = "lenient")]
    pub last_trade_time_millis: i64,
    /// Price of the last trade
    #[serde(deserialize_with = "last_wins")]
    pub last_traded_price: Price,
    /// Session low
    #[serde(deserialize_with = "last_wins")]
    pub low_price: Price,
    /// Reference price, distinct from bid/ask
    #[serde(deserialize_with = "last_wins")]
    pub mark: Price,
    /// Mark change since the previous close, percent
    #[serde(deserialize_with = "lenient")]
    pub mark_change_pct: f64,
    /// Mark change since the previous close
    #[serde(deserialize_with = "last_wins")]
    pub mark_change_price: Price,
    /// Session open
    #[serde(deserialize_with = "last_wins")]
    pub open_price: Price,
    /// Ticker symbol
    #[serde(deserialize_with = "lenient")]
    pub symbol: String,
    /// Traded volume
    #[serde(deserialize_with = "lenient")]
    pub volume: i64,
    /// 52-week high
    #[serde(deserialize_with = "last_wins")]
    pub year_high_price: Price,
    /// 52-week low
    #[serde(deserialize_with = "last_wins")]
    pub year_low_price: Price,
    /// Dividend type
    #[serde(deserialize_with = "lenient")]
    pub div_type: String,
    /// Dividend amount
    #[serde(deserialize_with = "last_wins")]
    pub dividend: Price,
    /// Dividend date, milliseconds since the epoch
    #[serde(deserialize_with = "lenient")]
    pub dividend_date: i64,
    /// Last traded price in extended hours
    #[serde(deserialize_with = "last_wins")]
    pub ext_last_traded_price: Price,
    /// Instrument type, e.g. `Equity`
    #[serde(deserialize_with = "lenient")]
    pub instrument_type: String,
    /// Previous session close
    #[serde(deserialize_with = "last_wins")]
    pub previous_close_price: Price,
    /// Time of the last sale, milliseconds since the epoch
    #[serde(deserialize_with = "lenient")]
    pub sale_trade_time_millis: i64,
    /// Exchange trade condition code
    #[serde(deserialize_with = "lenient")]
    pub trade_condition: i64,
}

impl QuoteItem {
    /// Request item carrying only a symbol
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Time of the last trade
    #[must_use]
    pub fn last_trade_time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.last_trade_time_millis)
    }

    /// Time of the last sale
    #[must_use]
    pub fn sale_trade_time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.sale_trade_time_millis)
    }

    /// Dividend date
    #[must_use]
    pub fn dividend_time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.dividend_date)
    }

    /// Ask minus bid, when both sides are quoted
    #[must_use]
    pub fn spread(&self) -> Option<f64> {
        if self.ask_price.amount > 0.0 && self.bid_price.amount > 0.0 {
            Some(self.ask_price.amount - self.bid_price.amount)
        } else {
            None
        }
    }
}

// zero means "not provided"
fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis)
}
