/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::utils::{last_wins, lenient, lenient_bool};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// One expiry of an option chain for an underlying
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionChainItem {
    /// Position of this expiry in the chain
    #[serde(deserialize_with = "lenient")]
    pub order: i64,
    /// Service-specific flag
    #[serde(deserialize_with = "lenient")]
    pub add_flag: String,
    /// Calendar days until expiry
    #[serde(deserialize_with = "lenient")]
    pub days_to_expire: i64,
    /// Human-readable expiry label
    #[serde(deserialize_with = "lenient")]
    pub expiry_label: String,
    /// Expiry type (regular, weekly, quarterly...)
    #[serde(deserialize_with = "lenient")]
    pub expiry_type: String,
    /// Strikes listed for this expiry
    #[serde(rename = "option_Collection")]
    pub option_collection: Vec<StrikePair>,
}

impl OptionChainItem {
    /// Strike pair listed at `strike`, if any
    #[must_use]
    pub fn strike(&self, strike: f64) -> Option<&StrikePair> {
        self.option_collection.iter().find(|pair| pair.strike == strike)
    }

    /// Listed strike prices in wire order
    pub fn strikes(&self) -> impl Iterator<Item = f64> + '_ {
        self.option_collection.iter().map(|pair| pair.strike)
    }
}

/// Call and put contracts sharing a strike
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename = "option_Collection")]
pub struct StrikePair {
    /// Call leg
    #[serde(deserialize_with = "last_wins")]
    pub call: OptionContract,
    /// Put leg
    #[serde(deserialize_with = "last_wins")]
    pub put: OptionContract,
    /// Strike price
    #[serde(deserialize_with = "lenient")]
    pub strike: f64,
}

/// Listing of a single option contract
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionContract {
    /// What is delivered on exercise
    #[serde(deserialize_with = "lenient")]
    pub deliverable_type: String,
    /// Listing exchange
    #[serde(deserialize_with = "lenient")]
    pub exchange: String,
    /// Exchange type
    #[serde(deserialize_with = "lenient")]
    pub exchange_type: String,
    /// `A` (American) or `E` (European)
    #[serde(deserialize_with = "lenient")]
    pub exercise_style: String,
    /// Expiration type
    #[serde(deserialize_with = "lenient")]
    pub expiration_type: String,
    /// Expire type
    #[serde(deserialize_with = "lenient")]
    pub expire_type: String,
    /// Deliverable at expiry
    #[serde(deserialize_with = "lenient")]
    pub expiry_deliverable: String,
    /// Instrument detail
    #[serde(deserialize_with = "last_wins")]
    pub instrument: OptionInstrument,
    /// Service instrument id
    #[serde(deserialize_with = "lenient")]
    pub instrument_id: i64,
    /// Tick size below the tick threshold
    #[serde(deserialize_with = "lenient")]
    pub minimum_tick_value1: f64,
    /// Tick size above the tick threshold
    #[serde(deserialize_with = "lenient")]
    pub minimum_tick_value2: f64,
    /// Contract multiplier
    #[serde(deserialize_with = "lenient")]
    pub multiplier: i64,
    /// OPRA root symbol
    #[serde(deserialize_with = "lenient")]
    pub opra_root: String,
    /// Reuters instrument code
    #[serde(deserialize_with = "lenient")]
    pub reuters_instrument_code: String,
    /// Shares delivered per contract
    #[serde(deserialize_with = "lenient")]
    pub shares_per_contract: i64,
    /// Strike price
    #[serde(deserialize_with = "lenient")]
    pub strike_price: f64,
    /// Option symbol
    #[serde(deserialize_with = "lenient")]
    pub symbol: String,
}

/// Instrument detail embedded in an [`OptionContract`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionInstrument {
    #[serde(deserialize_with = "lenient")]
    pub days_to_expire: i64,
    #[serde(deserialize_with = "lenient_bool")]
    pub easy_to_borrow: bool,
    #[serde(deserialize_with = "lenient")]
    pub exchange_code: String,
    #[serde(deserialize_with = "lenient")]
    pub exchange_type: String,
    #[serde(deserialize_with = "lenient")]
    pub exercise_style: String,
    #[serde(deserialize_with = "lenient")]
    pub expire_day: i64,
    /// Expiry day in US/Eastern
    #[serde(rename = "expireDayET", deserialize_with = "lenient")]
    pub expire_day_et: i64,
    #[serde(deserialize_with = "lenient")]
    pub instrument_id: i64,
    #[serde(deserialize_with = "lenient")]
    pub instrument_sub_type: String,
    #[serde(deserialize_with = "lenient")]
    pub instrument_type: String,
    #[serde(deserialize_with = "lenient")]
    pub minimum_tick_value1: f64,
    #[serde(deserialize_with = "lenient")]
    pub minimum_tick_value2: f64,
    /// Expiry month, 1-12
    #[serde(deserialize_with = "lenient")]
    pub month: i64,
    #[serde(deserialize_with = "lenient")]
    pub multiplier: f64,
    #[serde(deserialize_with = "lenient")]
    pub opra_code: String,
    /// `C` or `P`
    #[serde(deserialize_with = "lenient")]
    pub option_type: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub optionable: bool,
    #[serde(deserialize_with = "lenient")]
    pub reuters_instrument_code: String,
    #[serde(deserialize_with = "lenient")]
    pub strike_price: f64,
    #[serde(deserialize_with = "lenient")]
    pub symbol: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub tradeable: bool,
    /// Instrument id of the underlying
    #[serde(deserialize_with = "lenient")]
    pub underlying_instrument_id: i64,
    #[serde(deserialize_with = "lenient")]
    pub underlying_symbol: String,
    #[serde(deserialize_with = "lenient")]
    pub year: i64,
}
