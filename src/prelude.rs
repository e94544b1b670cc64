/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Monster Client Prelude
//!
//! ```rust
//! use monster_client::prelude::*;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the client
pub use crate::application::config::{Config, Credentials, RestApiConfig, TransportConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and result alias
pub use crate::error::{AppError, AppResult};

// ============================================================================
// AUTHENTICATION AND TRANSPORT
// ============================================================================

/// Authentication handler and session
pub use crate::application::auth::{Auth, Session};

/// Low-level transport
pub use crate::model::http::{HttpClient, build_transport};

// ============================================================================
// SERVICES
// ============================================================================

/// High-level client
pub use crate::application::client::Client;

/// Service trait
pub use crate::application::interfaces::quote::QuoteService;

// ============================================================================
// WIRE DOCUMENTS
// ============================================================================

/// Request and response documents
pub use crate::model::requests::{OptionChainRequest, QuoteRequest};
pub use crate::model::responses::{OptionChainResponse, QuoteResponse};

/// Codec helpers
pub use crate::model::utils::{XmlResponse, from_xml, from_xml_with_root, to_xml};

/// Domain records
pub use crate::presentation::option::{
    OptionChainItem, OptionContract, OptionInstrument, StrikePair,
};
pub use crate::presentation::quote::{Price, QuoteItem};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
