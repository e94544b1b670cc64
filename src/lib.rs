//! # Monster Client
//!
//! Client for the Monster quote and option chain web service.
//!
//! The service speaks two dialects:
//! - a form-based login (`/j_acegi_security_check`) answering with JSON
//!   `{"token": ..., "userId": ...}`
//! - XML documents posted to `/services/*` endpoints, authenticated with the
//!   `token` and `sourceapp` headers
//!
//! All traffic can be routed through a SOCKS5 proxy, and certificate
//! verification can be relaxed for deployments that terminate TLS with
//! self-signed certificates.
//!
//! ## Example
//!
//! ```ignore
//! use monster_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new()).await?;
//!     let chain = client
//!         .get_option_chain(&["IBM".to_string(), "AAPL".to_string()])
//!         .await?;
//!     info!("{} expiries", chain.items.len());
//!     Ok(())
//! }
//! ```

/// Application layer: configuration, authentication, client and service traits
pub mod application;
/// Wire-level constants (paths, header names and values)
pub mod constants;
/// Error types
pub mod error;
/// Request/response documents and the HTTP transport
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain records carried inside the XML documents
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
