use crate::constants::{DEFAULT_OPTION_CHAIN_ROOT, DEFAULT_REST_TIMEOUT, DEFAULT_SCHEME};
use crate::error::AppError;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the Monster API
pub struct Credentials {
    /// Login username (`j_username`)
    pub username: String,
    /// Login password (`j_password`)
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Opaque client identifier sent as the `sourceapp` header on every call
    pub source_app: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST endpoints
pub struct RestApiConfig {
    /// API host without scheme, e.g. `api.example.com` or `127.0.0.1:8443`
    pub host: String,
    /// URL scheme, `https` unless talking to a local test server
    pub scheme: String,
    /// Timeout in seconds for each request, 0 disables it
    pub timeout: u64,
    /// Qualified root element expected on option chain responses
    pub option_chain_root: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
/// Configuration for the outbound transport
pub struct TransportConfig {
    /// `host:port` of the SOCKS5 proxy every connection is dialed through
    pub socks_proxy_addr: Option<String>,
    /// Accept any server certificate
    pub accept_invalid_certs: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Monster API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Transport configuration
    pub transport: TransportConfig,
    /// Enables the quote flow (`/services/quotesService`)
    pub quotes_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first. Missing credentials
    /// are logged; use [`Config::validate`] to turn them into an error.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("MONSTER_USER", String::new());
        let password = get_env_or_default("MONSTER_PASS", String::new());
        let host = get_env_or_default("MONSTER_HOST", String::new());
        let source_app = get_env_or_default("MONSTER_SOURCEAPP", String::new());

        if username.is_empty() {
            error!("MONSTER_USER not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("MONSTER_PASS not found in environment variables or .env file");
        }
        if host.is_empty() {
            error!("MONSTER_HOST not found in environment variables or .env file");
        }
        if source_app.is_empty() {
            error!("MONSTER_SOURCEAPP not found in environment variables or .env file");
        }

        let accept_invalid_certs = get_env_flag("MONSTER_ACCEPT_INVALID_CERTS", false);
        if accept_invalid_certs {
            warn!("TLS certificate verification is disabled");
        }

        Config {
            credentials: Credentials {
                username,
                password,
                source_app,
            },
            rest_api: RestApiConfig {
                host,
                scheme: get_env_or_default("MONSTER_SCHEME", DEFAULT_SCHEME.to_string()),
                timeout: get_env_or_default("MONSTER_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
                option_chain_root: get_env_or_default(
                    "MONSTER_OPTION_CHAIN_ROOT",
                    DEFAULT_OPTION_CHAIN_ROOT.to_string(),
                ),
            },
            transport: TransportConfig {
                socks_proxy_addr: get_env_or_none("SOCKS_PROXY_ADDR"),
                accept_invalid_certs,
            },
            quotes_enabled: get_env_flag("MONSTER_ENABLE_QUOTES", false),
        }
    }

    /// Base URL of the service, `scheme://host`
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self.rest_api.host.trim_end_matches('/');
        format!("{}://{}", self.rest_api.scheme, host)
    }

    /// Full URL for an endpoint path
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// Request timeout, `None` when disabled
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        match self.rest_api.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Checks that the values needed to reach the service are present
    pub fn validate(&self) -> Result<(), AppError> {
        let missing: Vec<&str> = [
            ("MONSTER_USER", self.credentials.username.is_empty()),
            ("MONSTER_PASS", self.credentials.password.is_empty()),
            ("MONSTER_HOST", self.rest_api.host.is_empty()),
            ("MONSTER_SOURCEAPP", self.credentials.source_app.is_empty()),
        ]
        .into_iter()
        .filter_map(|(name, empty)| empty.then_some(name))
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Config(format!("missing {}", missing.join(", "))))
        }
    }
}
