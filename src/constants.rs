/// Login endpoint (form encoded, JSON response)
pub const LOGIN_PATH: &str = "/j_acegi_security_check";
/// Quote endpoint (XML request/response)
pub const QUOTES_SERVICE_PATH: &str = "/services/quotesService";
/// Option chain endpoint (XML request/response)
pub const OPTION_CHAIN_SERVICE_PATH: &str = "/services/quotesOptionService";

/// Header carrying the client identifier on every call
pub const SOURCE_APP_HEADER: &str = "sourceapp";
/// Header carrying the session token on authenticated calls
pub const TOKEN_HEADER: &str = "token";

/// `Accept` header sent with the login form
pub const LOGIN_ACCEPT: &str = "text/xml,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
/// `Content-Type` of the login form
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
/// `Accept` and `Content-Type` of the XML services
pub const XML_CONTENT_TYPE: &str = "text/xml";

/// Root element of quote responses
pub const QUOTES_RESPONSE_ROOT: &str = "ns2:getQuotesResponse";
/// Default root element of option chain responses, see `MONSTER_OPTION_CHAIN_ROOT`
pub const DEFAULT_OPTION_CHAIN_ROOT: &str = "ns2:getOptionChainResponse";

/// Default URL scheme; the service is only reachable over https in production
pub const DEFAULT_SCHEME: &str = "https";
/// Default request timeout in seconds (0 disables the timeout)
pub const DEFAULT_REST_TIMEOUT: u64 = 30;

/// User agent string used in HTTP requests
pub const USER_AGENT: &str = concat!("monster-client/", env!("CARGO_PKG_VERSION"));
