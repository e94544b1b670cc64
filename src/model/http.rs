/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::constants::{SOURCE_APP_HEADER, TOKEN_HEADER, USER_AGENT, XML_CONTENT_TYPE};
use crate::error::AppError;
use crate::model::auth::LoginForm;
use crate::model::utils::{XmlResponse, from_xml_with_root, to_xml};
use reqwest::{Client, Method, Proxy, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Body of an outgoing request
pub enum Payload<'a> {
    /// `application/x-www-form-urlencoded` login form
    Form(&'a LoginForm<'a>),
    /// Raw XML document
    Xml(Vec<u8>),
}

/// Builds the shared transport
///
/// With a SOCKS5 proxy configured every connection is dialed through it and
/// host names are resolved by the proxy, otherwise connections are direct. The cookie store is shared by the login and
/// the service calls.
pub fn build_transport(config: &Config) -> Result<Client, AppError> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .cookie_store(true)
        .danger_accept_invalid_certs(config.transport.accept_invalid_certs);

    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }

    match &config.transport.socks_proxy_addr {
        Some(addr) => {
            let proxy_url = if addr.contains("://") {
                addr.clone()
            } else {
                format!("socks5h://{addr}")
            };
            info!("Routing connections through SOCKS proxy {}", proxy_url);
            builder = builder.proxy(Proxy::all(&proxy_url)?);
        }
        // direct connections only, system proxy variables are ignored
        None => builder = builder.no_proxy(),
    }

    if config.transport.accept_invalid_certs {
        warn!("Accepting invalid server certificates");
    }

    Ok(builder.build()?)
}

/// Client for the Monster XML services
///
/// Holds the transport, the configuration and the session. Calls are made one at
/// a time; each one reads the full response before returning.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new client and performs the login
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Authenticated client
    /// * `Err(AppError)` - If the transport cannot be built or the login fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.auth.login().await?;
        Ok(client)
    }

    /// Creates a new client without logging in
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = build_transport(&config)?;
        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Logs in, replacing any previous session
    pub async fn login(&self) -> Result<Session, AppError> {
        self.auth.login().await
    }

    /// Posts a raw payload to `path` with the session headers
    ///
    /// Before a successful login the `token` header is sent empty; the service
    /// then rejects the call with a non-success status.
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - Response body
    /// * `Err(AppError)` - Transport failure or non-success status
    pub async fn post(
        &self,
        path: &str,
        payload: impl Into<Vec<u8>>,
    ) -> Result<Vec<u8>, AppError> {
        let url = self.config.url_for(path);
        let token = self.auth.token().await;
        if token.is_empty() {
            warn!("Posting to {} without a session token", path);
        }

        let headers = vec![
            ("Accept", XML_CONTENT_TYPE),
            ("Content-Type", XML_CONTENT_TYPE),
            (SOURCE_APP_HEADER, self.config.credentials.source_app.as_str()),
            (TOKEN_HEADER, token.as_str()),
        ];

        let response = make_http_request(
            &self.http_client,
            Method::POST,
            &url,
            headers,
            Payload::Xml(payload.into()),
        )
        .await?;

        Ok(response.bytes().await?.to_vec())
    }

    /// Serializes `request`, posts it, and decodes the response document
    pub async fn post_xml<B: Serialize, T: XmlResponse>(
        &self,
        path: &str,
        request: &B,
    ) -> Result<T, AppError> {
        self.post_xml_with_root(path, request, T::ROOT).await
    }

    /// Same as [`HttpClient::post_xml`] but expects the response root `root`
    pub async fn post_xml_with_root<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        request: &B,
        root: &str,
    ) -> Result<T, AppError> {
        let payload = to_xml(request)?;
        debug!("Request payload: {}", payload);
        let body = self.post(path, payload).await?;
        from_xml_with_root(&body, root)
    }

    /// Current session, `None` before login
    pub async fn get_session(&self) -> Option<Session> {
        self.auth.get_session().await
    }

    /// Whether a login has succeeded
    pub async fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated().await
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

/// Sends a request and checks its status
///
/// Headers are applied before the body, so a form body replaces any
/// `Content-Type` given in `headers`.
///
/// # Returns
///
/// * `Ok(Response)` - Response with a success status, body unread
/// * `Err(AppError::Network)` - Connection, proxy or TLS failure
/// * `Err(AppError::Api)` - Non-success status, with the body drained into the error
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    payload: Payload<'_>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    request = match payload {
        Payload::Form(form) => request.form(form),
        Payload::Xml(bytes) => request.body(bytes),
    };

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            error!(
                "Request failed with status {} and its body could not be read: {}",
                status, e
            );
            return Err(AppError::Network(e));
        }
    };
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Api { status, body })
}
