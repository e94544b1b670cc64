/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authentication for the Monster API
//!
//! The login is a single form POST answered with `{"token": ..., "userId": ...}`.
//! The token has no advertised lifetime; it is kept until the client is dropped
//! or [`Auth::login`] runs again.

use crate::application::config::Config;
use crate::constants::{FORM_CONTENT_TYPE, LOGIN_ACCEPT, LOGIN_PATH, SOURCE_APP_HEADER};
use crate::error::AppError;
use crate::model::auth::{AuthResponse, LoginForm};
use crate::model::http::{Payload, make_http_request};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Session information for authenticated requests
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Token sent in the `token` header
    pub token: String,
    /// Numeric user id returned by the login
    pub user_id: i64,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            user_id: response.user_id,
        }
    }
}

/// Authentication manager
///
/// `Unauthenticated` until [`Auth::login`] succeeds, `Authenticated` afterwards.
/// There is no way back: no logout and no refresh.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Auth {
    /// Creates a new Auth instance sharing `client`'s transport and cookie store
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Logs in with the configured credentials and stores the session
    ///
    /// # Returns
    /// * `Ok(Session)` - Stored session
    /// * `Err(AppError::Network)` - Transport failure
    /// * `Err(AppError::Api)` - Non-success status
    /// * `Err(AppError::Json)` - Body is not JSON
    /// * `Err(AppError::AuthenticationFailed)` - Login rejected
    pub async fn login(&self) -> Result<Session, AppError> {
        let url = self.config.url_for(LOGIN_PATH);
        debug!("Sending login request to: {}", url);

        let form = LoginForm::from(&self.config.credentials);
        let headers = vec![
            ("Accept", LOGIN_ACCEPT),
            ("Content-Type", FORM_CONTENT_TYPE),
            (SOURCE_APP_HEADER, self.config.credentials.source_app.as_str()),
        ];

        let response =
            make_http_request(&self.client, Method::POST, &url, headers, Payload::Form(&form))
                .await?;
        let body = response.text().await?;

        let session = match AuthResponse::from_body(&body) {
            Ok(auth) => Session::from(auth),
            Err(AppError::AuthenticationFailed(reason)) => {
                error!("Login rejected: {}", reason);
                return Err(AppError::AuthenticationFailed(reason));
            }
            Err(e) => {
                error!("Login response could not be decoded: {}", e);
                return Err(e);
            }
        };

        let mut sess = self.session.write().await;
        *sess = Some(session.clone());

        info!("✓ Login successful, user: {}", session.user_id);
        Ok(session)
    }

    /// Current session, `None` before a successful login
    pub async fn get_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Current token, empty before a successful login
    pub async fn token(&self) -> String {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.token.clone())
            .unwrap_or_default()
    }

    /// Whether a login has succeeded
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }
}
