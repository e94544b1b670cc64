/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Credentials;
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body returned by the login endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Session token sent back on every authenticated call
    #[serde(default)]
    pub token: String,
    /// Numeric user id
    #[serde(default)]
    pub user_id: i64,
}

impl AuthResponse {
    /// Parses a login response body
    ///
    /// A body that is not JSON is a decode error. A JSON body without a token, or
    /// one that carries an `error`/`message` field, is a rejected login.
    pub fn from_body(body: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(body)?;

        for key in ["error", "message", "errorMessage"] {
            if let Some(reason) = value.get(key).filter(|v| !v.is_null()) {
                let reason = reason
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| reason.to_string());
                return Err(AppError::AuthenticationFailed(reason));
            }
        }

        let response: AuthResponse = serde_json::from_value(value)?;
        if response.token.is_empty() {
            return Err(AppError::AuthenticationFailed(
                "login response carried no token".to_string(),
            ));
        }
        Ok(response)
    }
}

/// URL-encoded login form
#[derive(Serialize)]
pub struct LoginForm<'a> {
    #[serde(rename = "j_username")]
    username: &'a str,
    #[serde(rename = "j_password")]
    password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginForm<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            password: &credentials.password,
        }
    }
}
