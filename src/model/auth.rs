/******************************************************************************
   Author: KnuVerse
   Email: support@knuverse.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Credentials;
use crate::constants::TOKEN_LIFETIME_MINUTES;
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bearer token together with the moment it was obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    /// Signed JWT sent as `Authorization: Bearer <jwt>`
    pub jwt: String,
    /// UTC time at which the token was obtained
    pub acquired_at: DateTime<Utc>,
}

impl AuthToken {
    /// Creates a token obtained now
    pub fn new(jwt: impl Into<String>) -> Self {
        Self::with_acquired_at(jwt, Utc::now())
    }

    /// Creates a token obtained at a given time, e.g. one restored from storage
    pub fn with_acquired_at(jwt: impl Into<String>, acquired_at: DateTime<Utc>) -> Self {
        Self {
            jwt: jwt.into(),
            acquired_at,
        }
    }

    /// Checks whether the token has to be renewed at `now`
    #[must_use]
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.acquired_at + Duration::minutes(TOKEN_LIFETIME_MINUTES)
    }

    /// Checks whether the token has to be renewed right now
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.is_stale_at(Utc::now())
    }

    /// Value of the `Authorization` header carrying this token
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.jwt)
    }
}

/// Body posted to the `auth` endpoint
///
/// The wire shape depends on the credential kind.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AuthRequest<'a> {
    /// `{"key_id": ..., "secret": ...}`
    ApiKey {
        /// API key id
        key_id: &'a str,
        /// API secret
        secret: &'a str,
    },
    /// `{"user": ..., "password": ..., "account_number": ...}`
    User {
        /// User name
        user: &'a str,
        /// Password
        password: &'a str,
        /// Account number, omitted when not configured
        #[serde(skip_serializing_if = "Option::is_none")]
        account_number: Option<&'a str>,
    },
}

impl<'a> From<&'a Credentials> for AuthRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        match credentials {
            Credentials::ApiKey { key_id, secret } => AuthRequest::ApiKey { key_id, secret },
            Credentials::User {
                user,
                password,
                account_number,
            } => AuthRequest::User {
                user,
                password,
                account_number: account_number.as_deref(),
            },
        }
    }
}

/// Extracts the `jwt` field from an authentication response body
pub fn jwt_from_body(body: Option<&Value>) -> Result<String, AppError> {
    body.and_then(|json| json.get("jwt"))
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| AppError::Deserialization("authentication response has no jwt".to_string()))
}
