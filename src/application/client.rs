/******************************************************************************
   Author: KnuVerse
   Email: support@knuverse.com
   Date: 16/10/26
******************************************************************************/

//! Client for the KnuVerse API
//!
//! [`Client`] composes the HTTP transport with the authentication manager and
//! implements the service traits from [`crate::application::interfaces`].
//!
//! # Example
//! ```ignore
//! use knuverse_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//!
//! // Authentication is handled automatically
//! let enrollment = client
//!     .enrollment_start(&EnrollmentRequest::new("alice").with_pin("1234"))
//!     .await?;
//! ```

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::auth::AuthToken;
use crate::model::http::{ApiRequest, ApiResponse, HttpClient, check_status};
use crate::model::paths;
use crate::utils::id::is_resource_id;
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Client for the KnuVerse API with automatic authentication
///
/// Protected operations make sure a token younger than ten minutes is
/// installed before their request is sent. The client is `Send + Sync`; share
/// it through an `Arc` to use it from several tasks.
pub struct Client {
    config: Arc<Config>,
    http_client: Arc<HttpClient>,
    auth: Auth,
}

impl Client {
    /// Creates a client without authenticating
    ///
    /// Authentication happens on the first protected call.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = Arc::new(HttpClient::new(&config)?);
        let auth = Auth::new(config.clone(), http_client.clone());

        Ok(Self {
            config,
            http_client,
            auth,
        })
    }

    /// Creates a client and authenticates immediately
    ///
    /// # Returns
    /// * `Ok(Client)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the client cannot be built or authentication fails
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::new(config)?;
        client.auth.authenticate().await?;
        Ok(client)
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Authentication manager
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Authenticates with the configured credentials, replacing any token
    pub async fn authenticate(&self) -> Result<AuthToken, AppError> {
        self.auth.authenticate().await
    }

    /// Exchanges the current token for a new one
    pub async fn auth_refresh(&self) -> Result<AuthToken, AppError> {
        self.auth.refresh().await
    }

    /// Current token, if authenticated
    pub async fn token(&self) -> Option<AuthToken> {
        self.auth.current_token().await
    }

    /// Forgets the current token
    pub async fn logout(&self) {
        self.auth.logout().await
    }

    /// Sends a request that needs a fresh token
    ///
    /// # Arguments
    /// * `request` - Request to send
    /// * `expected` - The single status code that counts as success
    pub(crate) async fn protected(
        &self,
        request: ApiRequest,
        expected: StatusCode,
    ) -> Result<ApiResponse, AppError> {
        self.auth.ensure_authenticated().await?;
        self.public(request, expected).await
    }

    /// Sends a request without touching the token
    pub(crate) async fn public(
        &self,
        request: ApiRequest,
        expected: StatusCode,
    ) -> Result<ApiResponse, AppError> {
        let response = self.http_client.send(request).await?;
        check_status(&response, expected)?;
        Ok(response)
    }

    /// Resolves a client name or id to an id
    ///
    /// Values shaped like a resource id are returned unchanged; anything else
    /// is looked up by name.
    pub(crate) async fn resolve_client_id(&self, client: &str) -> Result<String, AppError> {
        if is_resource_id(client) {
            return Ok(client.to_string());
        }
        debug!("Resolving client name {:?} to an id", client);
        self.lookup_client_id(client).await
    }

    /// Looks up the id of a client by name
    ///
    /// A name the server does not know is reported as [`AppError::NotFound`].
    pub(crate) async fn lookup_client_id(&self, name: &str) -> Result<String, AppError> {
        let request = ApiRequest::get(paths::CLIENTS).query(&json!({ "name": name }))?;
        let response = match self.protected(request, StatusCode::OK).await {
            Err(AppError::NotFound(_)) => None,
            other => Some(other?),
        };

        response
            .as_ref()
            .and_then(|r| r.str_field("client_id"))
            .filter(|id| !id.is_empty())
            .map(String::from)
            .ok_or_else(|| AppError::NotFound(format!("client {name:?} not found")))
    }
}
