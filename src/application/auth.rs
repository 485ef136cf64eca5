/******************************************************************************
   Author: KnuVerse
   Email: support@knuverse.com
   Date: 16/10/26
******************************************************************************/

//! Authentication module for the KnuVerse API
//!
//! This module owns the bearer token lifecycle:
//! - Login with an API key pair or a user/password pair
//! - Lazy re-authentication once a token is older than ten minutes
//! - Explicit refresh through `auth/refresh`
//! - Installing the `Authorization` header on the shared transport

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::auth::{AuthRequest, AuthToken, jwt_from_body};
use crate::model::http::{ApiRequest, HttpClient, check_status};
use crate::model::paths;
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Authentication manager for the KnuVerse API
///
/// The token lives behind an async mutex that is held across the whole
/// check-then-authenticate sequence, so concurrent callers sharing one
/// `Auth` never re-authenticate more than once for the same stale token.
pub struct Auth {
    config: Arc<Config>,
    http_client: Arc<HttpClient>,
    token: Mutex<Option<AuthToken>>,
}

impl Auth {
    /// Creates a new Auth instance without a token
    ///
    /// # Arguments
    /// * `config` - Configuration containing the credentials
    /// * `http_client` - Transport whose default headers receive the bearer token
    pub fn new(config: Arc<Config>, http_client: Arc<HttpClient>) -> Self {
        Self {
            config,
            http_client,
            token: Mutex::new(None),
        }
    }

    /// Makes sure a fresh token is installed, authenticating if needed
    ///
    /// A token is fresh for ten minutes after it was obtained. When there is
    /// no token, or it is stale, this authenticates before returning.
    ///
    /// # Returns
    /// * `Ok(AuthToken)` - The token now attached to every request
    /// * `Err(AppError)` - If authentication fails
    pub async fn ensure_authenticated(&self) -> Result<AuthToken, AppError> {
        let mut token = self.token.lock().await;

        if let Some(current) = token.as_ref() {
            if !current.is_stale() {
                return Ok(current.clone());
            }
            info!("Token obtained at {} is stale, re-authenticating", current.acquired_at);
        } else {
            info!("No active token, authenticating");
        }

        self.authenticate_locked(&mut token).await
    }

    /// Authenticates with the configured credentials unconditionally
    ///
    /// # Returns
    /// * `Ok(AuthToken)` - The newly obtained token
    /// * `Err(AppError)` - The mapped error if the server did not answer 200
    pub async fn authenticate(&self) -> Result<AuthToken, AppError> {
        let mut token = self.token.lock().await;
        self.authenticate_locked(&mut token).await
    }

    async fn authenticate_locked(
        &self,
        slot: &mut Option<AuthToken>,
    ) -> Result<AuthToken, AppError> {
        let body = AuthRequest::from(&self.config.credentials);
        debug!("Sending authentication request to: {}", self.http_client.url(paths::AUTH));

        let request = ApiRequest::post(paths::AUTH).json(&body)?;
        let response = self.http_client.send(request).await?;
        check_status(&response, StatusCode::OK)?;

        let token = AuthToken::new(jwt_from_body(response.json.as_ref())?);
        self.install(slot, token.clone()).await?;

        info!("✓ Authentication successful");
        Ok(token)
    }

    /// Exchanges the current token for a new one through `auth/refresh`
    ///
    /// Authenticates first when there is no usable token.
    pub async fn refresh(&self) -> Result<AuthToken, AppError> {
        let mut token = self.token.lock().await;

        if token.as_ref().is_none_or(AuthToken::is_stale) {
            return self.authenticate_locked(&mut token).await;
        }

        info!("Refreshing token");
        let response = self
            .http_client
            .send(ApiRequest::get(paths::AUTH_REFRESH))
            .await?;
        check_status(&response, StatusCode::OK)?;

        let refreshed = AuthToken::new(jwt_from_body(response.json.as_ref())?);
        self.install(&mut token, refreshed.clone()).await?;

        info!("✓ Token refreshed successfully");
        Ok(refreshed)
    }

    /// Adopts a token obtained elsewhere, keeping its acquisition time
    ///
    /// The token is subject to the same ten-minute freshness rule as one
    /// obtained by [`Auth::authenticate`].
    pub async fn install_token(&self, token: AuthToken) -> Result<(), AppError> {
        let mut slot = self.token.lock().await;
        self.install(&mut slot, token).await
    }

    async fn install(&self, slot: &mut Option<AuthToken>, token: AuthToken) -> Result<(), AppError> {
        self.http_client.set_bearer(&token.jwt).await?;
        *slot = Some(token);
        Ok(())
    }

    /// Current token, if any, without checking freshness
    pub async fn current_token(&self) -> Option<AuthToken> {
        self.token.lock().await.clone()
    }

    /// Drops the token and the `Authorization` header
    ///
    /// The next protected call authenticates again.
    pub async fn logout(&self) {
        info!("Logging out");
        let mut token = self.token.lock().await;
        *token = None;
        self.http_client.clear_bearer().await;
    }
}
