use crate::application::client::Client;
use crate::application::interfaces::settings::SettingsService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::paths;
use crate::model::requests::{Confirmed, ProductKeyRequest, SettingsUpdate};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::info;

impl Client {
    /// Wraps a change with the `auth_password` confirmation of user sessions
    fn confirmed<T: serde::Serialize>(&self, inner: T) -> Confirmed<'_, T> {
        Confirmed {
            inner,
            auth_password: self.config().credentials.password(),
        }
    }
}

#[async_trait]
impl SettingsService for Client {
    async fn settings_get(&self) -> Result<Value, AppError> {
        Ok(self
            .protected(ApiRequest::get(paths::SETTINGS_SYSTEM), StatusCode::OK)
            .await?
            .into_json())
    }

    async fn settings_update(&self, update: &SettingsUpdate) -> Result<(), AppError> {
        let request = ApiRequest::put(paths::SETTINGS_SYSTEM).json(&self.confirmed(update))?;
        self.protected(request, StatusCode::OK).await?;
        Ok(())
    }

    async fn settings_reset(&self) -> Result<(), AppError> {
        info!("Resetting system settings");
        let request =
            ApiRequest::delete(paths::SETTINGS_SYSTEM).json(&self.confirmed(SettingsUpdate::new()))?;
        self.protected(request, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    async fn module_settings_get(&self) -> Result<Value, AppError> {
        Ok(self
            .protected(ApiRequest::get(paths::SETTINGS_MODULES), StatusCode::OK)
            .await?
            .into_json())
    }

    async fn module_settings_update(&self, update: &SettingsUpdate) -> Result<(), AppError> {
        let request = ApiRequest::put(paths::SETTINGS_MODULES).json(update)?;
        self.protected(request, StatusCode::OK).await?;
        Ok(())
    }

    async fn productkey_get(&self) -> Result<Value, AppError> {
        Ok(self
            .protected(ApiRequest::get(paths::PRODUCTKEY), StatusCode::OK)
            .await?
            .into_json())
    }

    async fn productkey_activate(&self, product_key: &str) -> Result<Value, AppError> {
        info!("Activating product key");
        let request = ApiRequest::put(paths::PRODUCTKEY).json(&ProductKeyRequest { product_key })?;
        Ok(self.protected(request, StatusCode::OK).await?.into_json())
    }
}
