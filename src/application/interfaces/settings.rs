use crate::error::AppError;
use crate::model::requests::SettingsUpdate;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for account settings and licensing
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Gets the system settings
    async fn settings_get(&self) -> Result<Value, AppError>;

    /// Updates system settings
    ///
    /// User sessions confirm the change by echoing their password as
    /// `auth_password`.
    async fn settings_update(&self, update: &SettingsUpdate) -> Result<(), AppError>;

    /// Resets system settings to their defaults, confirmed like an update
    async fn settings_reset(&self) -> Result<(), AppError>;

    /// Gets the module settings
    async fn module_settings_get(&self) -> Result<Value, AppError>;

    /// Updates module settings
    async fn module_settings_update(&self, update: &SettingsUpdate) -> Result<(), AppError>;

    /// Gets the product key information
    async fn productkey_get(&self) -> Result<Value, AppError>;

    /// Activates a product key
    async fn productkey_activate(&self, product_key: &str) -> Result<Value, AppError>;
}
