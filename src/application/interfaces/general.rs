use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for server information
#[async_trait]
pub trait GeneralService: Send + Sync {
    /// Server information; does not require authentication
    async fn about(&self) -> Result<Value, AppError>;

    /// Service status
    async fn status(&self) -> Result<Value, AppError>;

    /// Active service warnings
    async fn warnings(&self) -> Result<Value, AppError>;
}
