use crate::error::AppError;
use crate::model::requests::ListQuery;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the event log
#[async_trait]
pub trait EventService: Send + Sync {
    /// All events
    async fn events_get(&self, query: &ListQuery) -> Result<Value, AppError>;

    /// Events of every client
    async fn events_clients(&self, query: &ListQuery) -> Result<Value, AppError>;

    /// Events of one client, given by name or id
    async fn events_client(&self, client: &str, query: &ListQuery) -> Result<Value, AppError>;

    /// Login events
    async fn events_logins(&self, query: &ListQuery) -> Result<Value, AppError>;

    /// System events
    async fn events_system(&self, query: &ListQuery) -> Result<Value, AppError>;
}
