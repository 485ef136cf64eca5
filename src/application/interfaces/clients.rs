use crate::error::AppError;
use crate::model::requests::{ClientListQuery, ClientUpdate};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for client management
///
/// Operations taking a `client` accept either the client's 32-character id
/// or its name; names are resolved to ids with an extra lookup.
#[async_trait]
pub trait ClientService: Send + Sync {
    /// Creates a client and returns its id
    async fn client_create(&self, name: &str, password: &str) -> Result<String, AppError>;

    /// Number of clients, read from the `x-client-count` header
    async fn client_count(&self) -> Result<u64, AppError>;

    /// Lists clients matching the query
    async fn client_list(&self, query: &ClientListQuery) -> Result<Value, AppError>;

    /// Looks up the id of a client by name
    ///
    /// # Returns
    /// * `Err(AppError::NotFound)` - No client has this name
    async fn client_id(&self, name: &str) -> Result<String, AppError>;

    /// Gets a client record
    async fn client_info(&self, client: &str) -> Result<Value, AppError>;

    /// Deletes a client
    async fn client_delete(&self, client: &str) -> Result<(), AppError>;

    /// Updates a client; only the fields set in `update` are sent
    async fn client_update(&self, client: &str, update: &ClientUpdate) -> Result<(), AppError>;

    /// Removes a client's enrollment; the server processes it asynchronously
    async fn client_unenroll(&self, client: &str) -> Result<(), AppError>;

    /// Checks a client's PIN
    async fn client_validate_pin(&self, client: &str, pin: &str) -> Result<Value, AppError>;

    /// Checks a client's password
    async fn client_validate_password(
        &self,
        client: &str,
        password: &str,
    ) -> Result<Value, AppError>;
}
