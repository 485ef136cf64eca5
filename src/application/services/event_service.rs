use crate::application::client::Client;
use crate::application::interfaces::events::EventService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::paths;
use crate::model::requests::ListQuery;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

impl Client {
    async fn list_events(&self, path: String, query: &ListQuery) -> Result<Value, AppError> {
        let request = ApiRequest::get(path).query(query)?;
        Ok(self.protected(request, StatusCode::OK).await?.into_json())
    }
}

#[async_trait]
impl EventService for Client {
    async fn events_get(&self, query: &ListQuery) -> Result<Value, AppError> {
        self.list_events(paths::EVENTS.to_string(), query).await
    }

    async fn events_clients(&self, query: &ListQuery) -> Result<Value, AppError> {
        self.list_events(paths::EVENTS_CLIENTS.to_string(), query)
            .await
    }

    async fn events_client(&self, client: &str, query: &ListQuery) -> Result<Value, AppError> {
        let id = self.resolve_client_id(client).await?;
        self.list_events(paths::with_id(paths::EVENTS_CLIENTS_ID, &id), query)
            .await
    }

    async fn events_logins(&self, query: &ListQuery) -> Result<Value, AppError> {
        self.list_events(paths::EVENTS_LOGINS.to_string(), query)
            .await
    }

    async fn events_system(&self, query: &ListQuery) -> Result<Value, AppError> {
        self.list_events(paths::EVENTS_SYSTEM.to_string(), query)
            .await
    }
}
