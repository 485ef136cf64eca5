use crate::application::client::Client;
use crate::application::interfaces::clients::ClientService;
use crate::constants::CLIENT_COUNT_HEADER;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::paths;
use crate::model::requests::{ClientAction, ClientCreateRequest, ClientListQuery, ClientUpdate};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

impl Client {
    async fn client_path(&self, client: &str) -> Result<String, AppError> {
        let id = self.resolve_client_id(client).await?;
        Ok(paths::with_id(paths::CLIENTS_ID, &id))
    }

    async fn client_action(
        &self,
        client: &str,
        action: &ClientAction,
        expected: StatusCode,
    ) -> Result<Value, AppError> {
        let path = self.client_path(client).await?;
        let request = ApiRequest::put(path).json(action)?;
        Ok(self.protected(request, expected).await?.into_json())
    }
}

#[async_trait]
impl ClientService for Client {
    async fn client_create(&self, name: &str, password: &str) -> Result<String, AppError> {
        info!("Creating client {:?}", name);
        let request = ApiRequest::post(paths::CLIENTS).json(&ClientCreateRequest { name, password })?;
        let response = self.protected(request, StatusCode::CREATED).await?;

        let client_id = response
            .str_field("client_id")
            .map(String::from)
            .ok_or_else(|| AppError::Deserialization("created client has no client_id".into()))?;
        debug!("Client {:?} created with id {}", name, client_id);
        Ok(client_id)
    }

    async fn client_count(&self) -> Result<u64, AppError> {
        let response = self
            .protected(ApiRequest::head(paths::CLIENTS), StatusCode::OK)
            .await?;
        response.header_count(CLIENT_COUNT_HEADER)
    }

    async fn client_list(&self, query: &ClientListQuery) -> Result<Value, AppError> {
        let request = ApiRequest::get(paths::CLIENTS).query(query)?;
        Ok(self.protected(request, StatusCode::OK).await?.into_json())
    }

    async fn client_id(&self, name: &str) -> Result<String, AppError> {
        self.lookup_client_id(name).await
    }

    async fn client_info(&self, client: &str) -> Result<Value, AppError> {
        let path = self.client_path(client).await?;
        Ok(self
            .protected(ApiRequest::get(path), StatusCode::OK)
            .await?
            .into_json())
    }

    async fn client_delete(&self, client: &str) -> Result<(), AppError> {
        let path = self.client_path(client).await?;
        info!("Deleting client {:?}", client);
        self.protected(ApiRequest::delete(path), StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    async fn client_update(&self, client: &str, update: &ClientUpdate) -> Result<(), AppError> {
        let path = self.client_path(client).await?;
        let request = ApiRequest::put(path).json(update)?;
        self.protected(request, StatusCode::OK).await?;
        Ok(())
    }

    async fn client_unenroll(&self, client: &str) -> Result<(), AppError> {
        info!("Unenrolling client {:?}", client);
        self.client_action(client, &ClientAction::Unenroll, StatusCode::ACCEPTED)
            .await?;
        Ok(())
    }

    async fn client_validate_pin(&self, client: &str, pin: &str) -> Result<Value, AppError> {
        let action = ClientAction::ValidatePin {
            current_pin: pin.to_string(),
        };
        self.client_action(client, &action, StatusCode::OK).await
    }

    async fn client_validate_password(
        &self,
        client: &str,
        password: &str,
    ) -> Result<Value, AppError> {
        let action = ClientAction::ValidatePassword {
            current_password: password.to_string(),
        };
        self.client_action(client, &action, StatusCode::OK).await
    }
}
