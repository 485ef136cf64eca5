use crate::application::client::Client;
use crate::application::interfaces::general::GeneralService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::paths;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

#[async_trait]
impl GeneralService for Client {
    async fn about(&self) -> Result<Value, AppError> {
        Ok(self
            .public(ApiRequest::get(paths::ABOUT), StatusCode::OK)
            .await?
            .into_json())
    }

    async fn status(&self) -> Result<Value, AppError> {
        Ok(self
            .protected(ApiRequest::get(paths::STATUS), StatusCode::OK)
            .await?
            .into_json())
    }

    async fn warnings(&self) -> Result<Value, AppError> {
        Ok(self
            .protected(ApiRequest::get(paths::STATUS_WARNINGS), StatusCode::OK)
            .await?
            .into_json())
    }
}
