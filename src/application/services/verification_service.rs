use crate::application::client::Client;
use crate::application::interfaces::verifications::VerificationService;
use crate::constants::VERIFICATION_COUNT_HEADER;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::paths;
use crate::model::requests::{ListQuery, VerificationRequest, VerificationUpload};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::info;

#[async_trait]
impl VerificationService for Client {
    async fn verification_start(&self, request: &VerificationRequest) -> Result<Value, AppError> {
        info!("Starting verification for {:?}", request.name);
        let request = ApiRequest::post(paths::VERIFICATIONS).json(request)?;
        Ok(self
            .protected(request, StatusCode::CREATED)
            .await?
            .into_json())
    }

    async fn verification_upload(
        &self,
        verification_id: &str,
        upload: VerificationUpload,
    ) -> Result<Value, AppError> {
        let path = paths::with_id(paths::VERIFICATIONS_ID, verification_id);
        let request = ApiRequest::put(path).multipart(upload.into_form());
        Ok(self
            .protected(request, StatusCode::ACCEPTED)
            .await?
            .into_json())
    }

    async fn verification_resource(&self, verification_id: &str) -> Result<Value, AppError> {
        let path = paths::with_id(paths::VERIFICATIONS_ID, verification_id);
        Ok(self
            .protected(ApiRequest::get(path), StatusCode::OK)
            .await?
            .into_json())
    }

    async fn verification_resource_secure(
        &self,
        verification_id: &str,
        jwt: &str,
    ) -> Result<Value, AppError> {
        let path = paths::with_id(paths::VERIFICATIONS_ID, verification_id);
        let request = ApiRequest::get(path).with_bearer(jwt);
        Ok(self.public(request, StatusCode::OK).await?.into_json())
    }

    async fn verification_delete(&self, verification_id: &str) -> Result<(), AppError> {
        let path = paths::with_id(paths::VERIFICATIONS_ID, verification_id);
        self.protected(ApiRequest::delete(path), StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    async fn verification_list(&self, query: &ListQuery) -> Result<Value, AppError> {
        let request = ApiRequest::get(paths::VERIFICATIONS).query(query)?;
        Ok(self.protected(request, StatusCode::OK).await?.into_json())
    }

    async fn verification_count(&self) -> Result<u64, AppError> {
        let response = self
            .protected(ApiRequest::head(paths::VERIFICATIONS), StatusCode::OK)
            .await?;
        response.header_count(VERIFICATION_COUNT_HEADER)
    }
}
