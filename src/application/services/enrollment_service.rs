use crate::application::client::Client;
use crate::application::interfaces::enrollments::EnrollmentService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::paths;
use crate::model::requests::{AudioFile, EnrollmentRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::info;

#[async_trait]
impl EnrollmentService for Client {
    async fn enrollment_start(&self, request: &EnrollmentRequest) -> Result<Value, AppError> {
        info!("Starting enrollment for {:?}", request.name);
        let request = ApiRequest::post(paths::ENROLLMENTS).json(request)?;
        Ok(self
            .protected(request, StatusCode::CREATED)
            .await?
            .into_json())
    }

    async fn enrollment_upload(
        &self,
        enrollment_id: &str,
        audio: AudioFile,
    ) -> Result<Value, AppError> {
        info!("Uploading {} for enrollment {}", audio.file_name, enrollment_id);
        let path = paths::with_id(paths::ENROLLMENTS_ID, enrollment_id);
        let request = ApiRequest::put(path).multipart(audio.into_form());
        Ok(self
            .protected(request, StatusCode::ACCEPTED)
            .await?
            .into_json())
    }

    async fn enrollment_resource(&self, enrollment_id: &str) -> Result<Value, AppError> {
        let path = paths::with_id(paths::ENROLLMENTS_ID, enrollment_id);
        Ok(self
            .protected(ApiRequest::get(path), StatusCode::OK)
            .await?
            .into_json())
    }
}
