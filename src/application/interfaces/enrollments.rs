use crate::error::AppError;
use crate::model::requests::{AudioFile, EnrollmentRequest};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the enrollment service
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// Starts an enrollment
    ///
    /// # Returns
    /// * The enrollment record, including the `enrollment_id` and the animation to record
    async fn enrollment_start(&self, request: &EnrollmentRequest) -> Result<Value, AppError>;

    /// Uploads the recorded enrollment audio
    ///
    /// The server accepts the upload with 202 and processes it asynchronously;
    /// poll [`EnrollmentService::enrollment_resource`] for the outcome.
    async fn enrollment_upload(
        &self,
        enrollment_id: &str,
        audio: AudioFile,
    ) -> Result<Value, AppError>;

    /// Gets an enrollment record
    async fn enrollment_resource(&self, enrollment_id: &str) -> Result<Value, AppError>;
}
