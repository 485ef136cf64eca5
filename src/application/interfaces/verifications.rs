use crate::error::AppError;
use crate::model::requests::{ListQuery, VerificationRequest, VerificationUpload};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the verification service
#[async_trait]
pub trait VerificationService: Send + Sync {
    /// Starts a verification
    ///
    /// # Returns
    /// * The verification record, including the `verification_id` and the animation
    async fn verification_start(&self, request: &VerificationRequest) -> Result<Value, AppError>;

    /// Uploads the verification audio or bypass data
    async fn verification_upload(
        &self,
        verification_id: &str,
        upload: VerificationUpload,
    ) -> Result<Value, AppError>;

    /// Gets a verification record
    async fn verification_resource(&self, verification_id: &str) -> Result<Value, AppError>;

    /// Gets a verification record with a token issued for that verification
    ///
    /// This does not authenticate the client. `jwt` replaces the session token
    /// as the `Authorization` header of this request only.
    async fn verification_resource_secure(
        &self,
        verification_id: &str,
        jwt: &str,
    ) -> Result<Value, AppError>;

    /// Deletes a verification
    async fn verification_delete(&self, verification_id: &str) -> Result<(), AppError>;

    /// Lists verifications
    async fn verification_list(&self, query: &ListQuery) -> Result<Value, AppError>;

    /// Number of verifications, read from the `x-verification-count` header
    async fn verification_count(&self) -> Result<u64, AppError>;
}
