use crate::error::AppError;
use crate::model::requests::ReportRange;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for reports
///
/// Build the range with [`ReportRange::new`] from UTC instants, or with
/// [`ReportRange::parse`], which rejects non date-time text before any request.
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Report of client events in the range
    async fn report_events_clients(&self, range: &ReportRange) -> Result<Value, AppError>;

    /// Report of system events in the range
    async fn report_events_system(&self, range: &ReportRange) -> Result<Value, AppError>;

    /// Report of verifications in the range
    async fn report_verifications(&self, range: &ReportRange) -> Result<Value, AppError>;
}
