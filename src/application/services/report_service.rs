use crate::application::client::Client;
use crate::application::interfaces::reports::ReportService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::paths;
use crate::model::requests::ReportRange;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::info;

impl Client {
    async fn report(&self, path: &str, range: &ReportRange) -> Result<Value, AppError> {
        info!("Requesting report {} from {} to {}", path, range.start, range.end);
        let mut request = ApiRequest::get(path);
        for (name, value) in range.to_params() {
            request.params.push((name.to_string(), value));
        }
        Ok(self.protected(request, StatusCode::OK).await?.into_json())
    }
}

#[async_trait]
impl ReportService for Client {
    async fn report_events_clients(&self, range: &ReportRange) -> Result<Value, AppError> {
        self.report(paths::REPORTS_EVENTS_CLIENTS, range).await
    }

    async fn report_events_system(&self, range: &ReportRange) -> Result<Value, AppError> {
        self.report(paths::REPORTS_EVENTS_SYSTEM, range).await
    }

    async fn report_verifications(&self, range: &ReportRange) -> Result<Value, AppError> {
        self.report(paths::REPORTS_VERIFICATIONS, range).await
    }
}
