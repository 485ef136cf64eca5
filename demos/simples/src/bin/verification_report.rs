use chrono::{Duration, Utc};
use knuverse_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::new(Config::new())?;

    let total = client.verification_count().await?;
    info!("{} verifications recorded", total);

    let recent = client
        .verification_list(&ListQuery::new().with_limit(10).with_sort("date", SortOrder::Desc))
        .await?;
    info!("Latest verifications: {}", recent);

    let end = Utc::now();
    let range = ReportRange::new(end - Duration::days(7), end);
    let report = client.report_verifications(&range).await?;
    info!("Weekly report: {}", report);

    Ok(())
}
