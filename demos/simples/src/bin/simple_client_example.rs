use knuverse_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple client example");

    // Authentication happens on the first protected call
    let client = Client::new(Config::new())?;

    let about = client.about().await?;
    info!("Server: {}", serde_json::to_string_pretty(&about)?);

    let count = client.client_count().await?;
    info!("✓ {} clients on this deployment", count);

    let status = client.status().await?;
    info!("Status: {}", status);

    Ok(())
}
