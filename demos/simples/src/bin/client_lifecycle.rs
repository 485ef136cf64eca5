use knuverse_client::prelude::*;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::connect(Config::new()).await?;
    let name = format!("demo-{}", nanoid::nanoid!(8, &nanoid::alphabet::SAFE));

    let id = client.client_create(&name, "Passw0rd!").await?;
    info!("Created client {} ({})", name, id);

    // Names and ids are interchangeable
    let info = client.client_info(&name).await?;
    info!("Client info: {}", info);

    client
        .client_update(
            &id,
            &ClientUpdate::new()
                .with_reason("demo")
                .with_verification_lock(false),
        )
        .await?;

    match client.client_validate_password(&name, "Passw0rd!").await {
        Ok(result) => info!("Password check: {}", result),
        Err(e) => warn!("Password check failed: {}", e),
    }

    client.client_delete(&id).await?;
    info!("✓ Client {} deleted", name);
    Ok(())
}
