// Common utilities for integration tests

use knuverse_client::prelude::*;
use tokio::runtime::Runtime;
use tracing::info;

/// Creates a client from the environment
pub fn create_test_client() -> Client {
    setup_logger();
    Client::new(Config::new()).expect("Failed to create client")
}

/// Creates a client and logs in, blocking until done
pub fn connected_client() -> Client {
    setup_logger();
    let rt = Runtime::new().expect("Failed to create runtime");
    rt.block_on(async {
        let client = Client::connect(Config::new())
            .await
            .expect("Failed to login");
        info!("Logged in to {}", client.config().base_url());
        client
    })
}

/// Unique client name so runs do not collide
pub fn unique_client_name() -> String {
    format!("rust-it-{}", nanoid::nanoid!(10, &nanoid::alphabet::SAFE))
}
