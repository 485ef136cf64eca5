use knuverse_client::prelude::*;
use std::env;
use tracing::info;

/// Starts an enrollment and uploads a recording
///
/// Usage: `enrollment_example <client name> <pin> <recording.wav>`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let args: Vec<String> = env::args().skip(1).collect();
    let [name, pin, recording] = args.as_slice() else {
        eprintln!("usage: enrollment_example <client name> <pin> <recording.wav>");
        std::process::exit(2);
    };

    let client = Client::new(Config::new())?;

    let enrollment = client
        .enrollment_start(&EnrollmentRequest::new(name.as_str()).with_pin(pin.as_str()))
        .await?;
    info!("Enrollment started: {}", enrollment);

    let enrollment_id = enrollment["enrollment_id"]
        .as_str()
        .ok_or("server did not return an enrollment_id")?;

    let audio = AudioFile::from_path(recording).await?;
    let upload = client.enrollment_upload(enrollment_id, audio).await?;
    info!("Upload accepted: {}", upload);

    let state = client.enrollment_resource(enrollment_id).await?;
    info!("Enrollment state: {}", state);
    Ok(())
}
