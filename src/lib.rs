//! # KnuVerse Client
//!
//! Asynchronous client for the KnuVerse voice-biometric authentication API.
//!
//! The crate covers the whole REST surface of a KnuVerse deployment:
//!
//! - **Authentication**: API key or user login, with the bearer token renewed
//!   automatically once it is ten minutes old
//! - **Clients**: create, list, count, update, unenroll and delete enrolled
//!   clients, validate their PIN or password
//! - **Enrollments and verifications**: start a session, upload the recorded
//!   audio (or a bypass), and fetch the result
//! - **Events, reports and settings**: audit logs, date-bounded reports,
//!   system and module settings, product key activation
//!
//! ## Example
//!
//! ```ignore
//! use knuverse_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!
//!     let id = client.client_create("alice", "secret").await?;
//!     println!("{} enrolled clients", client.client_count().await?);
//!     client.client_delete(&id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`Config::new`](application::config::Config::new) reads the environment
//! (and a `.env` file when present):
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `KNUVERSE_API_KEY` / `KNUVERSE_SECRET` | API key credentials |
//! | `KNUVERSE_USER` / `KNUVERSE_PASSWORD` | User credentials |
//! | `KNUVERSE_ACCOUNT_NUMBER` | Optional account number for user login |
//! | `KNUVERSE_SERVER` | Server, default `https://cloud.knuverse.com` |
//! | `KNUVERSE_BASE_URI` | API prefix, default `/api/v1/` |
//! | `KNUVERSE_TIMEOUT` | Request timeout in seconds |
//! | `LOGLEVEL` | Log level for [`setup_logger`](utils::logger::setup_logger) |

#![warn(missing_docs)]

/// Client, authentication, configuration and services
pub mod application;

/// Constants shared across the crate
pub mod constants;

/// Error type returned by every operation
pub mod error;

/// Transport and data models
pub mod model;

/// Commonly used types and traits
pub mod prelude;

/// Environment, identifier and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
