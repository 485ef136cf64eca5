/******************************************************************************
   Author: KnuVerse
   Email: support@knuverse.com
   Date: 16/10/26
******************************************************************************/

//! # KnuVerse Client Prelude
//!
//! Brings the client, its configuration, the service traits and the request
//! models into scope with a single import.
//!
//! ```rust
//! use knuverse_client::prelude::*;
//!
//! let config = Config::with_api_key("key", "secret").server("knuverse.example.com");
//! assert_eq!(config.base_url(), "https://knuverse.example.com/api/v1/");
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::config::{Config, Credentials, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERRORS
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

pub use crate::application::auth::Auth;
pub use crate::application::client::Client;
pub use crate::model::auth::AuthToken;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::services::{
    ClientService, EnrollmentService, EventService, GeneralService, ReportService,
    SettingsService, VerificationService,
};

// ============================================================================
// REQUEST MODELS
// ============================================================================

pub use crate::model::requests::{
    AudioFile, ClientListQuery, ClientUpdate, EnrollmentRequest, ListQuery, Mode, ReportRange,
    RowDoubling, SettingsUpdate, SortOrder, VerificationRequest, VerificationUpload,
};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::config::{get_env_or_default, get_env_or_none};
pub use crate::utils::id::is_resource_id;
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use async_trait::async_trait;
pub use serde_json::Value;
