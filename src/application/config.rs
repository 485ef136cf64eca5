use crate::constants::{DEFAULT_BASE_URI, DEFAULT_SERVER, KNUFACTOR_BASE_URI};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Authentication credentials for the KnuVerse API
///
/// Secrets are never serialized, so printing a [`Config`] does not leak them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credentials {
    /// API key pair issued for server-to-server integrations
    ApiKey {
        /// API key id
        key_id: String,
        /// API secret
        #[serde(skip_serializing, default)]
        secret: String,
    },
    /// Account user login
    User {
        /// User name or email
        user: String,
        /// Account password, also echoed when confirming settings changes
        #[serde(skip_serializing, default)]
        password: String,
        /// Account number, needed when the user belongs to several accounts
        #[serde(skip_serializing_if = "Option::is_none", default)]
        account_number: Option<String>,
    },
}

impl Credentials {
    /// Password to echo as `auth_password` on confirmation-protected operations
    ///
    /// API key credentials have no password and return `None`.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        match self {
            Credentials::ApiKey { .. } => None,
            Credentials::User { password, .. } => Some(password.as_str()),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the KnuVerse API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Server host, with or without scheme
    pub server: String,
    /// API base path appended to the server, e.g. `/api/v1/`
    pub base_uri: String,
    /// Optional request timeout in seconds; unset means the transport default
    pub timeout: Option<u64>,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            base_uri: DEFAULT_BASE_URI.to_string(),
            timeout: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads:
    /// * `KNUVERSE_API_KEY` / `KNUVERSE_SECRET` - API key credentials
    /// * `KNUVERSE_USER` / `KNUVERSE_PASSWORD` / `KNUVERSE_ACCOUNT_NUMBER` - user credentials
    /// * `KNUVERSE_SERVER` - server host (default `https://cloud.knuverse.com`)
    /// * `KNUVERSE_BASE_URI` - API base path (default `/api/v1/`)
    /// * `KNUVERSE_TIMEOUT` - request timeout in seconds
    ///
    /// API key credentials take precedence when both sets are configured.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key: Option<String> = get_env_or_none("KNUVERSE_API_KEY");

        let credentials = match api_key {
            Some(key_id) => {
                let secret: Option<String> = get_env_or_none("KNUVERSE_SECRET");
                if secret.is_none() {
                    error!("KNUVERSE_SECRET not found in environment variables or .env file");
                }
                Credentials::ApiKey {
                    key_id,
                    secret: secret.unwrap_or_default(),
                }
            }
            None => {
                let user = get_env_or_default("KNUVERSE_USER", String::from("default_user"));
                let password =
                    get_env_or_default("KNUVERSE_PASSWORD", String::from("default_password"));
                if user == "default_user" {
                    error!("Neither KNUVERSE_API_KEY nor KNUVERSE_USER found in environment");
                }
                if password == "default_password" {
                    error!("KNUVERSE_PASSWORD not found in environment variables or .env file");
                }
                Credentials::User {
                    user,
                    password,
                    account_number: get_env_or_none("KNUVERSE_ACCOUNT_NUMBER"),
                }
            }
        };

        Config {
            credentials,
            rest_api: RestApiConfig {
                server: get_env_or_default("KNUVERSE_SERVER", DEFAULT_SERVER.to_string()),
                base_uri: get_env_or_default("KNUVERSE_BASE_URI", DEFAULT_BASE_URI.to_string()),
                timeout: get_env_or_none("KNUVERSE_TIMEOUT"),
            },
        }
    }

    /// Creates a configuration authenticating with an API key pair
    pub fn with_api_key(key_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::ApiKey {
                key_id: key_id.into(),
                secret: secret.into(),
            },
            rest_api: RestApiConfig::default(),
        }
    }

    /// Creates a configuration authenticating as a user
    pub fn with_user(
        user: impl Into<String>,
        password: impl Into<String>,
        account_number: Option<String>,
    ) -> Self {
        Self {
            credentials: Credentials::User {
                user: user.into(),
                password: password.into(),
                account_number,
            },
            rest_api: RestApiConfig::default(),
        }
    }

    /// Sets the server host
    #[must_use]
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.rest_api.server = server.into();
        self
    }

    /// Sets the API base path
    #[must_use]
    pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.rest_api.base_uri = base_uri.into();
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.rest_api.timeout = Some(seconds);
        self
    }

    /// Switches to the Knufactor API base path
    #[must_use]
    pub fn knufactor(self) -> Self {
        self.base_uri(KNUFACTOR_BASE_URI)
    }

    /// Root URL every request path is appended to
    ///
    /// `https://` is prepended when the server has no scheme, and the base
    /// path is normalised to start and end with a single `/`.
    #[must_use]
    pub fn base_url(&self) -> String {
        let server = self.rest_api.server.trim().trim_end_matches('/');
        let server = if server.starts_with("http://") || server.starts_with("https://") {
            server.to_string()
        } else {
            format!("https://{server}")
        };

        let base_uri = self.rest_api.base_uri.trim().trim_matches('/');
        if base_uri.is_empty() {
            format!("{server}/")
        } else {
            format!("{server}/{base_uri}/")
        }
    }
}
