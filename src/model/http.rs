/******************************************************************************
   Author: KnuVerse
   Email: support@knuverse.com
   Date: 16/10/26
******************************************************************************/

//! HTTP transport for the KnuVerse API
//!
//! [`HttpClient`] sends one [`ApiRequest`] and normalises the outcome into an
//! [`ApiResponse`]. It keeps the persistent default headers (`Accept` and,
//! once authenticated, `Authorization`) that are merged into every request.
//! Status checking is separate: callers pass the response to [`check_status`]
//! with the single code their operation expects.

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue,
};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Payload carried by a request
#[derive(Debug, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON body, sent with `Content-Type: application/json`
    Json(Value),
    /// `multipart/form-data` body
    Multipart(Form),
}

/// Description of a single API call
#[derive(Debug)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API base URL, placeholders already resolved
    pub path: String,
    /// Request payload
    pub body: RequestBody,
    /// Query parameters
    pub params: Vec<(String, String)>,
    /// Extra headers; the client's default headers win on conflicts
    pub headers: HeaderMap,
    /// Bearer token sent instead of the session token
    pub bearer: Option<String>,
}

impl ApiRequest {
    /// Creates a request without body, parameters or extra headers
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
            params: Vec::new(),
            headers: HeaderMap::new(),
            bearer: None,
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// HEAD request
    pub fn head(path: impl Into<String>) -> Self {
        Self::new(Method::HEAD, path)
    }

    /// Attaches a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Authorizes this request with `jwt` instead of the session token
    pub fn with_bearer(mut self, jwt: impl Into<String>) -> Self {
        self.bearer = Some(jwt.into());
        self
    }

    /// Attaches a multipart body
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Adds query parameters from a serializable value
    ///
    /// `query` must serialize to a JSON object. Null members are skipped,
    /// strings are sent verbatim and other scalars use their JSON text.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self, AppError> {
        match serde_json::to_value(query)? {
            Value::Object(map) => {
                for (key, value) in map {
                    match value {
                        Value::Null => {}
                        Value::String(s) => self.params.push((key, s)),
                        other => self.params.push((key, other.to_string())),
                    }
                }
                Ok(self)
            }
            Value::Null => Ok(self),
            other => Err(AppError::Request(format!(
                "query parameters must be an object, got {other}"
            ))),
        }
    }

    /// Adds an extra header
    pub fn header(mut self, name: HeaderName, value: &str) -> Result<Self, AppError> {
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::Request(format!("invalid value for header {name}: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }
}

/// Outcome of a single API call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text
    pub text: String,
    /// Decoded body; `None` when the body is empty or not JSON
    pub json: Option<Value>,
}

impl ApiResponse {
    /// Reads status, headers and body from a reqwest response
    pub async fn from_response(response: Response) -> Result<Self, AppError> {
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;
        let json = serde_json::from_str(&text).ok();
        Ok(Self {
            status,
            headers,
            text,
            json,
        })
    }

    /// Decoded body, or JSON null when there was none
    #[must_use]
    pub fn into_json(self) -> Value {
        self.json.unwrap_or(Value::Null)
    }

    /// String member `field` of the decoded body
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.json.as_ref()?.get(field)?.as_str()
    }

    /// Parses a numeric response header such as `x-client-count`
    pub fn header_count(&self, name: &str) -> Result<u64, AppError> {
        let value = self
            .headers
            .get(name)
            .ok_or_else(|| AppError::Deserialization(format!("missing {name} header")))?;
        value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .ok_or_else(|| AppError::Deserialization(format!("invalid {name} header: {value:?}")))
    }
}

/// Compares the response status to the single code the operation expects
///
/// # Returns
/// * `Ok(())` - The status matches
/// * `Err(AppError)` - The kind mapped by [`AppError::from_status`], carrying the response text
pub fn check_status(response: &ApiResponse, expected: StatusCode) -> Result<(), AppError> {
    if response.status == expected {
        return Ok(());
    }
    error!(
        "Request failed with status {} (expected {}): {}",
        response.status, expected, response.text
    );
    Err(AppError::from_status(response.status, response.text.clone()))
}

fn bearer_value(jwt: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {jwt}"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// HTTP transport with persistent default headers
pub struct HttpClient {
    client: Client,
    base_url: String,
    default_headers: RwLock<HeaderMap>,
}

impl HttpClient {
    /// Creates a transport for the configured server
    ///
    /// # Arguments
    /// * `config` - Configuration providing the base URL and timeout
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url(),
            default_headers: RwLock::new(default_headers),
        })
    }

    /// Root URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a path relative to the API root
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends a request and reads the whole response
    ///
    /// The status is not checked here; see [`check_status`].
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let url = self.url(&request.path);
        debug!("{} {}", request.method, url);

        let mut headers = request.headers;
        {
            let defaults = self.default_headers.read().await;
            for (name, value) in defaults.iter() {
                headers.insert(name.clone(), value.clone());
            }
        }
        if let Some(jwt) = request.bearer.as_deref() {
            let value = bearer_value(jwt)
                .map_err(|e| AppError::Request(format!("jwt is not a valid header value: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = self.client.request(request.method, &url).headers(headers);
        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let response = builder.send().await?;
        debug!("Response status: {}", response.status());
        ApiResponse::from_response(response).await
    }

    /// Installs `Authorization: Bearer <jwt>` into the default headers
    pub async fn set_bearer(&self, jwt: &str) -> Result<(), AppError> {
        let value = bearer_value(jwt).map_err(|e| {
            AppError::Deserialization(format!("jwt is not a valid header value: {e}"))
        })?;
        self.default_headers.write().await.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Removes the `Authorization` default header
    pub async fn clear_bearer(&self) {
        self.default_headers.write().await.remove(AUTHORIZATION);
    }

    /// Snapshot of the default headers
    pub async fn default_headers(&self) -> HeaderMap {
        self.default_headers.read().await.clone()
    }
}
