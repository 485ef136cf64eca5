/******************************************************************************
   Author: KnuVerse
   Email: support@knuverse.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{REPORT_DATE_FORMAT, SDK_USER_AGENT};
use crate::error::AppError;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::warn;

/// Capture mode for enrollments and verifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Spoken PIN
    AudioPin,
    /// Spoken pass phrase
    AudioPass,
}

/// Row doubling setting of a verification animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowDoubling {
    /// Disabled
    #[default]
    Off,
    /// Training mode
    Train,
    /// Enabled
    On,
}

/// Sort direction of list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Paging and sorting parameters shared by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Maximum number of records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of records to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    /// Column to sort by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<String>,
}

impl ListQuery {
    /// Creates an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the offset
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the sort direction and column
    pub fn with_sort(mut self, column: impl Into<String>, order: SortOrder) -> Self {
        self.sort_column = Some(column.into());
        self.sort = Some(order);
        self
    }
}

/// Filters for listing clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientListQuery {
    /// Only clients with this name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Return names only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_only: Option<bool>,
    /// Include every enrolled client regardless of paging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_enrolled: Option<bool>,
    /// Paging and sorting
    #[serde(flatten)]
    pub list: ListQuery,
}

impl ClientListQuery {
    /// Creates an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name filter
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the name-only flag
    pub fn with_name_only(mut self, name_only: bool) -> Self {
        self.name_only = Some(name_only);
        self
    }

    /// Set the all-enrolled flag
    pub fn with_all_enrolled(mut self, all_enrolled: bool) -> Self {
        self.all_enrolled = Some(all_enrolled);
        self
    }

    /// Set paging and sorting
    pub fn with_list(mut self, list: ListQuery) -> Self {
        self.list = list;
        self
    }
}

/// Body of a client creation
#[derive(Debug, Clone, Serialize)]
pub struct ClientCreateRequest<'a> {
    /// Client name
    pub name: &'a str,
    /// Client password
    pub password: &'a str,
}

/// Actions posted to a single client resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClientAction {
    /// Remove the client's enrollment
    Unenroll,
    /// Check the client's PIN
    ValidatePin {
        /// PIN to check
        current_pin: String,
    },
    /// Check the client's password
    ValidatePassword {
        /// Password to check
        current_password: String,
    },
}

/// Changes applied to a client; only the fields that are set are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientUpdate {
    /// Audit reason for the change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// New PIN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    /// Current PIN, required when changing the PIN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_pin: Option<String>,
    /// Verification speed (0, 25, 50, 75 or 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_speed: Option<u8>,
    /// Row doubling mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_doubling: Option<RowDoubling>,
    /// New password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Bypass code expiration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_expiration: Option<u32>,
    /// Maximum uses of a bypass code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_limit: Option<u32>,
    /// Minutes between bypass uses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_spacing_minutes: Option<u32>,
    /// Bypass code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_code: Option<String>,
    /// Disable the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
    /// Lock verifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_lock: Option<bool>,
    /// Lock password logins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_lock: Option<bool>,
    /// Extend the enrollment deadline by this many minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enroll_deadline_extension_minutes: Option<u32>,
    /// Enable the enrollment deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enroll_deadline_enable: Option<bool>,
    /// Windows profile name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows_profile: Option<String>,
    /// Reason for a role change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_rationale: Option<String>,
    /// Client role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl ClientUpdate {
    /// Creates an update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the audit reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Change the PIN, confirming with the current one
    pub fn with_pin(mut self, pin: impl Into<String>, current_pin: impl Into<String>) -> Self {
        self.pin = Some(pin.into());
        self.current_pin = Some(current_pin.into());
        self
    }

    /// Set the verification speed
    pub fn with_verification_speed(mut self, speed: u8) -> Self {
        self.verification_speed = Some(speed);
        self
    }

    /// Set the row doubling mode
    pub fn with_row_doubling(mut self, row_doubling: RowDoubling) -> Self {
        self.row_doubling = Some(row_doubling);
        self
    }

    /// Set a new password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Configure the bypass code
    pub fn with_bypass_code(mut self, code: impl Into<String>) -> Self {
        self.bypass_code = Some(code.into());
        self
    }

    /// Set the bypass limit
    pub fn with_bypass_limit(mut self, limit: u32) -> Self {
        self.bypass_limit = Some(limit);
        self
    }

    /// Disable or enable the client
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = Some(disabled);
        self
    }

    /// Lock or unlock verifications
    pub fn with_verification_lock(mut self, locked: bool) -> Self {
        self.verification_lock = Some(locked);
        self
    }

    /// Lock or unlock password logins
    pub fn with_password_lock(mut self, locked: bool) -> Self {
        self.password_lock = Some(locked);
        self
    }

    /// Change the role, with a rationale
    pub fn with_role(mut self, role: impl Into<String>, rationale: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self.role_rationale = Some(rationale.into());
        self
    }
}

/// Body of an enrollment start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    /// Client name
    pub name: String,
    /// Capture mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// PIN to enroll
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    /// Phone number to call for a phone enrollment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl EnrollmentRequest {
    /// Create new parameters with just the client name (required field)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: None,
            pin: None,
            phone_number: None,
        }
    }

    /// Set the mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the PIN
    pub fn with_pin(mut self, pin: impl Into<String>) -> Self {
        self.pin = Some(pin.into());
        self
    }

    /// Set the phone number
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Body of a verification start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Client name
    pub name: String,
    /// Identifies this SDK to the server
    pub user_agent: String,
    /// Capture mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// Verification speed (0, 25, 50, 75 or 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_speed: Option<u8>,
    /// Row doubling mode, `off` unless changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_doubling: Option<RowDoubling>,
    /// Phone number to call for a phone verification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl VerificationRequest {
    /// Create new parameters for a client name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_agent: SDK_USER_AGENT.to_string(),
            mode: None,
            verification_speed: None,
            row_doubling: Some(RowDoubling::Off),
            phone_number: None,
        }
    }

    /// Set the mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the verification speed
    pub fn with_verification_speed(mut self, speed: u8) -> Self {
        self.verification_speed = Some(speed);
        self
    }

    /// Set or clear the row doubling mode
    pub fn with_row_doubling(mut self, row_doubling: Option<RowDoubling>) -> Self {
        self.row_doubling = row_doubling;
        self
    }

    /// Set the phone number
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Audio recording uploaded for an enrollment or verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    /// File name reported to the server
    pub file_name: String,
    /// File content
    pub bytes: Vec<u8>,
}

impl AudioFile {
    /// Creates an upload from in-memory content
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Reads a file from disk; the handle is closed before this returns
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::Request(format!("{} has no file name", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self { file_name, bytes })
    }

    /// Multipart form with the file part and a `file` field naming it
    pub fn into_form(self) -> Form {
        let part = Part::bytes(self.bytes).file_name(self.file_name.clone());
        Form::new()
            .part(self.file_name.clone(), part)
            .text("file", self.file_name)
    }
}

/// Data uploaded to complete a verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationUpload {
    /// Recorded answer to the verification animation
    Audio(AudioFile),
    /// Bypass with the client's PIN or a one-time bypass code
    Bypass {
        /// Client PIN
        pin: Option<String>,
        /// Bypass code
        bypass_code: Option<String>,
    },
}

impl VerificationUpload {
    /// Multipart form for this upload
    pub fn into_form(self) -> Form {
        match self {
            VerificationUpload::Audio(audio) => audio.into_form(),
            VerificationUpload::Bypass { pin, bypass_code } => {
                let mut form = Form::new().text("bypass", "true");
                if let Some(code) = bypass_code {
                    form = form.text("bypass_code", code);
                }
                if let Some(pin) = pin {
                    form = form.text("pin", pin);
                }
                form
            }
        }
    }
}

/// Name of the confirmation field added by the client to settings changes
pub const AUTH_PASSWORD_FIELD: &str = "auth_password";

/// Free-form settings change; only the fields that are set are sent
///
/// The `auth_password` confirmation is owned by the client session and is
/// never taken from an update; setting it here is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct SettingsUpdate {
    fields: Map<String, Value>,
}

impl From<Map<String, Value>> for SettingsUpdate {
    fn from(mut fields: Map<String, Value>) -> Self {
        if fields.remove(AUTH_PASSWORD_FIELD).is_some() {
            warn!("Ignoring {AUTH_PASSWORD_FIELD} in a settings update");
        }
        Self { fields }
    }
}

impl From<SettingsUpdate> for Map<String, Value> {
    fn from(update: SettingsUpdate) -> Self {
        update.fields
    }
}

impl SettingsUpdate {
    /// Creates an update that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one setting; `auth_password` is ignored
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if name == AUTH_PASSWORD_FIELD {
            warn!("Ignoring {AUTH_PASSWORD_FIELD} in a settings update");
            return self;
        }
        self.fields.insert(name, value.into());
        self
    }

    /// Whether no setting is changed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Payload echoing the account password to confirm a privileged change
#[derive(Debug, Clone, Serialize)]
pub struct Confirmed<'a, T: Serialize> {
    /// The change being confirmed
    #[serde(flatten)]
    pub inner: T,
    /// Account password, omitted for API key sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_password: Option<&'a str>,
}

/// Body of a product key activation
#[derive(Debug, Clone, Serialize)]
pub struct ProductKeyRequest<'a> {
    /// Product key to activate
    pub product_key: &'a str,
}

/// Time window of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    /// Start of the window
    pub start: DateTime<Utc>,
    /// End of the window
    pub end: DateTime<Utc>,
}

impl ReportRange {
    /// Creates a range from two UTC instants
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Parses a range from text
    ///
    /// Accepts RFC 3339 (`2026-01-31T08:00:00Z`) or `YYYY-MM-DD HH:MM:SS`,
    /// the latter read as UTC.
    ///
    /// # Returns
    /// * `Err(AppError::Request)` - Either value is not a date-time
    pub fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        Ok(Self::new(
            parse_date_time("start_date", start)?,
            parse_date_time("end_date", end)?,
        ))
    }

    /// Query parameters in the server's fixed date format
    pub fn to_params(&self) -> [(&'static str, String); 2] {
        [
            ("start_date", self.start.format(REPORT_DATE_FORMAT).to_string()),
            ("end_date", self.end.format(REPORT_DATE_FORMAT).to_string()),
        ]
    }
}

fn parse_date_time(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, REPORT_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| AppError::Request(format!("{field} must be a date-time value, got {value:?}")))
}
