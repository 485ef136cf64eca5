//! Endpoint paths relative to the API base URL
//!
//! Templated paths take a resolved resource id through [`with_id`].

/// Authentication
pub const AUTH: &str = "auth";
/// Token refresh
pub const AUTH_REFRESH: &str = "auth/refresh";

/// Client collection
pub const CLIENTS: &str = "clients";
/// Single client
pub const CLIENTS_ID: &str = "clients/{id}";

/// Enrollment collection
pub const ENROLLMENTS: &str = "enrollments";
/// Single enrollment
pub const ENROLLMENTS_ID: &str = "enrollments/{id}";

/// All events
pub const EVENTS: &str = "events";
/// Client events
pub const EVENTS_CLIENTS: &str = "events/clients";
/// Events of a single client
pub const EVENTS_CLIENTS_ID: &str = "events/clients/{id}";
/// Login events
pub const EVENTS_LOGINS: &str = "events/logins";
/// System events
pub const EVENTS_SYSTEM: &str = "events/system";

/// Server information
pub const ABOUT: &str = "about";
/// Service status
pub const STATUS: &str = "status";
/// Service warnings
pub const STATUS_WARNINGS: &str = "status/warnings";

/// Module settings
pub const SETTINGS_MODULES: &str = "settings/modules";
/// System settings
pub const SETTINGS_SYSTEM: &str = "settings/system";

/// Product key
pub const PRODUCTKEY: &str = "productkey";

/// Client events report
pub const REPORTS_EVENTS_CLIENTS: &str = "reports/events/clients";
/// System events report
pub const REPORTS_EVENTS_SYSTEM: &str = "reports/events/system";
/// Verifications report
pub const REPORTS_VERIFICATIONS: &str = "reports/verifications";

/// Verification collection
pub const VERIFICATIONS: &str = "verifications";
/// Single verification
pub const VERIFICATIONS_ID: &str = "verifications/{id}";

/// Substitutes `id` into the `{id}` placeholder of a templated path
pub fn with_id(template: &str, id: &str) -> String {
    template.replace("{id}", id)
}
