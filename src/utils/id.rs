use once_cell::sync::Lazy;
use regex::Regex;

static RESOURCE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-f]{32}$").expect("resource id pattern is valid"));

/// Checks whether `value` is a server-assigned resource identifier
///
/// Client, enrollment and verification records are addressed by a
/// 32-character lowercase hexadecimal id. Anything else passed where a client
/// is expected is treated as a client name and has to be looked up first.
///
/// # Examples
/// ```
/// use knuverse_client::utils::id::is_resource_id;
///
/// assert!(is_resource_id("5f1c3b7a9e2d4c6b8a0f1e3d5c7b9a2e"));
/// assert!(!is_resource_id("alice"));
/// ```
#[must_use]
pub fn is_resource_id(value: &str) -> bool {
    RESOURCE_ID.is_match(value)
}
