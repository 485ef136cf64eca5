use assert_json_diff::{assert_json_eq, assert_json_include};
use knuverse_client::model::requests::ProductKeyRequest;
use knuverse_client::prelude::*;
use serde_json::json;

#[test]
fn test_client_update_sends_only_changed_fields() {
    let update = ClientUpdate::new()
        .with_pin("4321", "1234")
        .with_verification_speed(25)
        .with_row_doubling(RowDoubling::On)
        .with_role("admin", "promoted");
    assert_json_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({
            "pin": "4321",
            "current_pin": "1234",
            "verification_speed": 25,
            "row_doubling": "on",
            "role": "admin",
            "role_rationale": "promoted"
        })
    );
}

#[test]
fn test_client_update_locks() {
    let update = ClientUpdate::new()
        .with_verification_lock(false)
        .with_password_lock(true)
        .with_bypass_code("123456")
        .with_bypass_limit(3);
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({
            "verification_lock": false,
            "password_lock": true,
            "bypass_code": "123456",
            "bypass_limit": 3
        })
    );
}

#[test]
fn test_verification_without_row_doubling() {
    let request = VerificationRequest::new("alice")
        .with_row_doubling(None)
        .with_phone_number("+15555550100");
    let body = serde_json::to_value(&request).unwrap();
    assert!(body.get("row_doubling").is_none());
    assert_json_include!(
        actual: body,
        expected: json!({"name": "alice", "phone_number": "+15555550100"})
    );
}

#[test]
fn test_settings_update_collects_fields() {
    let update = SettingsUpdate::new();
    assert!(update.is_empty());
    let update = update.set("retention_days", 30).set("sso", true);
    assert!(!update.is_empty());
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({"retention_days": 30, "sso": true})
    );
}

#[test]
fn test_product_key_body() {
    let body = serde_json::to_value(ProductKeyRequest { product_key: "K-1" }).unwrap();
    assert_eq!(body, json!({"product_key": "K-1"}));
}
