use knuverse_client::prelude::*;
use std::env;

#[test]
fn test_config_from_environment_prefers_api_key() {
    unsafe {
        env::set_var("KNUVERSE_API_KEY", "env-key");
        env::set_var("KNUVERSE_SECRET", "env-secret");
        env::set_var("KNUVERSE_USER", "env-user");
        env::set_var("KNUVERSE_SERVER", "knuverse.internal:8443");
        env::set_var("KNUVERSE_BASE_URI", "/api/v2");
        env::set_var("KNUVERSE_TIMEOUT", "15");
    }

    let config = Config::new();

    unsafe {
        for var in [
            "KNUVERSE_API_KEY",
            "KNUVERSE_SECRET",
            "KNUVERSE_USER",
            "KNUVERSE_SERVER",
            "KNUVERSE_BASE_URI",
            "KNUVERSE_TIMEOUT",
        ] {
            env::remove_var(var);
        }
    }

    assert_eq!(
        config.credentials,
        Credentials::ApiKey {
            key_id: "env-key".into(),
            secret: "env-secret".into(),
        }
    );
    assert_eq!(config.rest_api.timeout, Some(15));
    assert_eq!(config.base_url(), "https://knuverse.internal:8443/api/v2/");
}

#[test]
fn test_builders() {
    let config = Config::with_user("admin", "pw", Some("1001".into()))
        .server("http://localhost:8080/")
        .timeout(5);
    assert_eq!(config.base_url(), "http://localhost:8080/api/v1/");
    assert_eq!(config.rest_api.timeout, Some(5));
    assert_eq!(config.credentials.password(), Some("pw"));

    let knufactor = config.knufactor();
    assert_eq!(knufactor.base_url(), "http://localhost:8080/knufactor/api/v1/");
}

#[test]
fn test_serialized_config_hides_secrets() {
    let config = Config::with_api_key("key", "very-secret");
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"key_id\":\"key\""));
    assert!(!json.contains("very-secret"));
}
