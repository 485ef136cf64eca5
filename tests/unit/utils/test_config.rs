use knuverse_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_reads_value() {
    unsafe {
        env::set_var("KNUVERSE_TEST_STRING", "value");
        let result: String = get_env_or_default("KNUVERSE_TEST_STRING", "default".to_string());
        assert_eq!(result, "value");
        env::remove_var("KNUVERSE_TEST_STRING");
    }
}

#[test]
fn test_get_env_or_default_missing_or_blank() {
    unsafe {
        env::remove_var("KNUVERSE_TEST_MISSING");
        let result: u64 = get_env_or_default("KNUVERSE_TEST_MISSING", 7);
        assert_eq!(result, 7);

        env::set_var("KNUVERSE_TEST_BLANK", "   ");
        let result: String = get_env_or_default("KNUVERSE_TEST_BLANK", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("KNUVERSE_TEST_BLANK");
    }
}

#[test]
fn test_get_env_or_default_invalid_number() {
    unsafe {
        env::set_var("KNUVERSE_TEST_INVALID", "ten");
        let result: u64 = get_env_or_default("KNUVERSE_TEST_INVALID", 10);
        assert_eq!(result, 10);
        env::remove_var("KNUVERSE_TEST_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("KNUVERSE_TEST_TIMEOUT", " 30 ");
        let timeout: Option<u64> = get_env_or_none("KNUVERSE_TEST_TIMEOUT");
        assert_eq!(timeout, Some(30));

        env::set_var("KNUVERSE_TEST_TIMEOUT", "soon");
        let timeout: Option<u64> = get_env_or_none("KNUVERSE_TEST_TIMEOUT");
        assert_eq!(timeout, None);
        env::remove_var("KNUVERSE_TEST_TIMEOUT");

        let missing: Option<String> = get_env_or_none("KNUVERSE_TEST_TIMEOUT");
        assert!(missing.is_none());
    }
}
