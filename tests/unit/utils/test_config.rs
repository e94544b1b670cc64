use monster_client::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("MC_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("MC_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("MC_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("MC_MISSING_VAR");
        let result: String = get_env_or_default("MC_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_trims_and_parses() {
    unsafe {
        env::set_var("MC_TEST_VAR_INT", " 42 ");
        let result: u64 = get_env_or_default("MC_TEST_VAR_INT", 0);
        assert_eq!(result, 42);
        env::remove_var("MC_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("MC_TEST_VAR_INVALID", "not_a_number");
        let result: i32 = get_env_or_default("MC_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("MC_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("MC_TEST_VAR_OPTION", "127.0.0.1:1080");
        let result: Option<String> = get_env_or_none("MC_TEST_VAR_OPTION");
        assert_eq!(result.as_deref(), Some("127.0.0.1:1080"));

        env::set_var("MC_TEST_VAR_OPTION", "  ");
        let result: Option<String> = get_env_or_none("MC_TEST_VAR_OPTION");
        assert_eq!(result, None);

        env::remove_var("MC_TEST_VAR_OPTION");
        let result: Option<String> = get_env_or_none("MC_TEST_VAR_OPTION");
        assert_eq!(result, None);
    }
}

#[test]
fn test_get_env_flag() {
    unsafe {
        for (raw, expected) in [("1", true), ("TRUE", true), ("yes", true), ("off", false), ("0", false)] {
            env::set_var("MC_TEST_FLAG", raw);
            assert_eq!(get_env_flag("MC_TEST_FLAG", !expected), expected, "value {raw}");
        }

        env::set_var("MC_TEST_FLAG", "maybe");
        assert!(get_env_flag("MC_TEST_FLAG", true));
        assert!(!get_env_flag("MC_TEST_FLAG", false));

        env::remove_var("MC_TEST_FLAG");
        assert!(get_env_flag("MC_TEST_FLAG", true));
    }
}
