use crate::config::{RosterConfig, ViewConfig};
use crate::models::Entity;
use std::env;
use std::sync::Mutex;

// the process environment is global, tests touching it take turns
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: [&str; 7] = [
    "DATABASE_URL",
    "MAX_CONNECTIONS",
    "BIND_ADDRESS",
    "CORS_ALLOW_ORIGIN",
    "USER_ENTITY",
    "REDACT_ERROR_DETAILS",
    "ROSTER_API_URL",
];

// start every test from an empty slate, then apply `vars`
fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for var in VARS {
        env::remove_var(var);
    }
    for (key, val) in vars {
        env::set_var(key, val);
    }
    let result = f();
    for var in VARS {
        env::remove_var(var);
    }
    result
}

#[test]
fn test_config_defaults() {
    let config = with_env(&[("DATABASE_URL", "sqlite://roster.db")], RosterConfig::from_env)
        .expect("Should load with only DATABASE_URL set");

    assert_eq!(config.database_url, "sqlite://roster.db");
    assert_eq!(config.max_connections, 5);
    assert_eq!(config.bind_address, "0.0.0.0:8000");
    assert_eq!(config.allowed_origin, "http://localhost:3001");
    assert_eq!(config.user_entity, Entity::Employees);
    assert!(!config.redact_error_details);
}

#[test]
fn test_config_missing_database_url_is_an_error() {
    let err = with_env(&[], RosterConfig::from_env).unwrap_err();
    assert!(err.to_string().contains("DATABASE_URL"));
}

#[test]
fn test_config_unknown_entity_is_an_error() {
    let result = with_env(
        &[("DATABASE_URL", "sqlite://roster.db"), ("USER_ENTITY", "users")],
        RosterConfig::from_env,
    );
    let err = result.expect_err("Should refuse an unknown entity");
    assert!(format!("{:#}", err).contains("users"));
}

#[test]
fn test_config_overrides() {
    let config = with_env(
        &[
            ("DATABASE_URL", "sqlite://roster.db"),
            ("MAX_CONNECTIONS", "12"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("CORS_ALLOW_ORIGIN", "https://roster.example.com"),
            ("USER_ENTITY", "customers"),
            ("REDACT_ERROR_DETAILS", "true"),
        ],
        RosterConfig::from_env,
    )
    .unwrap();

    assert_eq!(config.max_connections, 12);
    assert_eq!(config.bind_address, "127.0.0.1:9000");
    assert_eq!(config.allowed_origin, "https://roster.example.com");
    assert_eq!(config.user_entity, Entity::Customers);
    assert!(config.redact_error_details);
}

// only the exact string "true" turns redaction on, junk pool sizes fall back
#[test]
fn test_config_lenient_values() {
    let config = with_env(
        &[
            ("DATABASE_URL", "sqlite://roster.db"),
            ("MAX_CONNECTIONS", "lots"),
            ("REDACT_ERROR_DETAILS", "yes"),
        ],
        RosterConfig::from_env,
    )
    .unwrap();

    assert_eq!(config.max_connections, 5);
    assert!(!config.redact_error_details);
}

#[test]
fn test_view_config() {
    let default = with_env(&[], ViewConfig::from_env);
    assert_eq!(default.api_url, "http://localhost:8000/user/list");

    let custom = with_env(
        &[("ROSTER_API_URL", "http://10.0.0.5:8000/user/list")],
        ViewConfig::from_env,
    );
    assert_eq!(custom.api_url, "http://10.0.0.5:8000/user/list");
}
