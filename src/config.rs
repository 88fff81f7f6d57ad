use crate::models::Entity;
use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct RosterConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: String,
    pub allowed_origin: String,
    pub user_entity: Entity,
    pub redact_error_details: bool,
}

impl RosterConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .context("Failed to determine DATABASE_URL from environment variables")?;

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(5);

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let allowed_origin = std::env::var("CORS_ALLOW_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3001".to_string());

        // which table answers for the /user resource
        let user_entity = std::env::var("USER_ENTITY")
            .unwrap_or_else(|_| "employees".to_string())
            .parse::<Entity>()
            .context("Failed to parse USER_ENTITY")?;

        let redact_error_details = std::env::var("REDACT_ERROR_DETAILS")
            .unwrap_or_else(|_| "false".to_string())
            == "true";

        Ok(Self {
            database_url,
            max_connections,
            bind_address,
            allowed_origin,
            user_entity,
            redact_error_details,
        })
    }
}

/// Settings for the `roster-view` client.
#[derive(Clone, Debug)]
pub struct ViewConfig {
    pub api_url: String,
}

impl ViewConfig {
    pub fn from_env() -> Self {
        let api_url = std::env::var("ROSTER_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000/user/list".to_string());

        Self { api_url }
    }
}
