use anyhow::Context;
use roster_server::config::RosterConfig;
use roster_server::database::sqlite::SqliteDatabase;
use roster_server::telemetry::init_tracing;
use roster_server::{AppState, build_app};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();
    init_tracing("info,tower_http=debug");

    // load centralized config
    let config = RosterConfig::from_env()?;
    let shared_config = Arc::new(config.clone());

    // connect to our db, the tables themselves are managed elsewhere
    let database = SqliteDatabase::connect(&config).await?;
    tracing::info!(
        entity = %config.user_entity,
        "Connected to database at {}",
        config.database_url
    );

    let app_state = AppState {
        database: Arc::new(database),
        config: shared_config,
    };

    let app = build_app(app_state)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address))?;
    tracing::info!("Server listening on http://{}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
