use roster_server::client::{RosterClient, show_once};
use roster_server::config::ViewConfig;
use roster_server::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing("info");

    let config = ViewConfig::from_env();
    let client = RosterClient::new(config.api_url);

    if let Some(page) = show_once(&client).await {
        println!("{}", page);
    }

    Ok(())
}
