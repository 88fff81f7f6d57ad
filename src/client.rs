use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde_json::Value;

/// Fetches the roster list from a running server.
pub struct RosterClient {
    pub client: Client,
    pub url: String,
}

impl RosterClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// One GET against the list endpoint. A non-2xx status is an error, as
    /// is a body that is not JSON.
    pub async fn fetch_list(&self) -> Result<Value> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", self.url))?;

        if !response.status().is_success() {
            bail!("Failed to fetch data. Status: {}", response.status());
        }

        response
            .json::<Value>()
            .await
            .context("Failed to parse response body as JSON")
    }
}

pub fn render(data: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Fetch once and render the payload. Failures are logged and swallowed,
/// there is nothing to show in that case.
pub async fn show_once(client: &RosterClient) -> Option<String> {
    match client.fetch_list().await.and_then(|data| render(&data)) {
        Ok(text) => Some(format!("Fetched Data:\n{}", text)),
        Err(e) => {
            tracing::error!("Error fetching data: {:#}", e);
            None
        }
    }
}
