use anyhow::{Context, Result};
use http::{HeaderValue, header::ACCESS_CONTROL_ALLOW_ORIGIN};
use tower_http::set_header::SetResponseHeaderLayer;

/// Stamps `Access-Control-Allow-Origin: <origin>` on every response,
/// whether it came from a handler or the 404 fallback.
pub fn allow_origin_layer(origin: &str) -> Result<SetResponseHeaderLayer<HeaderValue>> {
    let value = HeaderValue::from_str(origin)
        .with_context(|| format!("Invalid CORS origin {:?}", origin))?;

    Ok(SetResponseHeaderLayer::overriding(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        value,
    ))
}
