//! REST helpers for site-level data.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`, the page renders with defaults.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::config::ClientConfig;

pub const CLIENT_CONFIG_ENDPOINT: &str = "/api/config/client";

/// Fetch the client configuration. Returns `None` on failure or on the server.
pub async fn fetch_client_config() -> Option<ClientConfig> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CLIENT_CONFIG_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::warn!("client config request failed: {}", resp.status());
            return None;
        }
        let body = resp.text().await.ok()?;
        Some(ClientConfig::from_json(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
