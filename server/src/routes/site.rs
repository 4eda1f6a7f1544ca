//! Site data routes consumed by the footer.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use site_footer::net::count::SiteCounts;
use site_footer::state::config::RSS_KEY;
use uuid::Uuid;

use crate::state::AppState;

/// `GET /cdnflag` — plain-text `1` when the CDN note should show, `0` otherwise.
pub async fn cdn_flag(State(state): State<AppState>) -> &'static str {
    if state.config.cdn_flag { "1" } else { "0" }
}

/// `GET /api/config/client` — feature flags for the client.
pub async fn client_config(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut values = serde_json::Map::new();
    values.insert(RSS_KEY.to_owned(), serde_json::Value::Bool(state.config.rss_enabled));
    Json(serde_json::Value::Object(values))
}

#[derive(Debug, Default, Deserialize)]
pub struct CountParams {
    pub visitor: Option<String>,
}

/// `GET /api/count?visitor=<uuid>` — record a view and return site totals.
///
/// A missing or malformed visitor id still counts as a page view.
pub async fn count(State(state): State<AppState>, Query(params): Query<CountParams>) -> Json<SiteCounts> {
    let visitor = params.visitor.as_deref().and_then(|raw| Uuid::parse_str(raw).ok());
    let counts = state.counter.write().await.record(visitor);
    tracing::debug!(pv = counts.pv, uv = counts.uv, "visit recorded");
    Json(counts)
}
