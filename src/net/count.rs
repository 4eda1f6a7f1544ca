//! Site page-view / unique-visitor counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The footer renders empty `#site_pv` / `#site_uv` placeholders; this module
//! records the visit with `GET /api/count` and writes the returned totals into
//! those elements out-of-band. Visitors are identified by a random id kept in
//! `localStorage` so the server can count unique visitors without cookies.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "count_test.rs"]
mod count_test;

use serde::{Deserialize, Serialize};

pub const PAGE_VIEWS_ELEMENT_ID: &str = "site_pv";
pub const UNIQUE_VISITORS_ELEMENT_ID: &str = "site_uv";

#[cfg(feature = "hydrate")]
const VISITOR_STORAGE_KEY: &str = "visitor_id";

/// Site-wide totals returned by the counter endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCounts {
    pub pv: u64,
    pub uv: u64,
}

#[cfg(any(test, feature = "hydrate"))]
fn count_endpoint(visitor_id: &str) -> String {
    format!("/api/count?visitor={visitor_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn count_request_failed_message(status: u16) -> String {
    format!("count request failed: {status}")
}

/// Stable per-browser visitor id, created on first use.
#[cfg(feature = "hydrate")]
fn visitor_id() -> String {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if let Some(existing) = storage
        .as_ref()
        .and_then(|s| s.get_item(VISITOR_STORAGE_KEY).ok().flatten())
    {
        return existing;
    }
    let fresh = uuid::Uuid::new_v4().to_string();
    if let Some(storage) = storage {
        let _ = storage.set_item(VISITOR_STORAGE_KEY, &fresh);
    }
    fresh
}

/// Record a visit and return the site totals.
///
/// # Errors
///
/// Returns an error string if the request fails, the status is not OK, or
/// the body is not a `SiteCounts` document.
pub async fn record_visit() -> Result<SiteCounts, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = count_endpoint(&visitor_id());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(count_request_failed_message(resp.status()));
        }
        resp.json::<SiteCounts>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Record the visit and fill the footer placeholders. Failures are logged.
pub async fn refresh_site_counts() {
    match record_visit().await {
        Ok(counts) => {
            write_count(PAGE_VIEWS_ELEMENT_ID, counts.pv);
            write_count(UNIQUE_VISITORS_ELEMENT_ID, counts.uv);
        }
        Err(e) => log::warn!("site counters unavailable: {e}"),
    }
}

fn write_count(element_id: &str, value: u64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(element_id))
        {
            el.set_text_content(Some(&value.to_string()));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (element_id, value);
    }
}
