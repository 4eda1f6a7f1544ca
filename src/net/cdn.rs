//! One-shot CDN flag probe against `GET /cdnflag`.
//!
//! ERROR HANDLING
//! ==============
//! The flag only decides whether an attribution line is shown, so every
//! failure collapses to "not set". Callers log the error string and move on;
//! nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "cdn_test.rs"]
mod cdn_test;

use std::sync::atomic::{AtomicBool, Ordering};

pub const CDN_FLAG_ENDPOINT: &str = "/cdnflag";

/// Guard that lets exactly one caller start the probe.
#[derive(Debug, Default)]
pub struct ProbeGuard {
    requested: AtomicBool,
}

impl ProbeGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` for the first caller only.
    pub fn try_acquire(&self) -> bool {
        !self.requested.swap(true, Ordering::AcqRel)
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

/// Interpret the plain-text body: exactly `1` enables the flag.
pub fn parse_cdn_flag(body: &str) -> bool {
    body == "1"
}

#[cfg(any(test, feature = "hydrate"))]
fn cdn_flag_failed_message(status: u16) -> String {
    format!("cdn flag request failed: {status}")
}

/// Fetch and interpret the CDN flag.
///
/// # Errors
///
/// Returns an error string on network failure, a non-OK status, or an
/// unreadable body.
pub async fn fetch_cdn_flag() -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CDN_FLAG_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(cdn_flag_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        Ok(parse_cdn_flag(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
