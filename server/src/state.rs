//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and the in-memory site counter. Counts reset on
//! restart.
//!
//! TRADE-OFFS
//! ==========
//! Unique visitors are tracked as a set of ids in memory. The set stops
//! growing at `MAX_TRACKED_VISITORS`; past that point new ids still count
//! as page views but the visitor total saturates.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashSet;
use std::sync::Arc;

use site_footer::net::count::SiteCounts;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ServerConfig;

/// Upper bound on distinct visitor ids held in memory.
pub const MAX_TRACKED_VISITORS: usize = 100_000;

/// Page views plus the set of distinct visitor ids seen.
#[derive(Debug)]
pub struct SiteCounter {
    page_views: u64,
    visitors: HashSet<Uuid>,
    visitor_limit: usize,
}

impl Default for SiteCounter {
    fn default() -> Self {
        Self::with_visitor_limit(MAX_TRACKED_VISITORS)
    }
}

impl SiteCounter {
    #[must_use]
    pub fn with_visitor_limit(visitor_limit: usize) -> Self {
        Self { page_views: 0, visitors: HashSet::new(), visitor_limit }
    }

    /// Count one view; `visitor` also counts towards uniques when new and
    /// the visitor set is below its limit.
    pub fn record(&mut self, visitor: Option<Uuid>) -> SiteCounts {
        self.page_views += 1;
        if let Some(id) = visitor {
            if self.visitors.len() < self.visitor_limit {
                self.visitors.insert(id);
            } else if !self.visitors.contains(&id) {
                tracing::debug!(limit = self.visitor_limit, "visitor set full, not tracking new id");
            }
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> SiteCounts {
        SiteCounts { pv: self.page_views, uv: self.visitors.len() as u64 }
    }
}

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub counter: Arc<RwLock<SiteCounter>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config), counter: Arc::new(RwLock::new(SiteCounter::default())) }
    }
}
