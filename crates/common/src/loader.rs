//! Incremental loader
//!
//! Fetches records newer than the current watermark, stores them
//! most-recent-first and re-applies the active query after every batch.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockWriteGuard};
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::endpoint::{CleanupAction, DashboardEndpoint};
use crate::error::{DashboardError, Result};
use crate::fetch::Fetcher;
use crate::filter::FilterEngine;
use crate::record::decode_batch;
use crate::render::Renderer;
use crate::state::SharedState;

/// Summary of one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PollOutcome {
    /// Watermark the request was issued with
    pub watermark: i64,
    pub added: usize,
    /// Records already stored, typically from an overlapping poll
    pub duplicates: usize,
    /// Response elements that were not records
    pub rejected: usize,
    pub total: usize,
}

/// Handle to one dashboard session. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Dashboard {
    endpoint: DashboardEndpoint,
    state: SharedState,
    filter: Arc<RwLock<FilterEngine>>,
    fetcher: Arc<dyn Fetcher>,
    renderer: Arc<dyn Renderer>,
}

impl Dashboard {
    /// Create a session. A `q` parameter on the endpoint URL becomes the
    /// initial query and is applied right away.
    pub fn new(
        endpoint: DashboardEndpoint,
        state: SharedState,
        fetcher: Arc<dyn Fetcher>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        let filter = endpoint
            .initial_query()
            .map(FilterEngine::with_query)
            .unwrap_or_default();

        let dashboard = Self {
            endpoint,
            state,
            filter: Arc::new(RwLock::new(filter)),
            fetcher,
            renderer,
        };
        if dashboard.filter.read().is_active() {
            dashboard.apply_filter();
        }
        dashboard
    }

    pub fn endpoint(&self) -> &DashboardEndpoint {
        &self.endpoint
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn current_watermark(&self) -> i64 {
        self.state.read().watermark()
    }

    /// Fetch and store everything newer than the current watermark
    pub async fn poll(&self) -> Result<PollOutcome> {
        let watermark = self.current_watermark();
        let url = self.endpoint.information_url(watermark)?;
        debug!("Polling {}", url);

        let body = self.fetcher.get(&url).await?;
        let batch = decode_batch(&body)?;

        let mut added = 0;
        let mut duplicates = 0;
        for record in batch.records {
            let inserted = {
                let mut state = self.state.write();
                let view = state.insert(record).map(|entry| entry.view.clone());
                view.map(|view| (view, state.len()))
            };

            match inserted {
                Some((view, total)) => {
                    added += 1;
                    if let Err(e) = self.renderer.record_added(&view, total) {
                        warn!("Failed to render record {}: {}", view.session_id, e);
                    }
                }
                None => duplicates += 1,
            }
        }

        let total = self.apply_filter();
        if added > 0 {
            info!("Loaded {} new test record(s), {} total", added, total);
        }

        Ok(PollOutcome {
            watermark,
            added,
            duplicates,
            rejected: batch.rejected,
            total,
        })
    }

    /// Replace the active query and re-filter. Returns the visible count.
    pub fn set_query(&self, raw: &str) -> usize {
        self.filter.write().set_query(raw);
        self.apply_filter();
        self.state.read().visible_count()
    }

    pub fn query_tokens(&self) -> Vec<String> {
        self.filter.read().tokens().to_vec()
    }

    /// Re-apply the active query to the stored records and notify the
    /// renderer. Returns the total record count.
    pub fn apply_filter(&self) -> usize {
        let filter = self.filter.read();
        let mut state = self.state.write();
        filter.apply(&mut state);
        drop(filter);

        let state = RwLockWriteGuard::downgrade(state);
        self.renderer.refreshed(&state);
        state.len()
    }

    /// Drop all records and load the full history again
    pub async fn reload(&self) -> Result<PollOutcome> {
        self.state.write().clear();
        self.apply_filter();
        self.poll().await
    }

    /// Ask the backend to clean up or reset, then reload on success
    pub async fn run_action(&self, action: CleanupAction) -> Result<PollOutcome> {
        let url = self.endpoint.cleanup_url(action)?;
        info!("Requesting {} at {}", action, url);

        let status = self.fetcher.post(&url).await?;
        if status != 200 {
            return Err(DashboardError::ActionRejected {
                action: action.to_string(),
                status,
            });
        }
        self.reload().await
    }

    /// Fetch a log file as text
    pub async fn fetch_text(&self, url: &Url) -> Result<String> {
        let body = self.fetcher.get(url).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
