//! CLI subcommands

pub mod action;
pub mod config;
pub mod list;
pub mod show;
pub mod watch;

use std::sync::Arc;

use anyhow::Result;

use testboard_common::{Dashboard, DashboardState, HttpFetcher, Renderer};

use crate::config::Settings;

/// Open a dashboard session against the configured backend
pub fn connect(settings: &Settings, renderer: Arc<dyn Renderer>) -> Result<Dashboard> {
    let fetcher = HttpFetcher::new(settings.request_timeout)?;
    Ok(Dashboard::new(
        settings.endpoint.clone(),
        DashboardState::new(settings.video_root.clone()).shared(),
        Arc::new(fetcher),
        renderer,
    ))
}
