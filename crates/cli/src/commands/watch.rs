//! Live dashboard view

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use testboard_common::{PollTask, TokioClock};

use crate::commands::connect;
use crate::config::Settings;
use crate::output::print_info;
use crate::render::ConsoleRenderer;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Initial search query; overrides `q` in the dashboard URL
    #[arg(short, long)]
    pub query: Option<String>,

    /// Poll interval in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Do not read search queries from stdin
    #[arg(long)]
    pub no_input: bool,
}

pub async fn execute(args: WatchArgs, settings: &Settings) -> Result<()> {
    let renderer = Arc::new(ConsoleRenderer::new(settings.format));
    let dashboard = connect(settings, renderer.clone())?;

    if let Some(query) = &args.query {
        renderer.request_redraw();
        dashboard.set_query(query);
    }

    let interval = args
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or(settings.poll_interval);
    let handle = PollTask::spawn(dashboard.clone(), interval, Arc::new(TokioClock));

    let mut reading = !args.no_input;
    if reading {
        print_info("Type a search and press Enter to filter; an empty line shows all tests");
    }
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal");
                break;
            }
            line = lines.next_line(), if reading => match line {
                Ok(Some(line)) => {
                    renderer.request_redraw();
                    let shown = dashboard.set_query(&line);
                    debug!("Query {:?} shows {} test(s)", line, shown);
                }
                Ok(None) => reading = false,
                Err(e) => {
                    warn!("Stopped reading queries: {}", e);
                    reading = false;
                }
            },
        }
    }

    handle.shutdown().await;
    Ok(())
}
