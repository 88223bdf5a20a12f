//! One-shot listing

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use testboard_common::NullRenderer;

use crate::commands::connect;
use crate::config::Settings;
use crate::output::{print_list, RecordRow};
use crate::render::visible_rows;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Search query; overrides `q` in the dashboard URL
    #[arg(short, long)]
    pub query: Option<String>,
}

pub async fn execute(args: ListArgs, settings: &Settings) -> Result<()> {
    let rows = fetch_rows(&args, settings).await?;
    print_list(&rows, settings.format);
    Ok(())
}

/// Load the dashboard once and return the tests the query leaves visible
pub async fn fetch_rows(args: &ListArgs, settings: &Settings) -> Result<Vec<RecordRow>> {
    let dashboard = connect(settings, Arc::new(NullRenderer))?;
    dashboard.poll().await?;
    if let Some(query) = &args.query {
        dashboard.set_query(query);
    }

    let rows = visible_rows(&dashboard.state().read());
    Ok(rows)
}
