//! Detail view of one test: metadata, video and logs

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use url::Url;

use testboard_common::{Dashboard, DashboardError, NullRenderer, RecordView};

use crate::commands::connect;
use crate::config::Settings;
use crate::output::{print_info, print_pairs, print_warning};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Selenium session id, or the `#` shown by `list`
    pub test: String,

    /// Also fetch and print the Selenium and browser driver logs
    #[arg(long)]
    pub logs: bool,
}

pub async fn execute(args: ShowArgs, settings: &Settings) -> Result<()> {
    let (dashboard, view) = find(&args.test, settings).await?;
    let base = dashboard.endpoint().base();
    let selenium_log = view.selenium_log_url(base)?;
    let driver_log = view.browser_driver_log_url(base)?;

    let mut pairs = view.details();
    pairs.push(("Video", view.video_url(base)?.to_string()));
    pairs.push(("Selenium Log", display_url(&selenium_log)));
    pairs.push(("Browser Driver Log", display_url(&driver_log)));
    print_pairs(&pairs, settings.format);

    if args.logs {
        print_log(&dashboard, "Selenium Log", selenium_log).await;
        print_log(&dashboard, "Browser Driver Log", driver_log).await;
    }
    Ok(())
}

/// Load the dashboard and pick a test by list index or session id
pub async fn find(test: &str, settings: &Settings) -> Result<(Dashboard, RecordView)> {
    let dashboard = connect(settings, Arc::new(NullRenderer))?;
    dashboard.poll().await?;
    let view = select(&dashboard, test)?;
    Ok((dashboard, view))
}

fn select(dashboard: &Dashboard, test: &str) -> Result<RecordView> {
    let state = dashboard.state().read();
    let entry = match test.parse::<usize>() {
        Ok(index) => state.get(index),
        Err(_) => state.find_by_session(test),
    };
    entry
        .map(|e| e.view.clone())
        .ok_or_else(|| DashboardError::RecordNotFound(test.to_string()).into())
}

fn display_url(url: &Option<Url>) -> String {
    url.as_ref().map(Url::to_string).unwrap_or_else(|| "-".to_string())
}

async fn print_log(dashboard: &Dashboard, name: &str, url: Option<Url>) {
    let Some(url) = url else {
        print_info(&format!("No {} recorded", name));
        return;
    };

    match dashboard.fetch_text(&url).await {
        Ok(text) => {
            println!("===== {} =====", name);
            println!("{}", text);
        }
        Err(e) => print_warning(&format!("{} not loaded: {}", name, e)),
    }
}
