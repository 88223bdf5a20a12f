//! Dashboard cleanup and reset

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

use testboard_common::{CleanupAction, NullRenderer, PollOutcome};

use crate::commands::connect;
use crate::config::Settings;
use crate::output::{print_info, print_success};

#[derive(Args, Debug)]
pub struct ActionArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub async fn execute(action: CleanupAction, args: ActionArgs, settings: &Settings) -> Result<()> {
    if !args.yes && !confirm(prompt(action)).await? {
        print_info("Aborted");
        return Ok(());
    }

    let outcome = run(action, settings).await?;
    print_success(&format!(
        "{} done; dashboard reloaded with {} test(s)",
        action, outcome.total
    ));
    Ok(())
}

/// Send the action and return the reload that follows it
pub async fn run(action: CleanupAction, settings: &Settings) -> Result<PollOutcome> {
    let dashboard = connect(settings, Arc::new(NullRenderer))?;
    Ok(dashboard.run_action(action).await?)
}

fn prompt(action: CleanupAction) -> &'static str {
    match action {
        CleanupAction::Cleanup => "Delete all recorded videos and logs from the dashboard?",
        CleanupAction::Reset => "Reset the dashboard, dropping every listed test?",
    }
}

async fn confirm(question: &str) -> Result<bool> {
    println!("{} [y/N]", question);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
