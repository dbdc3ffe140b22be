use aocr_core::action;
use anyhow::bail;
use colored::Colorize;

use super::{GlobalArgs, SubcmdResult};
use crate::{config, util};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Days to run, e.g. `aocr run 1 3 7`
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub days: Vec<u8>,

    /// Run every day that has a dayNN directory
    #[arg(short, long, conflicts_with = "days")]
    pub all: bool,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let settings = config::load_settings(global_args)?;

    let days = if args.all {
        action::discover_days(&settings)?
    } else {
        util::dedup(args.days.clone())
    };
    if days.is_empty() {
        bail!("No days to run. Pass day numbers or --all.");
    }

    let results = action::run_days_in_processes(&settings, &days).await?;

    let failed: Vec<_> = results
        .iter()
        .filter(|(_, status)| !status.success())
        .map(|(day, _)| day.to_string())
        .collect();
    if !failed.is_empty() {
        eprintln!("{}", format!("Failed days: {}", failed.join(", ")).red());
        bail!("{} of {} days failed", failed.len(), results.len());
    }
    Ok(())
}
