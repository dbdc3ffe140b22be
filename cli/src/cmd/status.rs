use aocr_core::action;

use super::{GlobalArgs, SubcmdResult};
use crate::config;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Print the raw status file instead of a table
    #[arg(short, long)]
    pub json: bool,
}

pub fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let settings = config::load_settings(global_args)?;
    let status = action::load_status(&settings)?;

    if args.json {
        println!("{}", action::status_to_json(&status)?);
        return Ok(());
    }
    action::print_status_table(&status);
    Ok(())
}
