use aocr_core::{action, print_success};
use std::path::PathBuf;

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(default_value = "./")]
    pub dir: PathBuf,

    /// Puzzle year written into aocr.toml and the status file
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Overwrite an existing aocr.toml and status file
    #[arg(short, long)]
    pub force: bool,
}

pub fn exec(args: &Args, _: &GlobalArgs) -> SubcmdResult {
    let config_filepath = action::init_repository(&args.dir, args.year, args.force)?;
    print_success!(
        "Successfully initialized aocr repository. (config: {})",
        util::replace_homedir_to_tilde(config_filepath).to_string_lossy()
    );
    Ok(())
}
