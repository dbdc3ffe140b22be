pub mod init;
pub mod run;
pub mod status;

use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    #[command(subcommand)]
    pub subcmd: Subcommand,

    /// Path to aocr.toml. Defaults to the nearest one in the current or ancestor dirs.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Init(init::Args),

    #[command(alias("r"))]
    Run(run::Args),

    #[command(alias("s"))]
    Status(status::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            Init(args) => init::exec(args, self),
            Run(args) => run::exec(args, self).await,
            Status(args) => status::exec(args, self),
        }
    }
}
