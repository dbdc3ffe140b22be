use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
};

use tokio::process::Command;

use crate::{
    settings::RunConfig,
    str_interp::{interp, InterpError},
    style,
};

const BANNER_WIDTH: usize = 40;

#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("Invalid run command '{0}': {1}")]
    Interp(String, #[source] InterpError),

    #[error("Failed to spawn '{} -c {}': {}", .0.to_string_lossy(), .1, .2)]
    Spawn(PathBuf, String, #[source] std::io::Error),
}

/// Runs one day's solution as a separate process with inherited stdio, between two banners.
#[derive(Debug, Clone)]
pub struct Spawner {
    shell: PathBuf,
    command: String,
}

impl Spawner {
    pub fn new(cfg: &RunConfig) -> Self {
        Self {
            shell: cfg.shell.to_owned(),
            command: cfg.command.to_owned(),
        }
    }

    fn make_interp_vars(day: u8, day_dir: &Path) -> HashMap<&'static str, String> {
        let mut m = HashMap::new();
        m.insert("day", day.to_string());
        m.insert("day2", format!("{:02}", day));
        m.insert("dayDir", day_dir.to_string_lossy().into_owned());
        m
    }

    pub fn command_for(&self, day: u8, day_dir: &Path) -> Result<String, SpawnError> {
        let vars = Self::make_interp_vars(day, day_dir);
        interp(&self.command, &vars).map_err(|e| SpawnError::Interp(self.command.to_owned(), e))
    }

    pub async fn run(&self, day: u8, day_dir: &Path) -> Result<ExitStatus, SpawnError> {
        let cmd = self.command_for(day, day_dir)?;
        log::info!("{}", cmd);

        println!("\n{}\n", style::day_banner(day, BANNER_WIDTH));
        let status = Command::new(&self.shell)
            .args(["-c", &cmd])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| SpawnError::Spawn(self.shell.to_owned(), cmd.to_owned(), e));
        println!("\n{}", style::closing_rule(BANNER_WIDTH));

        let status = status?;
        if !status.success() {
            log::warn!("Day {} exited with {}", day, status);
        }
        Ok(status)
    }
}
