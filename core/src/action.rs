pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use colored::Colorize;
use crossterm::terminal;
use error::*;

use crate::day::{parse_day_dirname, DayResolver};
use crate::harness::{Harness, RunStatus};
use crate::reporter::ConsoleReporter;
use crate::settings::Settings;
use crate::solutions::{Part, Solutions};
use crate::spawner::Spawner;
use crate::status::{Config, ConfigStore, JsonConfigStore};

/// Runs a day's solutions with the repository's settings, printing to the console.
pub async fn run_solutions(
    solutions: &Solutions,
    solution_file: &Path,
    input_override: Option<&Path>,
) -> Result<RunStatus> {
    // The day must be known before any file is touched.
    DayResolver::default().day_of(solution_file)?;

    let start_dir = solution_file.parent().unwrap_or(Path::new("."));
    let settings = Settings::load_or_default(start_dir)?;
    let store = JsonConfigStore::new(settings.status_file_path());
    let reporter = ConsoleReporter;

    Harness::new(&store, &reporter)
        .resolver(settings.layout.clone())
        .run(solutions, solution_file, input_override)
        .await
}

/// Creates `aocr.toml` and an empty status file in `dir`.
pub fn init_repository(dir: impl AsRef<Path>, year: Option<u16>, force: bool) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !force {
        if let Ok(config_filepath) = Settings::find_file_in_ancestors(dir) {
            bail!(
                "Already being an aocr repository.\nIf it's intentional, remove {:?} and then try again.",
                config_filepath
            );
        }
    }

    let config_filepath = dir.join(Settings::FILENAME);
    let mut toml = Settings::example_toml();
    if let Some(year) = year {
        toml = toml.replacen("# year = 2023", &format!("year = {}", year), 1);
    }
    fsutil::write_with_mkdir(&config_filepath, &toml)?;

    let settings = Settings::from_toml_file(config_filepath.clone())?;
    let store = JsonConfigStore::new(settings.status_file_path());
    if force || !store.filepath().exists() {
        store.save_config(&Config::new(year))?;
    }
    Ok(config_filepath)
}

/// Days that have a `dayNN` directory under the source dir, ascending.
pub fn discover_days(settings: &Settings) -> Result<Vec<u8>> {
    let source_dir = settings.source_dir_path();
    let dirs = fsutil::glob_dirs(&source_dir, "day[0-9][0-9]")
        .with_context(|| format!("Failed to list days in {:?}", source_dir))?;
    Ok(dirs
        .iter()
        .filter_map(|d| d.file_name())
        .filter_map(|name| parse_day_dirname(&name.to_string_lossy()))
        .collect())
}

pub fn day_dir(settings: &Settings, day: u8) -> PathBuf {
    settings.source_dir_path().join(format!("day{:02}", day))
}

/// Runs each day in its own process, one after another.
pub async fn run_days_in_processes(
    settings: &Settings,
    days: &[u8],
) -> Result<Vec<(u8, ExitStatus)>> {
    let spawner = Spawner::new(&settings.run);
    let mut results = Vec::with_capacity(days.len());
    for &day in days {
        let status = spawner.run(day, &self::day_dir(settings, day)).await?;
        results.push((day, status));
    }
    Ok(results)
}

pub fn load_status(settings: &Settings) -> Result<Config> {
    JsonConfigStore::new(settings.status_file_path()).read_config()
}

pub fn status_to_json(config: &Config) -> Result<String> {
    serde_json::to_string_pretty(config).context("Failed to serialize status")
}

pub fn print_status_table(config: &Config) {
    let (cols, _) = terminal::size().unwrap_or((60, 40));
    let rule = "─".repeat((cols as usize).min(60)).bright_black();

    if let Some(year) = config.year {
        println!("{}", format!("Year {}", year).bold());
    }
    println!("{}", rule);
    println!(
        "{:>4}  {:<24}{:>10}  {:<24}{:>10}",
        "Day", "Part 1", "ms", "Part 2", "ms"
    );
    println!("{}", rule);

    for (i, day) in config.days.iter().enumerate() {
        let cells: Vec<(String, String)> = [Part::One, Part::Two]
            .iter()
            .map(|&p| {
                let r = day.part(p);
                match (r.result(), r.time()) {
                    (Some(result), Some(time)) => (result.to_owned(), format!("{:.2}", time)),
                    _ => ("-".to_owned(), "-".to_owned()),
                }
            })
            .collect();
        let line = format!(
            "{:>4}  {:<24}{:>10}  {:<24}{:>10}",
            i + 1,
            cells[0].0,
            cells[0].1,
            cells[1].0,
            cells[1].1
        );
        if day.part1.is_unset() && day.part2.is_unset() {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }

    println!("{}", rule);
    println!("Total time: {:.2}ms", config.total_time());
}
