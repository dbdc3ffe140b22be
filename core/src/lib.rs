//! Runs a day's puzzle solutions: sample tests first, then each part once against the real
//! input, timing it, and finally records results into the repository's status file.
//!
//! ```no_run
//! use aocr_core::{solution::from_fn, PartSpec, Solutions};
//!
//! fn part1(input: &str) -> i64 {
//!     input.split_whitespace().map(|x| x.parse::<i64>().unwrap()).sum()
//! }
//!
//! fn main() {
//!     aocr_core::run!(Solutions::new().part1(PartSpec::new(from_fn(part1)).test("1 2", 3)));
//! }
//! ```

pub mod action;
pub mod answer;
pub mod day;
pub mod error;
pub mod harness;
pub mod logger;
pub mod recorder;
pub mod reporter;
pub mod settings;
pub mod solution;
pub mod solutions;
pub mod spawner;
pub mod status;
pub mod str_interp;
pub mod style;
pub mod testing;
pub mod text;
pub mod timing;

use std::path::PathBuf;

pub use crate::answer::Answer;
pub use crate::harness::{Harness, RunStatus};
pub use crate::settings::Settings;
pub use crate::solutions::{Part, PartSpec, Solutions};

/// Runs `solutions` for the day whose `dayNN` directory contains the calling source file.
///
/// `run!(solutions)` reads `input.txt` next to the caller; `run!(solutions, path)` reads `path`.
#[macro_export]
macro_rules! run {
    ($solutions:expr $(,)?) => {
        $crate::exec(
            $solutions,
            $crate::day::locate_source_file(env!("CARGO_MANIFEST_DIR"), file!()),
            ::std::option::Option::None,
        )
    };
    ($solutions:expr, $input:expr $(,)?) => {
        $crate::exec(
            $solutions,
            $crate::day::locate_source_file(env!("CARGO_MANIFEST_DIR"), file!()),
            ::std::option::Option::Some(::std::path::PathBuf::from($input)),
        )
    };
}

/// Blocking entry point behind [`run!`]. Exits the process with status 1 on error.
pub fn exec(solutions: Solutions, solution_file: PathBuf, input_override: Option<PathBuf>) {
    logger::init();

    let res = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|rt| {
            rt.block_on(action::run_solutions(
                &solutions,
                &solution_file,
                input_override.as_deref(),
            ))
        });

    match res {
        Ok(RunStatus::Completed(summary)) => {
            log::debug!("Recorded day {} ({}ms)", summary.day, summary.total_ms)
        }
        Ok(RunStatus::AbortedNoInput(path)) => log::debug!("Aborted: no input at {:?}", path),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            std::process::exit(1);
        }
    }
}
