use std::path::{Path, PathBuf};

use anyhow::Context as _;
use strum::IntoEnumIterator as _;

use crate::{
    day::{DayLocation, DayResolver},
    error::HarnessError,
    recorder,
    reporter::Reporter,
    solutions::{Part, Solutions},
    status::{Config, ConfigStore},
    testing::{TestReport, TestRunner},
    timing::{self, ExecutionOutcome},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub day: u8,
    pub tests: Vec<TestReport>,
    pub part1: Option<ExecutionOutcome>,
    pub part2: Option<ExecutionOutcome>,
    pub total_ms: f64,
    /// The status as it was saved.
    pub config: Config,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunStatus {
    Completed(RunSummary),
    /// The input file is missing; nothing was read, run or saved.
    AbortedNoInput(PathBuf),
}

/// Runs one day: tests of both parts, then each part once against the real input,
/// then records the outcome into the status store.
pub struct Harness<'a> {
    store: &'a dyn ConfigStore,
    reporter: &'a dyn Reporter,
    resolver: DayResolver,
}

impl<'a> Harness<'a> {
    pub fn new(store: &'a dyn ConfigStore, reporter: &'a dyn Reporter) -> Self {
        Self {
            store,
            reporter,
            resolver: DayResolver::default(),
        }
    }

    pub fn resolver(mut self, resolver: DayResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Resolves the day from `solution_file` and runs it.
    pub async fn run(
        &self,
        solutions: &Solutions,
        solution_file: &Path,
        input_override: Option<&Path>,
    ) -> anyhow::Result<RunStatus> {
        let loc = self.resolver.resolve(solution_file, input_override)?;
        self.run_day(solutions, loc).await
    }

    pub async fn run_day(
        &self,
        solutions: &Solutions,
        loc: DayLocation,
    ) -> anyhow::Result<RunStatus> {
        let DayLocation { day, input_path } = loc;

        if !input_path.is_file() {
            log::debug!("Input file {:?} does not exist", input_path);
            self.reporter.missing_input(&input_path);
            return Ok(RunStatus::AbortedNoInput(input_path));
        }

        let config = self.store.read_config()?;
        if config.day(day).is_none() {
            let slots = config.days.len();
            return Err(HarnessError::DayOutOfRange { day, slots }.into());
        }

        let runner = TestRunner::new().trim_inputs(solutions.trim_test_inputs);
        let mut tests = Vec::new();
        for part in Part::iter() {
            let Some(spec) = solutions.get(part) else {
                continue;
            };
            let reports = runner
                .run_all(part, &spec.tests, spec.solution.as_ref(), self.reporter)
                .await?;
            tests.extend(reports);
        }

        let input = fsutil::read_to_string(&input_path).context("Failed to read the input")?;

        let mut outcomes = [None, None];
        for (slot, part) in outcomes.iter_mut().zip(Part::iter()) {
            let Some(spec) = solutions.get(part) else {
                continue;
            };
            log::debug!("Running day {} part {}", day, part);
            let outcome =
                timing::execute(part, spec.solution.as_ref(), &input, self.reporter).await?;
            *slot = Some(outcome);
        }
        let [part1, part2] = outcomes;

        let total_ms = timing::sum_millis(part1.iter().chain(&part2).map(|o| o.elapsed_ms));
        self.reporter.total_time(total_ms);

        let config = recorder::record(self.store, config, day, part1.as_ref(), part2.as_ref())?;

        Ok(RunStatus::Completed(RunSummary {
            day,
            tests,
            part1,
            part2,
            total_ms,
            config,
        }))
    }
}
