use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use colored::Colorize;

use crate::{
    answer::ResultTypeWarning,
    solutions::Part,
    style::ColorTheme as _,
    testing::{TestReport, Verdict},
    timing::ExecutionOutcome,
};

/// Everything the harness tells the user goes through here.
pub trait Reporter: Send + Sync {
    fn test_report(&self, report: &TestReport);
    fn result_warning(&self, part: Part, warning: &ResultTypeWarning);
    fn part_outcome(&self, part: Part, outcome: &ExecutionOutcome);
    fn total_time(&self, total_ms: f64);
    fn missing_input(&self, input_path: &Path);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn format_test_report(report: &TestReport) -> String {
        let line = format!(
            "Part {}, test {} - {}",
            report.part, report.index, report.verdict
        );
        let mut out = format!("{}\n", line.color(report.verdict.color()));
        if report.verdict == Verdict::Failed {
            out += &format!(
                "\n{}:\n{}\n\n{}:\n{}\n\n",
                "Result".bold(),
                report.actual.inspect(),
                "Expected".bold(),
                report.expected.inspect()
            );
        }
        out
    }

    pub fn format_warning(part: Part, warning: &ResultTypeWarning) -> String {
        format!(
            "{} {}\n",
            format!(
                "Warning - the result of part {} should be a finite number, a string or a bigint, got:",
                part
            )
            .yellow(),
            warning.got.red(),
        )
    }

    pub fn format_outcome(part: Part, outcome: &ExecutionOutcome) -> String {
        format!(
            "\nPart {} (in {:.2}ms):\n{}\n",
            part,
            outcome.elapsed_ms,
            outcome.result.inspect()
        )
    }

    pub fn format_total_time(total_ms: f64) -> String {
        format!("\nTotal time: {:.2}ms\n", total_ms)
    }

    pub fn format_missing_input(input_path: &Path) -> String {
        let msg = format!(
            "There is no input file at {:?}!\n\n\
             Please add the file or specify a custom file location\n\
             via the second argument of the `run!` macro.",
            input_path
        );
        format!("{}\n", msg.red())
    }
}

impl Reporter for ConsoleReporter {
    fn test_report(&self, report: &TestReport) {
        print!("{}", Self::format_test_report(report));
    }

    fn result_warning(&self, part: Part, warning: &ResultTypeWarning) {
        print!("{}", Self::format_warning(part, warning));
    }

    fn part_outcome(&self, part: Part, outcome: &ExecutionOutcome) {
        print!("{}", Self::format_outcome(part, outcome));
    }

    fn total_time(&self, total_ms: f64) {
        print!("{}", Self::format_total_time(total_ms));
    }

    fn missing_input(&self, input_path: &Path) {
        print!("{}", Self::format_missing_input(input_path));
    }
}

/// What a [`RecordingReporter`] captured, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Test(TestReport),
    Warning(Part, ResultTypeWarning),
    Outcome(Part, ExecutionOutcome),
    TotalTime(f64),
    MissingInput(PathBuf),
}

/// Keeps every report in memory instead of printing it.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Event>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    fn push(&self, e: Event) {
        self.lock().push(e)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Event>> {
        // A poisoned lock only means another test thread panicked mid-push.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Reporter for RecordingReporter {
    fn test_report(&self, report: &TestReport) {
        self.push(Event::Test(report.clone()))
    }

    fn result_warning(&self, part: Part, warning: &ResultTypeWarning) {
        self.push(Event::Warning(part, warning.clone()))
    }

    fn part_outcome(&self, part: Part, outcome: &ExecutionOutcome) {
        self.push(Event::Outcome(part, outcome.clone()))
    }

    fn total_time(&self, total_ms: f64) {
        self.push(Event::TotalTime(total_ms))
    }

    fn missing_input(&self, input_path: &Path) {
        self.push(Event::MissingInput(input_path.to_owned()))
    }
}
