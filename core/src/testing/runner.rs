use anyhow::Context as _;

use super::{result::*, testcase::*};
use crate::{reporter::Reporter, solution::Solution, solutions::Part, text::strip_indent};

#[derive(Debug, Clone)]
pub struct TestRunner {
    trim_inputs: bool,
}

impl Default for TestRunner {
    fn default() -> Self {
        Self { trim_inputs: true }
    }
}

impl TestRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trim_inputs(mut self, yes: bool) -> Self {
        self.trim_inputs = yes;
        self
    }

    /// Runs a single case. `index` is 1-based.
    pub async fn run(
        &self,
        part: Part,
        index: usize,
        testcase: &TestCase,
        solution: &dyn Solution,
    ) -> anyhow::Result<TestReport> {
        let actual = if self.trim_inputs {
            solution.solve(&strip_indent(&testcase.input)).await
        } else {
            solution.solve(&testcase.input).await
        }
        .with_context(|| format!("Part {}, test {} faulted", part, index))?;

        let verdict = if actual == testcase.expected {
            Verdict::Passed
        } else {
            Verdict::Failed
        };

        Ok(TestReport {
            part,
            index,
            verdict,
            actual,
            expected: testcase.expected.clone(),
        })
    }

    /// Runs every case in order, reporting each one as soon as it finishes.
    /// A failed case does not stop the remaining ones; a faulting solution does.
    pub async fn run_all(
        &self,
        part: Part,
        testcases: &[TestCase],
        solution: &dyn Solution,
        reporter: &dyn Reporter,
    ) -> anyhow::Result<Vec<TestReport>> {
        let mut reports = Vec::with_capacity(testcases.len());
        for (i, t) in testcases.iter().enumerate() {
            let report = self.run(part, i + 1, t, solution).await?;
            log::debug!("Part {} test {}: {}", part, report.index, report.verdict);
            reporter.test_report(&report);
            reports.push(report);
        }
        Ok(reports)
    }
}

#[cfg(test)]
mod test {
    use anyhow::ensure;

    use super::*;
    use crate::{
        answer::Answer,
        reporter::{Event, RecordingReporter},
        solution::{from_fn, try_from_fn},
    };

    fn sum_of_ints(input: &str) -> i64 {
        input
            .split_whitespace()
            .map(|x| x.parse::<i64>().unwrap())
            .sum()
    }

    #[tokio::test]
    async fn every_case_is_reported_in_order() {
        let tests = vec![
            TestCase::new("1 2", 3),
            TestCase::new("2 2", 5),
            TestCase::new("10 20", 30),
        ];
        let reporter = RecordingReporter::default();
        let reports = TestRunner::new()
            .run_all(Part::One, &tests, &from_fn(sum_of_ints), &reporter)
            .await
            .unwrap();

        let got: Vec<_> = reports.iter().map(|r| (r.index, r.verdict)).collect();
        assert_eq!(
            got,
            [
                (1, Verdict::Passed),
                (2, Verdict::Failed),
                (3, Verdict::Passed)
            ]
        );
        assert_eq!(reporter.events().len(), 3);
        assert_eq!(reports[1].actual, Answer::Int(4));
        assert_eq!(reports[1].expected, Answer::Int(5));
    }

    #[tokio::test]
    async fn string_answer_does_not_match_number() {
        let tests = vec![TestCase::new("5", 5)];
        let reporter = RecordingReporter::default();
        let reports = TestRunner::new()
            .run_all(
                Part::Two,
                &tests,
                &from_fn(|s: &str| s.to_owned()),
                &reporter,
            )
            .await
            .unwrap();

        assert_eq!(reports[0].verdict, Verdict::Failed);
        assert!(matches!(
            &reporter.events()[0],
            Event::Test(r) if r.part == Part::Two && !r.passed()
        ));
    }

    #[tokio::test]
    async fn inputs_are_dedented_unless_disabled() {
        let tests = vec![TestCase::new("\n    ab\n    cd\n", "ab\ncd")];
        let echo = from_fn(|s: &str| s.to_owned());
        let reporter = RecordingReporter::default();

        let trimmed = TestRunner::new()
            .run_all(Part::One, &tests, &echo, &reporter)
            .await
            .unwrap();
        assert!(trimmed[0].passed());

        let raw = TestRunner::new()
            .trim_inputs(false)
            .run_all(Part::One, &tests, &echo, &reporter)
            .await
            .unwrap();
        assert_eq!(raw[0].actual, Answer::from("\n    ab\n    cd\n"));
        assert!(!raw[0].passed());
    }

    #[tokio::test]
    async fn fault_propagates_and_stops_the_run() {
        let tests = vec![TestCase::new("ok", 1), TestCase::new("boom", 1), TestCase::new("ok", 1)];
        let solution = try_from_fn(|s: &str| -> anyhow::Result<i64> {
            ensure!(s != "boom", "cannot solve");
            Ok(1)
        });
        let reporter = RecordingReporter::default();

        let err = TestRunner::new()
            .run_all(Part::One, &tests, &solution, &reporter)
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("Part 1, test 2"));
        assert_eq!(reporter.events().len(), 1);
    }
}
