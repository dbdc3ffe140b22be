use std::time::Duration;

use anyhow::Context as _;
use tokio::time::Instant;

use crate::{answer::Answer, reporter::Reporter, solution::Solution, solutions::Part};

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOutcome {
    pub result: Answer,
    /// Wall-clock milliseconds, rounded to two decimal places.
    pub elapsed_ms: f64,
}

pub fn round_millis(d: Duration) -> f64 {
    let hundredths = (d.as_nanos() + 5_000) / 10_000;
    hundredths as f64 / 100.0
}

/// Sum of already rounded millisecond values, rounded again to cancel float noise.
pub fn sum_millis(xs: impl IntoIterator<Item = f64>) -> f64 {
    let sum: f64 = xs.into_iter().sum();
    (sum * 100.0).round() / 100.0
}

/// Runs `solution` exactly once against the real input and measures it.
pub async fn execute(
    part: Part,
    solution: &dyn Solution,
    input: &str,
    reporter: &dyn Reporter,
) -> anyhow::Result<ExecutionOutcome> {
    let start_at = Instant::now();
    let result = solution.solve(input).await;
    let elapsed = Instant::now().duration_since(start_at);

    let result = result.with_context(|| format!("Part {} faulted", part))?;

    if let Err(warning) = result.validate() {
        log::warn!("Part {}: {}", part, warning);
        reporter.result_warning(part, &warning);
    }

    let outcome = ExecutionOutcome {
        result,
        elapsed_ms: round_millis(elapsed),
    };
    reporter.part_outcome(part, &outcome);
    Ok(outcome)
}
