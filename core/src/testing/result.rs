use crate::{answer::Answer, solutions::Part};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Verdict {
    Passed,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestReport {
    pub part: Part,
    /// 1-based position in the declared test list.
    pub index: usize,
    pub verdict: Verdict,
    pub actual: Answer,
    pub expected: Answer,
}

impl TestReport {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}
