use std::fmt;

use crate::{solution::Solution, testing::TestCase};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
pub enum Part {
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "2")]
    Two,
}

/// A part's solver together with its sample tests.
pub struct PartSpec {
    pub solution: Box<dyn Solution>,
    pub tests: Vec<TestCase>,
}

impl PartSpec {
    pub fn new(solution: impl Solution + 'static) -> Self {
        Self {
            solution: Box::new(solution),
            tests: Vec::new(),
        }
    }

    pub fn test(mut self, input: impl Into<String>, expected: impl Into<crate::Answer>) -> Self {
        self.tests.push(TestCase::new(input, expected));
        self
    }

    pub fn tests<T: Into<TestCase>>(mut self, tests: impl IntoIterator<Item = T>) -> Self {
        self.tests.extend(tests.into_iter().map(Into::into));
        self
    }
}

impl fmt::Debug for PartSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PartSpec")
            .field("solution", &"<dyn Solution>")
            .field("tests", &self.tests)
            .finish()
    }
}

/// Everything a day's entry point hands to the harness.
#[derive(Debug)]
pub struct Solutions {
    pub part1: Option<PartSpec>,
    pub part2: Option<PartSpec>,
    /// Strip the common indentation of test inputs before solving them.
    pub trim_test_inputs: bool,
}

impl Default for Solutions {
    fn default() -> Self {
        Self {
            part1: None,
            part2: None,
            trim_test_inputs: true,
        }
    }
}

impl Solutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn part1(mut self, spec: PartSpec) -> Self {
        self.part1 = Some(spec);
        self
    }

    pub fn part2(mut self, spec: PartSpec) -> Self {
        self.part2 = Some(spec);
        self
    }

    pub fn trim_test_inputs(mut self, yes: bool) -> Self {
        self.trim_test_inputs = yes;
        self
    }

    pub fn get(&self, part: Part) -> Option<&PartSpec> {
        match part {
            Part::One => self.part1.as_ref(),
            Part::Two => self.part2.as_ref(),
        }
    }
}
