use crate::answer::Answer;

/// A sample input with its known answer.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub input: String,
    pub expected: Answer,
}

impl TestCase {
    pub fn new(input: impl Into<String>, expected: impl Into<Answer>) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
        }
    }
}

impl<I, E> From<(I, E)> for TestCase
where
    I: Into<String>,
    E: Into<Answer>,
{
    fn from((input, expected): (I, E)) -> Self {
        Self::new(input, expected)
    }
}
