use std::fmt;

use colored::{ColoredString, Colorize};
use num_bigint::BigInt;

/// The value a solution produces for one part.
#[derive(Debug, Clone, Default)]
pub enum Answer {
    Text(String),
    Int(i64),
    Float(f64),
    BigInt(BigInt),
    #[default]
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum AnswerKind {
    String,
    Number,
    BigInt,
    Absent,
}

/// Non-fatal complaint about the shape of a produced answer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("the result should be a finite number, a string or a bigint, got: {got}")]
pub struct ResultTypeWarning {
    pub got: String,
}

impl Answer {
    pub fn kind(&self) -> AnswerKind {
        use Answer::*;
        match self {
            Text(_) => AnswerKind::String,
            Int(_) | Float(_) => AnswerKind::Number,
            BigInt(_) => AnswerKind::BigInt,
            Absent => AnswerKind::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Answer::Absent)
    }

    /// Only NaN and infinities are rejected; they are still recorded as `NaN`, `Infinity` and
    /// `-Infinity` after the warning.
    pub fn validate(&self) -> Result<(), ResultTypeWarning> {
        match self {
            Answer::Float(x) if !x.is_finite() => Err(ResultTypeWarning {
                got: Self::format_float(*x),
            }),
            _ => Ok(()),
        }
    }

    /// Text persisted into the status file. `None` for [`Answer::Absent`].
    pub fn to_record_string(&self) -> Option<String> {
        match self {
            Answer::Absent => None,
            x => Some(x.to_string()),
        }
    }

    /// Colored, type-revealing rendering for diagnostics: strings are quoted, bigints carry a `n` suffix.
    pub fn inspect(&self) -> ColoredString {
        use Answer::*;
        match self {
            Text(s) => format!("{:?}", s).green(),
            Int(_) | Float(_) => self.to_string().yellow(),
            BigInt(n) => format!("{}n", n).yellow(),
            Absent => "undefined".bright_black(),
        }
    }

    /// Number text as a JavaScript runtime prints it: shortest round-trip digits, plain
    /// notation for exponents in `-7..21`, otherwise `1e+21` / `1.5e-7`.
    fn format_float(x: f64) -> String {
        if x.is_nan() {
            return "NaN".to_owned();
        }
        if x == f64::INFINITY {
            return "Infinity".to_owned();
        }
        if x == f64::NEG_INFINITY {
            return "-Infinity".to_owned();
        }
        if x == 0.0 {
            return "0".to_owned();
        }

        let sign = if x < 0.0 { "-" } else { "" };
        let sci = format!("{:e}", x.abs());
        let (mantissa, exp) = sci.split_once('e').unwrap_or((&sci, "0"));
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        let k = digits.len() as i32;
        let n = exp.parse::<i32>().unwrap_or(0) + 1;

        let body = if k <= n && n <= 21 {
            format!("{}{}", digits, "0".repeat((n - k) as usize))
        } else if 0 < n && n <= 21 {
            format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
        } else if -6 < n && n <= 0 {
            format!("0.{}{}", "0".repeat(-n as usize), digits)
        } else {
            let e = n - 1;
            let e_sign = if e < 0 { '-' } else { '+' };
            match digits.split_at(1) {
                (d, "") => format!("{}e{}{}", d, e_sign, e.abs()),
                (d, rest) => format!("{}.{}e{}{}", d, rest, e_sign, e.abs()),
            }
        };
        format!("{}{}", sign, body)
    }
}

/// `a == b` without rounding `a` through `f64`.
fn int_eq_float(a: i64, b: f64) -> bool {
    const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
    b.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&b) && b as i64 == a
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Answer::*;
        match self {
            Text(s) => f.write_str(s),
            Int(n) => write!(f, "{}", n),
            Float(x) => f.write_str(&Self::format_float(*x)),
            BigInt(n) => write!(f, "{}", n),
            Absent => f.write_str("undefined"),
        }
    }
}

/// Strict comparison: answers of different kinds never match.
/// `Int` and `Float` are both numbers and compare by value.
impl PartialEq for Answer {
    fn eq(&self, other: &Self) -> bool {
        use Answer::*;
        match (self, other) {
            (Text(a), Text(b)) => a == b,
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Int(a), Float(b)) | (Float(b), Int(a)) => int_eq_float(*a, *b),
            (BigInt(a), BigInt(b)) => a == b,
            (Absent, Absent) => true,
            _ => false,
        }
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_owned())
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<BigInt> for Answer {
    fn from(n: BigInt) -> Self {
        Answer::BigInt(n)
    }
}

impl From<f64> for Answer {
    fn from(x: f64) -> Self {
        Answer::Float(x)
    }
}

impl From<f32> for Answer {
    fn from(x: f32) -> Self {
        Answer::Float(x.into())
    }
}

impl From<()> for Answer {
    fn from(_: ()) -> Self {
        Answer::Absent
    }
}

impl<T: Into<Answer>> From<Option<T>> for Answer {
    fn from(x: Option<T>) -> Self {
        x.map_or(Answer::Absent, Into::into)
    }
}

macro_rules! impl_from_small_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Answer {
            fn from(n: $t) -> Self {
                Answer::Int(n.into())
            }
        }
    )*};
}
impl_from_small_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Answer {
            fn from(n: $t) -> Self {
                i64::try_from(n).map_or_else(|_| Answer::BigInt(n.into()), Answer::Int)
            }
        }
    )*};
}
impl_from_wide_int!(i128, u64, u128, isize, usize);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn number_never_equals_string() {
        assert_ne!(Answer::from(5), Answer::from("5"));
        assert_ne!(Answer::from("5"), Answer::from(5));
    }

    #[test]
    fn int_and_float_are_both_numbers() {
        assert_eq!(Answer::from(5), Answer::from(5.0));
        assert_eq!(Answer::from(5).kind(), Answer::from(5.5).kind());
        assert_ne!(Answer::from(5), Answer::from(5.5));
    }

    #[test]
    fn int_float_equality_is_exact_beyond_f64_precision() {
        assert_ne!(Answer::Int(9_007_199_254_740_993), Answer::Float(9_007_199_254_740_992.0));
        assert_eq!(Answer::Int(9_007_199_254_740_992), Answer::Float(9_007_199_254_740_992.0));
        assert_eq!(Answer::Int(-3), Answer::Float(-3.0));
        assert_ne!(Answer::Int(i64::MAX), Answer::Float(9_223_372_036_854_775_808.0));
        assert_ne!(Answer::Int(0), Answer::Float(f64::NAN));
    }

    #[test]
    fn floats_are_written_like_javascript_numbers() {
        let cases = [
            (1e21, "1e+21"),
            (1e20, "100000000000000000000"),
            (1e-7, "1e-7"),
            (1.5e-7, "1.5e-7"),
            (0.000001, "0.000001"),
            (123.456, "123.456"),
            (-0.5, "-0.5"),
            (-0.0, "0"),
            (2.5e30, "2.5e+30"),
            (0.1 + 0.2, "0.30000000000000004"),
        ];
        for (x, expected) in cases {
            assert_eq!(Answer::Float(x).to_string(), expected, "{:e}", x);
        }
    }

    #[test]
    fn bigint_compares_by_value_only_with_bigint() {
        let a = Answer::from(BigInt::from(12345));
        let b = Answer::from(BigInt::from(12345));
        assert_eq!(a, b);
        assert_ne!(a, Answer::from(12345));
    }

    #[test]
    fn wide_unsigned_falls_back_to_bigint() {
        assert_eq!(Answer::from(7usize), Answer::Int(7));
        assert_eq!(Answer::from(u64::MAX).kind(), AnswerKind::BigInt);
        assert_eq!(Answer::from(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn option_and_unit_become_absent() {
        assert!(Answer::from(None::<i32>).is_absent());
        assert!(Answer::from(()).is_absent());
        assert_eq!(Answer::from(Some(3)), Answer::Int(3));
    }

    #[test]
    fn record_string_of_absent_is_none() {
        assert_eq!(Answer::Absent.to_record_string(), None);
        assert_eq!(Answer::from(42).to_record_string().as_deref(), Some("42"));
        assert_eq!(Answer::from(1.5).to_record_string().as_deref(), Some("1.5"));
        assert_eq!(Answer::from(3.0).to_record_string().as_deref(), Some("3"));
    }

    #[test]
    fn non_finite_float_is_warned() {
        assert!(Answer::from(f64::NAN).validate().is_err());
        assert_eq!(
            Answer::from(f64::NEG_INFINITY).validate().unwrap_err().got,
            "-Infinity"
        );
        assert!(Answer::from(1.0).validate().is_ok());
        assert!(Answer::Absent.validate().is_ok());
    }
}
