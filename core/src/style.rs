use colored::{Color, ColoredString, Colorize};

use crate::testing::Verdict;

#[macro_export]
macro_rules! print_success {
    ($fmt:literal $(, $e:expr)* $(,)?) => {{
        use ::colored::Colorize as _;
        println!("{}", format!($fmt $(, $e)*).green())
    }};
}

pub fn is_truecolor_supported() -> bool {
    let Ok(v) = std::env::var("COLORTERM") else {
        return false
    };
    matches!(v.as_str(), "truecolor" | "24bit")
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for log::Level {
    fn color(&self) -> Color {
        use log::Level::*;
        match self {
            Error => Color::BrightRed,
            Warn => Color::BrightYellow,
            Info => Color::Cyan,
            Debug => Color::Magenta,
            Trace => Color::Blue,
        }
    }
}

impl ColorTheme for Verdict {
    fn color(&self) -> Color {
        use Verdict::*;
        if !self::is_truecolor_supported() {
            return match self {
                Passed => Color::Green,
                Failed => Color::Red,
            };
        }

        match self {
            Passed => Color::TrueColor {
                r: 30,
                g: 180,
                b: 40,
            },
            Failed => Color::TrueColor {
                r: 220,
                g: 42,
                b: 42,
            },
        }
    }
}

/// A blue rule like `-- Day 7 ----------`, padded to `width` columns.
pub fn day_banner(day: u8, width: usize) -> ColoredString {
    format!("-- Day {} ", day)
        .chars()
        .chain(std::iter::repeat('-'))
        .take(width.max(10))
        .collect::<String>()
        .blue()
}

pub fn closing_rule(width: usize) -> ColoredString {
    "-".repeat(width).blue()
}
