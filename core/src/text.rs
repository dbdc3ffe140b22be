fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Removes the indentation shared by every non-blank line, along with leading and trailing blank lines.
///
/// ```
/// use aocr_core::text::strip_indent;
///
/// let input = "
///     1 2
///       3
///     4
/// ";
/// assert_eq!(strip_indent(input), "1 2\n  3\n4");
/// ```
pub fn strip_indent(s: &str) -> String {
    let lines: Vec<&str> = s.lines().collect();

    let Some(first) = lines.iter().position(|l| !is_blank(l)) else {
        return String::new();
    };
    let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);
    let lines = &lines[first..=last];

    let indent = lines
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| indent_width(l))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| &l[indent.min(indent_width(l))..])
        .collect::<Vec<_>>()
        .join("\n")
}
