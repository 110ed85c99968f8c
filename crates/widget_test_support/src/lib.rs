pub mod env;
pub mod parse_cases;
pub mod rng;
pub mod scenario;

use std::fmt::Write;

/// Quote-safe rendering of control text for failure messages.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_control() => {
                let _ = write!(&mut out, "\\u{{{:04X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Human readable report of where two snapshots diverge.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    const MISSING: &str = "<missing>";
    let len = expected.len().max(actual.len());
    fn line<'a>(lines: &'a [String], i: usize) -> &'a str {
        lines.get(i).map(String::as_str).unwrap_or(MISSING)
    }

    let mut out = String::new();
    match (0..len).find(|&i| line(expected, i) != line(actual, i)) {
        Some(first) => {
            let from = first.saturating_sub(2);
            let to = (first + 3).min(len);
            let _ = writeln!(out, "first mismatch at line {}:", first + 1);
            for i in from..to {
                let marker = if i == first { '>' } else { ' ' };
                let _ = writeln!(out, "{marker} {:>4}  expected: {}", i + 1, line(expected, i));
                let _ = writeln!(out, "{marker} {:>4}    actual: {}", i + 1, line(actual, i));
            }
        }
        None if expected.len() != actual.len() => {
            let _ = writeln!(out, "prefix matched but lengths differ");
        }
        None => {}
    }
    let _ = writeln!(
        out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}
