//! Text to number.
//!
//! Two channels share one pipeline. [`parse`] reads programmatic text (the
//! `value` attribute and property). [`parse_entry`] reads what the user typed
//! into the control; in percentage mode the control shows percent points, so
//! the result is divided by 100.

use super::eval::evaluate;
use super::mode::DisplayMode;
use crate::config::FormatConfig;

pub fn parse(text: &str, mode: DisplayMode) -> Option<f64> {
    parse_with(text, mode, &FormatConfig::default())
}

pub fn parse_entry(text: &str, mode: DisplayMode) -> Option<f64> {
    parse_entry_with(text, mode, &FormatConfig::default())
}

pub fn parse_with(text: &str, mode: DisplayMode, config: &FormatConfig) -> Option<f64> {
    let cleaned = clean(text, mode, config)?;
    match evaluate(&cleaned) {
        Ok(value) => Some(value),
        Err(err) => {
            log::trace!(target: "widgets.number", "'{text}' rejected: {err}");
            None
        }
    }
}

pub fn parse_entry_with(text: &str, mode: DisplayMode, config: &FormatConfig) -> Option<f64> {
    let value = parse_with(text, mode, config)?;
    if mode.is_percentage() {
        Some(value / 100.0)
    } else {
        Some(value)
    }
}

/// Strip formatting and normalize separators, leaving an expression that
/// uses `.` as its only decimal point.
fn clean(text: &str, mode: DisplayMode, config: &FormatConfig) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_alphabetic) {
        return None;
    }

    let mut compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    if mode.is_percentage() {
        let suffix = config.percent_suffix.trim();
        if !suffix.is_empty()
            && let Some(stripped) = compact.strip_suffix(suffix)
        {
            compact.truncate(stripped.len());
        }
    }

    let decimal = config.decimal_separator;
    let group = config.grouping_separator;
    let normalized = if compact.contains(decimal) {
        compact
            .chars()
            .filter(|&c| c != group)
            .map(|c| if c == decimal { '.' } else { c })
            .collect()
    } else if group != '.' {
        compact.chars().filter(|&c| c != group).collect()
    } else {
        compact
    };

    if normalized.is_empty() {
        return None;
    }
    Some(normalized)
}
