//! JSON corpus of parser expectations.
//!
//! ```json
//! { "format": "minimalist-parse-cases-v1",
//!   "cases": [ { "id": "comma-decimal", "input": "10,5", "mode": "decimal:2",
//!                "channel": "entry", "expected": 10.5 } ] }
//! ```
//!
//! `expected` is `null` when the text must not produce a value.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use widgets::DisplayMode;

pub const PARSE_CASES_FORMAT_V1: &str = "minimalist-parse-cases-v1";

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Value,
    Entry,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ParseCase {
    pub id: String,
    pub input: String,
    pub mode: String,
    #[serde(default)]
    pub channel: Channel,
    pub expected: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ParseCaseFile {
    format: String,
    cases: Vec<ParseCase>,
}

pub fn load_parse_cases(path: &Path) -> Vec<ParseCase> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read parse cases {path:?}: {err}"));
    let file: ParseCaseFile = serde_json::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse parse cases {path:?}: {err}"));
    assert_eq!(
        file.format, PARSE_CASES_FORMAT_V1,
        "unsupported parse case format in {path:?}"
    );
    let mut seen = BTreeSet::new();
    for case in &file.cases {
        assert!(seen.insert(case.id.clone()), "duplicate parse case id in {path:?}: {}", case.id);
        if let Err(err) = mode_from_label(&case.mode) {
            panic!("parse case '{}' in {path:?}: {err}", case.id);
        }
    }
    file.cases
}

/// `plain`, `percentage`, `decimal:N` or `currency:N` (places optional).
pub fn mode_from_label(label: &str) -> Result<DisplayMode, String> {
    let (kind, places) = match label.split_once(':') {
        Some((kind, places)) => (kind, Some(places)),
        None => (label, None),
    };
    let places = match places {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("bad places in mode '{label}'"))?,
        None => 2,
    };
    match kind.trim() {
        "plain" => Ok(DisplayMode::Plain),
        "percentage" => Ok(DisplayMode::Percentage),
        "decimal" => Ok(DisplayMode::Decimal(places)),
        "currency" => Ok(DisplayMode::Currency(places)),
        other => Err(format!("unknown mode '{other}'")),
    }
}
